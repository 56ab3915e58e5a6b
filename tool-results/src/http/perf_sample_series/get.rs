use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::perf_sample_series::PerfSampleSeriesReference;

pub(crate) fn build(base_url: &str, client: &Client, series: &PerfSampleSeriesReference) -> RequestBuilder {
    client.get(series.url(base_url))
}
