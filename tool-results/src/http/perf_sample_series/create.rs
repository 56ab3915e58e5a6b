use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::perf_sample_series::PerfSampleSeries;
use crate::http::steps::StepReference;

#[derive(Clone, PartialEq, Debug, Default)]
pub struct CreatePerfSampleSeriesRequest {
    pub step: StepReference,
    pub perf_sample_series: PerfSampleSeries,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &CreatePerfSampleSeriesRequest) -> RequestBuilder {
    let url = format!("{}/perfSampleSeries", req.step.url(base_url));
    client.post(url).json(&req.perf_sample_series)
}
