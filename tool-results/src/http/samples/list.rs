use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::perf_sample_series::PerfSampleSeriesReference;
use crate::http::samples::PerfSample;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListPerfSamplesRequest {
    /// The sample series to read from.
    #[serde(skip)]
    pub series: PerfSampleSeriesReference,
    /// The default page size is 500 samples, and the maximum size is 5000.
    /// If the page_size is greater than 5000, the effective page size will be 5000
    pub page_size: Option<i32>,
    /// Optional, the next_page_token returned in the previous response
    pub page_token: Option<String>,
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListPerfSamplesResponse {
    /// Optional, returned if result size exceeds the page size specified in the request (or the default page size, 500, if unspecified).
    /// It indicates the last sample timestamp to be used as page_token in subsequent request
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub perf_samples: Vec<PerfSample>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &ListPerfSamplesRequest) -> RequestBuilder {
    let url = format!("{}/samples", req.series.url(base_url));
    client.get(url).query(req)
}
