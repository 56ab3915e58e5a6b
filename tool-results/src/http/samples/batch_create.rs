use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::perf_sample_series::PerfSampleSeriesReference;
use crate::http::samples::PerfSample;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct BatchCreatePerfSamplesRequest {
    /// The sample series the samples are appended to.
    #[serde(skip)]
    pub series: PerfSampleSeriesReference,
    /// The set of PerfSamples to create should not include existing timestamps
    #[serde(default)]
    pub perf_samples: Vec<PerfSample>,
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct BatchCreatePerfSamplesResponse {
    #[serde(default)]
    pub perf_samples: Vec<PerfSample>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &BatchCreatePerfSamplesRequest) -> RequestBuilder {
    let url = format!("{}/samples:batchCreate", req.series.url(base_url));
    client.post(url).json(req)
}
