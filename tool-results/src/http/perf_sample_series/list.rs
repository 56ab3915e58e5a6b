use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::perf_sample_series::{PerfSampleSeries, SampleSeriesLabel};
use crate::http::steps::StepReference;

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ListPerfSampleSeriesRequest {
    pub step: StepReference,
    /// Specify one or more PerfMetricType values such as CPU to filter the result
    pub filter: Vec<SampleSeriesLabel>,
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListPerfSampleSeriesResponse {
    /// The resulting PerfSampleSeries sorted by id
    #[serde(default)]
    pub perf_sample_series: Vec<PerfSampleSeries>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &ListPerfSampleSeriesRequest) -> RequestBuilder {
    let url = format!("{}/perfSampleSeries", req.step.url(base_url));
    let mut builder = client.get(url);
    for label in &req.filter {
        builder = builder.query(&[("filter", label)]);
    }
    builder
}
