use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::perf_metrics_summary::PerfMetricsSummary;
use crate::http::steps::StepReference;

#[derive(Clone, PartialEq, Debug, Default)]
pub struct CreatePerfMetricsSummaryRequest {
    pub step: StepReference,
    pub perf_metrics_summary: PerfMetricsSummary,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &CreatePerfMetricsSummaryRequest) -> RequestBuilder {
    let url = format!("{}/perfMetricsSummary", req.step.url(base_url));
    client.post(url).json(&req.perf_metrics_summary)
}
