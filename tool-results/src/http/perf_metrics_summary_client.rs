use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::perf_metrics_summary;
use crate::http::perf_metrics_summary::create::CreatePerfMetricsSummaryRequest;
use crate::http::perf_metrics_summary::PerfMetricsSummary;

#[derive(Clone, Debug)]
pub struct PerfMetricsSummaryClient {
    inner: Arc<HttpClient>,
}

impl PerfMetricsSummaryClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Creates a PerfMetricsSummary resource. Returns the existing one if it has already been created.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create(&self, req: &CreatePerfMetricsSummaryRequest) -> Result<PerfMetricsSummary, Error> {
        let builder = perf_metrics_summary::create::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}
