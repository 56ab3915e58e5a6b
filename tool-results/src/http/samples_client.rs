use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::samples;
use crate::http::samples::batch_create::{BatchCreatePerfSamplesRequest, BatchCreatePerfSamplesResponse};
use crate::http::samples::list::{ListPerfSamplesRequest, ListPerfSamplesResponse};

#[derive(Clone, Debug)]
pub struct SamplesClient {
    inner: Arc<HttpClient>,
}

impl SamplesClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Creates a batch of PerfSamples.
    /// A client can submit multiple batches of Perf Samples through repeated calls to this method in order to split up a large request payload.
    /// Duplicates and existing timestamp entries will be ignored.
    /// The maximum number of samples per batch is 1000.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn batch_create(
        &self,
        req: &BatchCreatePerfSamplesRequest,
    ) -> Result<BatchCreatePerfSamplesResponse, Error> {
        let builder = samples::batch_create::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Lists the Performance Samples of a given Sample Series.
    /// The list results are sorted by timestamps ascending.
    /// The default page size is 500 samples; and maximum size allowed 5000.
    /// The response token indicates the last returned PerfSample timestamp.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, req: &ListPerfSamplesRequest) -> Result<ListPerfSamplesResponse, Error> {
        let builder = samples::list::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}
