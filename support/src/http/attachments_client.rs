use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::attachments;
use crate::http::attachments::list::{ListAttachmentsRequest, ListAttachmentsResponse};

#[derive(Clone, Debug)]
pub struct AttachmentsClient {
    inner: Arc<HttpClient>,
}

impl AttachmentsClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// List all the attachments associated with a support case.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, req: &ListAttachmentsRequest) -> Result<ListAttachmentsResponse, Error> {
        let builder = attachments::list::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}
