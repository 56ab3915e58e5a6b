use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::violations;
use crate::http::violations::acknowledge::{AcknowledgeViolationRequest, AcknowledgeViolationResponse};
use crate::http::violations::list::{ListViolationsRequest, ListViolationsResponse};
use crate::http::violations::Violation;

#[derive(Clone, Debug)]
pub struct ViolationsClient {
    inner: Arc<HttpClient>,
}

impl ViolationsClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Retrieves Assured Workload Violation based on ID.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(&self, name: &str) -> Result<Violation, Error> {
        let builder = violations::get::build(self.inner.endpoint(), self.inner.http(), name);
        self.inner.send(builder).await
    }

    /// Lists the Violations in the AssuredWorkload Environment.
    /// Callers may also choose to read across multiple Workloads as per AIP-159 by using '-' (the hyphen or dash character) as a wildcard character instead of workload-id in the parent.
    /// Format `organizations/{org_id}/locations/{location}/workloads/-`
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, req: &ListViolationsRequest) -> Result<ListViolationsResponse, Error> {
        let builder = violations::list::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Acknowledges an existing violation. By acknowledging a violation, users acknowledge the existence of a compliance violation in their workload and decide to ignore it due to a valid business justification.
    /// Acknowledgement is a permanent operation and it cannot be reverted.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn acknowledge(&self, req: &AcknowledgeViolationRequest) -> Result<AcknowledgeViolationResponse, Error> {
        let builder = violations::acknowledge::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}
