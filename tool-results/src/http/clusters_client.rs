use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::clusters;
use crate::http::clusters::get::GetClusterRequest;
use crate::http::clusters::list::ListScreenshotClustersResponse;
use crate::http::clusters::ScreenshotCluster;

#[derive(Clone, Debug)]
pub struct ClustersClient {
    inner: Arc<HttpClient>,
}

impl ClustersClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Retrieves a single screenshot cluster by its ID
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(&self, req: &GetClusterRequest) -> Result<ScreenshotCluster, Error> {
        let builder = clusters::get::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Lists Screenshot Clusters.
    /// Returns the list of screenshot clusters corresponding to an execution.
    /// Screenshot clusters are created after the execution is finished.
    /// Clusters are created from a set of screenshots. Between any two screenshots, a matching score is calculated based off their metadata that determines how similar they are.
    /// Screenshots are placed in the cluster that has screens which have the highest matching scores.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(
        &self,
        project_id: &str,
        history_id: &str,
        execution_id: &str,
    ) -> Result<ListScreenshotClustersResponse, Error> {
        let builder =
            clusters::list::build(self.inner.endpoint(), self.inner.http(), project_id, history_id, execution_id);
        self.inner.send(builder).await
    }
}
