use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;
use google_cloud_longrunning::longrunning::Operation;
use google_cloud_longrunning::model::Operation as InternalOperation;
use google_cloud_longrunning::operations_client::OperationsClient;

use crate::http::pipelines;
use crate::http::pipelines::run::{RunPipelineRequest, RunPipelineResponse};

#[derive(Clone, Debug)]
pub struct PipelinesClient {
    inner: Arc<HttpClient>,
}

impl PipelinesClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Runs a pipeline. The returned Operation's metadata field will contain a google.cloud.lifesciences.v2beta.Metadata object describing the status of the pipeline execution.
    /// The response field will contain a google.cloud.lifesciences.v2beta.RunPipelineResponse object if the pipeline completes successfully.
    /// **Note:** Before you can use this method, the *Life Sciences Service Agent* must have access to your project.
    /// This is done automatically when the Cloud Life Sciences API is first enabled, but if you delete this permission you must disable and re-enable the API to grant the Life Sciences Service Agent the required permissions.
    /// Authorization requires the following Google IAM permission: * `lifesciences.workflows.run`
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn run(&self, req: &RunPipelineRequest) -> Result<Operation<RunPipelineResponse>, Error> {
        let builder = pipelines::run::build(self.inner.endpoint(), self.inner.http(), req);
        let operation: InternalOperation = self.inner.send(builder).await?;
        Ok(Operation::new(OperationsClient::new(self.inner.clone()), operation))
    }
}
