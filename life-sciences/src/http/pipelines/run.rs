use std::collections::HashMap;

use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::pipelines::Pipeline;

/// The arguments to the `RunPipeline` method.
/// The requesting user must have the `iam.serviceAccounts.actAs` permission for the Cloud Life Sciences service account or the request will fail.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RunPipelineRequest {
    /// The project and location that this request should be executed against.
    #[serde(skip_serializing)]
    pub parent: String,
    /// Required. The description of the pipeline to run.
    pub pipeline: Pipeline,
    /// User-defined labels to associate with the returned operation.
    /// These labels are not propagated to any Google Cloud Platform resources used by the operation, and can be modified at any time.
    /// To associate labels with resources created while executing the operation, see the appropriate resource message (for example, `VirtualMachine`).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
    /// The name of an existing Pub/Sub topic.
    /// The server will publish messages to this topic whenever the status of the operation changes.
    /// The Life Sciences Service Agent account must have publisher permissions to the specified topic or notifications will not be sent.
    pub pub_sub_topic: Option<String>,
}

/// The response to the RunPipeline method, returned in the operation's result field on success.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub struct RunPipelineResponse {}

pub(crate) fn build(base_url: &str, client: &Client, req: &RunPipelineRequest) -> RequestBuilder {
    let url = format!("{}/{}/pipelines:run", base_url, req.parent);
    client.post(url).json(req)
}
