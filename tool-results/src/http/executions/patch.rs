use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::execution_url;
use crate::http::executions::Execution;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchExecutionRequest {
    #[serde(skip_serializing)]
    pub project_id: String,
    #[serde(skip_serializing)]
    pub history_id: String,
    #[serde(skip_serializing)]
    pub execution_id: String,
    /// A unique request ID for server to detect duplicated requests.
    pub request_id: Option<String>,
    /// The fields to update. Fields left unset keep their current value.
    #[serde(skip_serializing)]
    pub execution: Execution,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &PatchExecutionRequest) -> RequestBuilder {
    let url = execution_url(base_url, &req.project_id, &req.history_id, &req.execution_id);
    client.patch(url).query(req).json(&req.execution)
}
