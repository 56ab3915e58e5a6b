use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::executions::Execution;
use crate::http::history_url;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateExecutionRequest {
    #[serde(skip_serializing)]
    pub project_id: String,
    #[serde(skip_serializing)]
    pub history_id: String,
    /// A unique request ID for server to detect duplicated requests.
    pub request_id: Option<String>,
    #[serde(skip_serializing)]
    pub execution: Execution,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &CreateExecutionRequest) -> RequestBuilder {
    let url = format!("{}/executions", history_url(base_url, &req.project_id, &req.history_id));
    client.post(url).query(req).json(&req.execution)
}
