use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::execution_url;
use crate::http::steps::Step;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateStepRequest {
    #[serde(skip_serializing)]
    pub project_id: String,
    #[serde(skip_serializing)]
    pub history_id: String,
    #[serde(skip_serializing)]
    pub execution_id: String,
    /// A unique request ID for server to detect duplicated requests.
    pub request_id: Option<String>,
    #[serde(skip_serializing)]
    pub step: Step,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &CreateStepRequest) -> RequestBuilder {
    let url = format!(
        "{}/steps",
        execution_url(base_url, &req.project_id, &req.history_id, &req.execution_id)
    );
    client.post(url).query(req).json(&req.step)
}
