use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::histories::History;
use crate::http::project_url;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateHistoryRequest {
    /// A Project id. Required.
    #[serde(skip_serializing)]
    pub project_id: String,
    /// A unique request ID for server to detect duplicated requests.
    /// For example, a UUID. Optional, but strongly recommended.
    pub request_id: Option<String>,
    #[serde(skip_serializing)]
    pub history: History,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &CreateHistoryRequest) -> RequestBuilder {
    let url = format!("{}/histories", project_url(base_url, &req.project_id));
    client.post(url).query(req).json(&req.history)
}
