use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::executions::Execution;
use crate::http::history_url;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListExecutionsRequest {
    #[serde(skip_serializing)]
    pub project_id: String,
    #[serde(skip_serializing)]
    pub history_id: String,
    /// The maximum number of Executions to fetch. Default value: 25.
    /// Any value greater than 100 will be treated as 100.
    pub page_size: Option<i32>,
    /// A continuation token to resume the query at the next item.
    pub page_token: Option<String>,
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListExecutionsResponse {
    /// Executions. Always set.
    #[serde(default)]
    pub executions: Vec<Execution>,
    /// A continuation token to resume the query at the next item.
    /// Will only be set if there are more Executions to fetch.
    pub next_page_token: Option<String>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &ListExecutionsRequest) -> RequestBuilder {
    let url = format!("{}/executions", history_url(base_url, &req.project_id, &req.history_id));
    client.get(url).query(req)
}
