use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::environments::Environment;
use crate::http::execution_url;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListEnvironmentsRequest {
    #[serde(skip_serializing)]
    pub project_id: String,
    #[serde(skip_serializing)]
    pub history_id: String,
    #[serde(skip_serializing)]
    pub execution_id: String,
    /// The maximum number of Environments to fetch. Default value: 25.
    /// The server will use this default if the field is not set or has a value of 0.
    pub page_size: Option<i32>,
    /// A continuation token to resume the query at the next item.
    pub page_token: Option<String>,
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListEnvironmentsResponse {
    /// Environments. Always set.
    #[serde(default)]
    pub environments: Vec<Environment>,
    /// A Execution id. Always set.
    pub execution_id: Option<String>,
    /// A History id. Always set.
    pub history_id: Option<String>,
    /// A continuation token to resume the query at the next item.
    /// Will only be set if there are more Environments to fetch.
    pub next_page_token: Option<String>,
    /// A Project id. Always set.
    pub project_id: Option<String>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &ListEnvironmentsRequest) -> RequestBuilder {
    let url = format!(
        "{}/environments",
        execution_url(base_url, &req.project_id, &req.history_id, &req.execution_id)
    );
    client.get(url).query(req)
}
