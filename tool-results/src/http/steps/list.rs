use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::execution_url;
use crate::http::steps::Step;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListStepsRequest {
    #[serde(skip_serializing)]
    pub project_id: String,
    #[serde(skip_serializing)]
    pub history_id: String,
    #[serde(skip_serializing)]
    pub execution_id: String,
    /// The maximum number of Steps to fetch. Default value: 25.
    /// The server will use this default if the field is not set or has a value of 0.
    pub page_size: Option<i32>,
    /// A continuation token to resume the query at the next item.
    pub page_token: Option<String>,
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListStepsResponse {
    /// A continuation token to resume the query at the next item.
    /// If set, indicates that there are more steps to read, by calling list again with this value in the page_token field.
    pub next_page_token: Option<String>,
    /// Steps.
    #[serde(default)]
    pub steps: Vec<Step>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &ListStepsRequest) -> RequestBuilder {
    let url = format!(
        "{}/steps",
        execution_url(base_url, &req.project_id, &req.history_id, &req.execution_id)
    );
    client.get(url).query(req)
}
