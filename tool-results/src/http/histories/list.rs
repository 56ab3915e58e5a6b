use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::histories::History;
use crate::http::project_url;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListHistoriesRequest {
    /// A Project id. Required.
    #[serde(skip_serializing)]
    pub project_id: String,
    /// If set, only return histories with the given name. Optional.
    pub filter_by_name: Option<String>,
    /// The maximum number of Histories to fetch. Default value: 20.
    /// The server will use this default if the field is not set or has a value of 0.
    /// Any value greater than 100 will be treated as 100. Optional.
    pub page_size: Option<i32>,
    /// A continuation token to resume the query at the next item. Optional.
    pub page_token: Option<String>,
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListHistoriesResponse {
    /// Histories.
    #[serde(default)]
    pub histories: Vec<History>,
    /// A continuation token to resume the query at the next item.
    /// Will only be set if there are more histories to fetch.
    /// Tokens are valid for up to one hour from the time of the first list request.
    pub next_page_token: Option<String>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &ListHistoriesRequest) -> RequestBuilder {
    let url = format!("{}/histories", project_url(base_url, &req.project_id));
    client.get(url).query(req)
}
