use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::cases::Case;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListCasesRequest {
    /// Required. The name of a parent to list cases under.
    #[serde(skip_serializing)]
    pub parent: String,
    /// An expression used to filter cases.
    /// If it's an empty string, then no filtering happens. Otherwise, the endpoint returns the cases that match the filter.
    /// Expressions use the following fields separated by `AND` and specified with `=`:
    /// `state`, `priority` and `creator.email`.
    pub filter: Option<String>,
    /// The maximum number of cases fetched with each request. Defaults to 10.
    pub page_size: Option<i32>,
    /// A token identifying the page of results to return. If unspecified, the first page is retrieved.
    pub page_token: Option<String>,
}

/// The response message for the ListCases endpoint.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListCasesResponse {
    /// The list of cases associated with the parent after any filters have been applied.
    #[serde(default)]
    pub cases: Vec<Case>,
    /// A token to retrieve the next page of results.
    /// Set this in the `page_token` field of subsequent `cases.list` requests.
    /// If unspecified, there are no more results to retrieve.
    pub next_page_token: Option<String>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &ListCasesRequest) -> RequestBuilder {
    let url = format!("{}/{}/cases", base_url, req.parent);
    client.get(url).query(req)
}
