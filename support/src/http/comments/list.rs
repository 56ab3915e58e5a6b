use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::comments::Comment;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListCommentsRequest {
    /// Required. The name of the case for which to list comments.
    #[serde(skip_serializing)]
    pub parent: String,
    /// The maximum number of comments to fetch. Defaults to 10.
    pub page_size: Option<i32>,
    /// A token identifying the page of results to return. If unspecified, the first page is returned.
    pub page_token: Option<String>,
}

/// The response message for the ListComments endpoint.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListCommentsResponse {
    /// List of the comments associated with the case.
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// A token to retrieve the next page of results.
    /// Set this in the `page_token` field of subsequent `cases.comments.list` requests.
    /// If unspecified, there are no more results to retrieve.
    pub next_page_token: Option<String>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &ListCommentsRequest) -> RequestBuilder {
    let url = format!("{}/{}/comments", base_url, req.parent);
    client.get(url).query(req)
}
