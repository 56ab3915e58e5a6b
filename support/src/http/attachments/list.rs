use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::attachments::Attachment;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListAttachmentsRequest {
    /// Required. The name of the Case object for which attachments should be listed.
    #[serde(skip_serializing)]
    pub parent: String,
    /// The maximum number of attachments fetched with each request.
    /// If not provided, the default is 10. The maximum page size that will be returned is 100.
    pub page_size: Option<i32>,
    /// A token identifying the page of results to return. If unspecified, the first page is retrieved.
    pub page_token: Option<String>,
}

/// The response message for the ListAttachments endpoint.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListAttachmentsResponse {
    /// The list of attachments associated with a case.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// A token to retrieve the next page of results.
    /// Set this in the `page_token` field of subsequent `cases.attachments.list` requests.
    /// If unspecified, there are no more results to retrieve.
    pub next_page_token: Option<String>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &ListAttachmentsRequest) -> RequestBuilder {
    let url = format!("{}/{}/attachments", base_url, req.parent);
    client.get(url).query(req)
}
