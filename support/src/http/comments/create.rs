use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::comments::Comment;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    /// Required. The name of the case to which the comment should be added.
    #[serde(skip_serializing)]
    pub parent: String,
    /// The comment to be added.
    #[serde(skip_serializing)]
    pub comment: Comment,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &CreateCommentRequest) -> RequestBuilder {
    let url = format!("{}/{}/comments", base_url, req.parent);
    client.post(url).json(&req.comment)
}
