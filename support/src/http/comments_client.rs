use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::comments;
use crate::http::comments::create::CreateCommentRequest;
use crate::http::comments::list::{ListCommentsRequest, ListCommentsResponse};
use crate::http::comments::Comment;

#[derive(Clone, Debug)]
pub struct CommentsClient {
    inner: Arc<HttpClient>,
}

impl CommentsClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Add a new comment to a case. The comment must have the following fields set: `body`.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create(&self, req: &CreateCommentRequest) -> Result<Comment, Error> {
        let builder = comments::create::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// List all the comments associated with a case.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, req: &ListCommentsRequest) -> Result<ListCommentsResponse, Error> {
        let builder = comments::list::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::http::comments::create::CreateCommentRequest;
    use crate::http::comments::list::ListCommentsRequest;
    use crate::http::comments::Comment;
    use crate::http::test::create_client;

    #[tokio::test]
    async fn test_create_and_list() {
        let server = MockServer::start_async().await;
        let create = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v2/projects/p/cases/42/comments")
                    .json_body(json!({"body": "Any update?"}));
                then.status(200).json_body(json!({
                    "name": "projects/p/cases/42/comments/c1",
                    "body": "Any update?",
                    "creator": {"displayName": "Ops", "googleSupport": false}
                }));
            })
            .await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/projects/p/cases/42/comments")
                    .query_param("pageToken", "next");
                then.status(200).json_body(json!({
                    "comments": [
                        {"name": "projects/p/cases/42/comments/c2", "body": "Looking into it", "creator": {"googleSupport": true}}
                    ]
                }));
            })
            .await;

        let client = create_client(&server);
        let comment = client
            .comments()
            .create(&CreateCommentRequest {
                parent: "projects/p/cases/42".to_string(),
                comment: Comment {
                    body: Some("Any update?".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(comment.name.as_deref(), Some("projects/p/cases/42/comments/c1"));

        let response = client
            .comments()
            .list(&ListCommentsRequest {
                parent: "projects/p/cases/42".to_string(),
                page_token: Some("next".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(response.comments[0].creator.as_ref().unwrap().google_support, Some(true));
        create.assert_async().await;
        list.assert_async().await;
    }
}
