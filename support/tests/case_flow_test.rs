use httpmock::prelude::*;
use serde_json::json;
use serial_test::serial;

use google_cloud_support::client::{Client, ClientConfig};
use google_cloud_support::http::attachments::list::ListAttachmentsRequest;
use google_cloud_support::http::comments::create::CreateCommentRequest;
use google_cloud_support::http::comments::Comment;

#[ctor::ctor]
fn init() {
    let _ = tracing_subscriber::fmt::try_init();
}

fn new_client(server: &MockServer) -> Client {
    let config = ClientConfig {
        endpoint: server.url("/v2"),
        debug: true,
        ..Default::default()
    };
    Client::new(config.anonymous())
}

#[tokio::test]
#[serial]
async fn test_comment_then_attach() {
    let server = MockServer::start_async().await;
    let comment = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v2/organizations/1/cases/7/comments")
                .header("x-goog-api-client", "rust")
                .header("user-agent", "google-cloud-support");
            then.status(200)
                .json_body(json!({"name": "organizations/1/cases/7/comments/1", "body": "see attached log"}));
        })
        .await;
    let upload = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/upload/v2/organizations/1/cases/7/attachments")
                .query_param("uploadType", "multipart");
            then.status(200).json_body(json!({
                "name": "organizations/1/cases/7/attachments/1",
                "filename": "app.log",
                "sizeBytes": "3"
            }));
        })
        .await;
    let list = server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/organizations/1/cases/7/attachments");
            then.status(200).json_body(json!({
                "attachments": [{"name": "organizations/1/cases/7/attachments/1", "filename": "app.log", "sizeBytes": "3"}]
            }));
        })
        .await;

    let client = new_client(&server);
    client
        .comments()
        .create(&CreateCommentRequest {
            parent: "organizations/1/cases/7".to_string(),
            comment: Comment {
                body: Some("see attached log".to_string()),
                ..Default::default()
            },
        })
        .await
        .unwrap();
    let attachment = client
        .media()
        .upload_media("organizations/1/cases/7", "app.log", "text/plain", b"abc".to_vec())
        .await
        .unwrap();
    let response = client
        .attachments()
        .list(&ListAttachmentsRequest {
            parent: "organizations/1/cases/7".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(response.attachments, vec![attachment]);
    comment.assert_async().await;
    upload.assert_async().await;
    list.assert_async().await;
}
