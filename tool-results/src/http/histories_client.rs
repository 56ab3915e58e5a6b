use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::histories;
use crate::http::histories::create::CreateHistoryRequest;
use crate::http::histories::list::{ListHistoriesRequest, ListHistoriesResponse};
use crate::http::histories::History;

#[derive(Clone, Debug)]
pub struct HistoriesClient {
    inner: Arc<HttpClient>,
}

impl HistoriesClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Creates a History. The returned History will have the id set.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create(&self, req: &CreateHistoryRequest) -> Result<History, Error> {
        let builder = histories::create::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Gets a History.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(&self, project_id: &str, history_id: &str) -> Result<History, Error> {
        let builder = histories::get::build(self.inner.endpoint(), self.inner.http(), project_id, history_id);
        self.inner.send(builder).await
    }

    /// Lists Histories for a given Project.
    /// The histories are sorted by modification time in descending order.
    /// The history_id key will be used to order the history with the same modification time.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, req: &ListHistoriesRequest) -> Result<ListHistoriesResponse, Error> {
        let builder = histories::list::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use serde_json::json;

    use google_cloud_gax::status::Code;

    use crate::http::histories::create::CreateHistoryRequest;
    use crate::http::histories::list::ListHistoriesRequest;
    use crate::http::histories::{History, TestPlatform};
    use crate::http::test::create_client;

    #[tokio::test]
    async fn test_create_and_get() {
        let server = MockServer::start_async().await;
        let create = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/toolresults/v1beta3/projects/p1/histories")
                    .query_param("requestId", "r-1")
                    .json_body(json!({"name": "com.example.app", "displayName": "Example", "testPlatform": "android"}));
                then.status(200).json_body(json!({
                    "historyId": "bh.1",
                    "name": "com.example.app",
                    "displayName": "Example",
                    "testPlatform": "android"
                }));
            })
            .await;
        let get = server
            .mock_async(|when, then| {
                when.method(GET).path("/toolresults/v1beta3/projects/p1/histories/bh.1");
                then.status(200).json_body(json!({"historyId": "bh.1", "testPlatform": "ios"}));
            })
            .await;

        let client = create_client(&server);
        let history = client
            .histories()
            .create(&CreateHistoryRequest {
                project_id: "p1".to_string(),
                request_id: Some("r-1".to_string()),
                history: History {
                    display_name: Some("Example".to_string()),
                    name: Some("com.example.app".to_string()),
                    test_platform: Some(TestPlatform::Android),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(history.history_id.as_deref(), Some("bh.1"));
        let history = client.histories().get("p1", "bh.1").await.unwrap();
        assert_eq!(history.test_platform, Some(TestPlatform::Ios));
        create.assert_async().await;
        get.assert_async().await;
    }

    #[tokio::test]
    async fn test_list() {
        let server = MockServer::start_async().await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/toolresults/v1beta3/projects/p1/histories")
                    .query_param("filterByName", "com.example.app")
                    .query_param("pageSize", "2");
                then.status(200).json_body(json!({
                    "histories": [{"historyId": "bh.1"}, {"historyId": "bh.2"}],
                    "nextPageToken": "next"
                }));
            })
            .await;

        let client = create_client(&server);
        let response = client
            .histories()
            .list(&ListHistoriesRequest {
                project_id: "p1".to_string(),
                filter_by_name: Some("com.example.app".to_string()),
                page_size: Some(2),
                page_token: None,
            })
            .await
            .unwrap();
        assert_eq!(response.histories.len(), 2);
        assert_eq!(response.next_page_token.as_deref(), Some("next"));
        list.assert_async().await;
    }

    #[tokio::test]
    async fn test_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/toolresults/v1beta3/projects/p1/histories/missing");
                then.status(404).json_body(json!({
                    "error": {"code": 404, "message": "History not found", "status": "NOT_FOUND"}
                }));
            })
            .await;
        let client = create_client(&server);
        let err = client.histories().get("p1", "missing").await.unwrap_err();
        assert_eq!(err.status(), Some(Code::NotFound));
    }
}
