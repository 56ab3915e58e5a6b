use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::executions;
use crate::http::executions::create::CreateExecutionRequest;
use crate::http::executions::list::{ListExecutionsRequest, ListExecutionsResponse};
use crate::http::executions::patch::PatchExecutionRequest;
use crate::http::executions::Execution;

#[derive(Clone, Debug)]
pub struct ExecutionsClient {
    inner: Arc<HttpClient>,
}

impl ExecutionsClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Creates an Execution. The returned Execution will have the id set.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create(&self, req: &CreateExecutionRequest) -> Result<Execution, Error> {
        let builder = executions::create::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Gets an Execution.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(&self, project_id: &str, history_id: &str, execution_id: &str) -> Result<Execution, Error> {
        let builder =
            executions::get::build(self.inner.endpoint(), self.inner.http(), project_id, history_id, execution_id);
        self.inner.send(builder).await
    }

    /// Lists Executions for a given History.
    /// The executions are sorted by creation_time in descending order.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, req: &ListExecutionsRequest) -> Result<ListExecutionsResponse, Error> {
        let builder = executions::list::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Updates an existing Execution with the supplied partial entity.
    /// Returns FAILED_PRECONDITION if the requested state transition is illegal.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn patch(&self, req: &PatchExecutionRequest) -> Result<Execution, Error> {
        let builder = executions::patch::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use httpmock::Method::PATCH;
    use serde_json::json;
    use time::macros::datetime;
    use time::OffsetDateTime;

    use google_cloud_gax::status::Code;

    use crate::http::executions::create::CreateExecutionRequest;
    use crate::http::executions::list::ListExecutionsRequest;
    use crate::http::executions::patch::PatchExecutionRequest;
    use crate::http::executions::{AndroidAppInfo, AndroidTest, Execution, Specification};
    use crate::http::test::create_client;
    use crate::http::types::{Duration, Outcome, OutcomeSummary, State};

    const BASE: &str = "/toolresults/v1beta3/projects/p1/histories/bh.1/executions";

    #[tokio::test]
    async fn test_create_and_get() {
        let server = MockServer::start_async().await;
        let create = server
            .mock_async(|when, then| {
                when.method(POST).path(BASE).json_body(json!({
                    "state": "inProgress",
                    "specification": {
                        "androidTest": {
                            "androidAppInfo": {"packageName": "com.example.app"},
                            "testTimeout": {"seconds": "900", "nanos": 0}
                        }
                    }
                }));
                then.status(200).json_body(json!({
                    "executionId": "5",
                    "state": "inProgress",
                    "creationTime": {"seconds": "1700000000", "nanos": 0}
                }));
            })
            .await;
        let get = server
            .mock_async(|when, then| {
                when.method(GET).path(format!("{BASE}/5"));
                then.status(200).json_body(json!({
                    "executionId": "5",
                    "state": "complete",
                    "outcome": {"summary": "failure", "failureDetail": {"crashed": true}}
                }));
            })
            .await;

        let client = create_client(&server);
        let execution = client
            .executions()
            .create(&CreateExecutionRequest {
                project_id: "p1".to_string(),
                history_id: "bh.1".to_string(),
                request_id: None,
                execution: Execution {
                    state: Some(State::InProgress),
                    specification: Some(Specification {
                        android_test: Some(AndroidTest {
                            android_app_info: Some(AndroidAppInfo {
                                package_name: Some("com.example.app".to_string()),
                                ..Default::default()
                            }),
                            test_timeout: Some(Duration::from(std::time::Duration::from_secs(900))),
                            ..Default::default()
                        }),
                        ios_test: None,
                    }),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(execution.execution_id.as_deref(), Some("5"));
        let created = OffsetDateTime::try_from(execution.creation_time.unwrap()).unwrap();
        assert_eq!(created, datetime!(2023-11-14 22:13:20 UTC));

        let execution = client.executions().get("p1", "bh.1", "5").await.unwrap();
        let outcome = execution.outcome.unwrap();
        assert_eq!(outcome.summary, Some(OutcomeSummary::Failure));
        assert_eq!(outcome.failure_detail.unwrap().crashed, Some(true));
        create.assert_async().await;
        get.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_and_patch() {
        let server = MockServer::start_async().await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET).path(BASE).query_param("pageToken", "t1");
                then.status(200).json_body(json!({"executions": [{"executionId": "4"}]}));
            })
            .await;
        let patch = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path(format!("{BASE}/5"))
                    .query_param("requestId", "r-2")
                    .json_body(json!({"state": "complete", "outcome": {"summary": "success"}}));
                then.status(200).json_body(json!({"executionId": "5", "state": "complete"}));
            })
            .await;

        let client = create_client(&server);
        let response = client
            .executions()
            .list(&ListExecutionsRequest {
                project_id: "p1".to_string(),
                history_id: "bh.1".to_string(),
                page_size: None,
                page_token: Some("t1".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(response.executions[0].execution_id.as_deref(), Some("4"));
        assert_eq!(response.next_page_token, None);

        let execution = client
            .executions()
            .patch(&PatchExecutionRequest {
                project_id: "p1".to_string(),
                history_id: "bh.1".to_string(),
                execution_id: "5".to_string(),
                request_id: Some("r-2".to_string()),
                execution: Execution {
                    state: Some(State::Complete),
                    outcome: Some(Outcome {
                        summary: Some(OutcomeSummary::Success),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(execution.state, Some(State::Complete));
        list.assert_async().await;
        patch.assert_async().await;
    }

    #[tokio::test]
    async fn test_illegal_transition() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PATCH).path(format!("{BASE}/6"));
                then.status(400).json_body(json!({
                    "error": {
                        "code": 400,
                        "message": "Execution is already complete",
                        "status": "FAILED_PRECONDITION"
                    }
                }));
            })
            .await;
        let client = create_client(&server);
        let err = client
            .executions()
            .patch(&PatchExecutionRequest {
                project_id: "p1".to_string(),
                history_id: "bh.1".to_string(),
                execution_id: "6".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(Code::FailedPrecondition));
    }
}
