use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::test_cases;
use crate::http::test_cases::get::GetTestCaseRequest;
use crate::http::test_cases::list::{ListTestCasesRequest, ListTestCasesResponse};
use crate::http::test_cases::TestCase;

#[derive(Clone, Debug)]
pub struct TestCasesClient {
    inner: Arc<HttpClient>,
}

impl TestCasesClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Gets details of a Test Case for a Step. Experimental test cases API. Still in active development.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(&self, req: &GetTestCaseRequest) -> Result<TestCase, Error> {
        let builder = test_cases::get::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Lists Test Cases attached to a Step. Experimental test cases API. Still in active development.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, req: &ListTestCasesRequest) -> Result<ListTestCasesResponse, Error> {
        let builder = test_cases::list::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::http::steps::StepReference;
    use crate::http::test::create_client;
    use crate::http::test_cases::get::GetTestCaseRequest;
    use crate::http::test_cases::list::ListTestCasesRequest;
    use crate::http::test_cases::TestCaseStatus;

    const BASE: &str = "/toolresults/v1beta3/projects/p1/histories/bh.1/executions/5/steps/s1/testCases";

    fn step() -> StepReference {
        StepReference {
            project_id: "p1".to_string(),
            history_id: "bh.1".to_string(),
            execution_id: "5".to_string(),
            step_id: "s1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_and_list() {
        let server = MockServer::start_async().await;
        let get = server
            .mock_async(|when, then| {
                when.method(GET).path(format!("{BASE}/1234"));
                then.status(200).json_body(json!({
                    "testCaseId": "1234",
                    "status": "failed",
                    "testCaseReference": {"name": "testLogin", "className": "com.example.LoginTest"},
                    "stackTraces": [{"exception": "java.lang.AssertionError"}],
                    "elapsedTime": {"seconds": "2", "nanos": 5000000}
                }));
            })
            .await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET).path(BASE).query_param("pageSize", "100");
                then.status(200).json_body(json!({
                    "testCases": [{"testCaseId": "1", "status": "passed"}, {"testCaseId": "2", "status": "skipped", "skippedMessage": "ignored"}]
                }));
            })
            .await;

        let client = create_client(&server);
        let test_case = client
            .test_cases()
            .get(&GetTestCaseRequest {
                step: step(),
                test_case_id: "1234".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(test_case.status, Some(TestCaseStatus::Failed));
        assert_eq!(
            test_case.stack_traces[0].exception.as_deref(),
            Some("java.lang.AssertionError")
        );
        assert_eq!(
            test_case.test_case_reference.unwrap().class_name.as_deref(),
            Some("com.example.LoginTest")
        );

        let response = client
            .test_cases()
            .list(&ListTestCasesRequest {
                step: step(),
                page_size: Some(100),
                page_token: None,
            })
            .await
            .unwrap();
        assert_eq!(response.test_cases[1].status, Some(TestCaseStatus::Skipped));
        assert_eq!(response.test_cases[1].skipped_message.as_deref(), Some("ignored"));
        get.assert_async().await;
        list.assert_async().await;
    }
}
