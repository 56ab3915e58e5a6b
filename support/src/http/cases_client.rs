use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::cases;
use crate::http::cases::create::CreateCaseRequest;
use crate::http::cases::escalate::EscalateCaseRequest;
use crate::http::cases::list::{ListCasesRequest, ListCasesResponse};
use crate::http::cases::patch::PatchCaseRequest;
use crate::http::cases::search::{SearchCasesRequest, SearchCasesResponse};
use crate::http::cases::Case;

#[derive(Clone, Debug)]
pub struct CasesClient {
    inner: Arc<HttpClient>,
}

impl CasesClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Create a new case and associate it with a parent.
    /// It must have the following fields set: `display_name`, `description`, `classification`, and `priority`.
    /// If you're just testing the API and don't want to route your case to an agent, set `testCase=true`.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create(&self, req: &CreateCaseRequest) -> Result<Case, Error> {
        let builder = cases::create::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Retrieve a case.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(&self, name: &str) -> Result<Case, Error> {
        let builder = cases::get::build(self.inner.endpoint(), self.inner.http(), name);
        self.inner.send(builder).await
    }

    /// Retrieve all cases under a parent, but not its children.
    /// For example, listing cases under an organization only returns the cases that are directly parented by that organization.
    /// To retrieve cases under an organization and its projects, use `cases.search`.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, req: &ListCasesRequest) -> Result<ListCasesResponse, Error> {
        let builder = cases::list::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Update a case. Only some fields can be updated.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn patch(&self, req: &PatchCaseRequest) -> Result<Case, Error> {
        let builder = cases::patch::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Search for cases using a query.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn search(&self, req: &SearchCasesRequest) -> Result<SearchCasesResponse, Error> {
        let builder = cases::search::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Close a case.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn close(&self, name: &str) -> Result<Case, Error> {
        let builder = cases::close::build(self.inner.endpoint(), self.inner.http(), name);
        self.inner.send(builder).await
    }

    /// Escalate a case, starting the Google Cloud Support escalation management process.
    /// This operation is only available for some support services.
    /// Go to https://cloud.google.com/support and look for 'Technical support escalations' in the feature list to find out which ones let you do that.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn escalate(&self, req: &EscalateCaseRequest) -> Result<Case, Error> {
        let builder = cases::escalate::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use httpmock::Method::PATCH;
    use serde_json::json;

    use google_cloud_gax::status::Code;

    use crate::http::cases::create::CreateCaseRequest;
    use crate::http::cases::escalate::EscalateCaseRequest;
    use crate::http::cases::list::ListCasesRequest;
    use crate::http::cases::patch::PatchCaseRequest;
    use crate::http::cases::search::SearchCasesRequest;
    use crate::http::cases::{Case, CaseClassification, Escalation, Priority, Reason, State};
    use crate::http::test::create_client;

    const CASE: &str = "projects/p/cases/42";

    #[tokio::test]
    async fn test_create_and_get() {
        let server = MockServer::start_async().await;
        let create = server
            .mock_async(|when, then| {
                when.method(POST).path("/v2/projects/p/cases").json_body(json!({
                    "displayName": "Instance unreachable",
                    "description": "SSH times out",
                    "classification": {"id": "100152"},
                    "priority": "P2",
                    "testCase": true
                }));
                then.status(200).json_body(json!({
                    "name": CASE,
                    "displayName": "Instance unreachable",
                    "state": "NEW",
                    "priority": "P2"
                }));
            })
            .await;
        let get = server
            .mock_async(|when, then| {
                when.method(GET).path(format!("/v2/{CASE}"));
                then.status(200).json_body(json!({"name": CASE, "state": "ACTION_REQUIRED"}));
            })
            .await;

        let client = create_client(&server);
        let case = client
            .cases()
            .create(&CreateCaseRequest {
                parent: "projects/p".to_string(),
                case: Case {
                    display_name: Some("Instance unreachable".to_string()),
                    description: Some("SSH times out".to_string()),
                    classification: Some(CaseClassification {
                        id: Some("100152".to_string()),
                        display_name: None,
                    }),
                    priority: Some(Priority::P2),
                    test_case: Some(true),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(case.state, Some(State::New));
        let case = client.cases().get(CASE).await.unwrap();
        assert_eq!(case.state, Some(State::ActionRequired));
        create.assert_async().await;
        get.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_and_search() {
        let server = MockServer::start_async().await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/organizations/1/cases")
                    .query_param("filter", "state=OPEN")
                    .query_param("pageSize", "5");
                then.status(200)
                    .json_body(json!({"cases": [{"name": "organizations/1/cases/1"}], "nextPageToken": "t"}));
            })
            .await;
        let search = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/organizations/1/cases:search")
                    .query_param("query", "priority=P0");
                then.status(200).json_body(json!({}));
            })
            .await;

        let client = create_client(&server);
        let response = client
            .cases()
            .list(&ListCasesRequest {
                parent: "organizations/1".to_string(),
                filter: Some("state=OPEN".to_string()),
                page_size: Some(5),
                page_token: None,
            })
            .await
            .unwrap();
        assert_eq!(response.cases.len(), 1);
        assert_eq!(response.next_page_token.as_deref(), Some("t"));

        let response = client
            .cases()
            .search(&SearchCasesRequest {
                parent: "organizations/1".to_string(),
                query: Some("priority=P0".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(response.cases.is_empty());
        list.assert_async().await;
        search.assert_async().await;
    }

    #[tokio::test]
    async fn test_patch_close_escalate() {
        let server = MockServer::start_async().await;
        let patch = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path(format!("/v2/{CASE}"))
                    .query_param("updateMask", "priority")
                    .json_body(json!({"priority": "P1"}));
                then.status(200).json_body(json!({"name": CASE, "priority": "P1"}));
            })
            .await;
        let escalate = server
            .mock_async(|when, then| {
                when.method(POST).path(format!("/v2/{CASE}:escalate")).json_body(json!({
                    "escalation": {"reason": "BUSINESS_IMPACT", "justification": "Outage"}
                }));
                then.status(200).json_body(json!({"name": CASE, "escalated": true}));
            })
            .await;
        let close = server
            .mock_async(|when, then| {
                when.method(POST).path(format!("/v2/{CASE}:close")).json_body(json!({}));
                then.status(200).json_body(json!({"name": CASE, "state": "CLOSED"}));
            })
            .await;

        let client = create_client(&server);
        let case = client
            .cases()
            .patch(&PatchCaseRequest {
                name: CASE.to_string(),
                update_mask: vec!["priority".to_string()],
                case: Case {
                    priority: Some(Priority::P1),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(case.priority, Some(Priority::P1));

        let case = client
            .cases()
            .escalate(&EscalateCaseRequest {
                name: CASE.to_string(),
                escalation: Some(Escalation {
                    reason: Some(Reason::BusinessImpact),
                    justification: Some("Outage".to_string()),
                }),
            })
            .await
            .unwrap();
        assert_eq!(case.escalated, Some(true));

        let case = client.cases().close(CASE).await.unwrap();
        assert_eq!(case.state, Some(State::Closed));
        patch.assert_async().await;
        escalate.assert_async().await;
        close.assert_async().await;
    }

    #[tokio::test]
    async fn test_invalid_argument() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v2/projects/p/cases");
                then.status(400).json_body(json!({
                    "error": {
                        "code": 400,
                        "message": "Request contains an invalid argument.",
                        "status": "INVALID_ARGUMENT",
                        "details": [{
                            "@type": "type.googleapis.com/google.rpc.BadRequest",
                            "fieldViolations": [{"field": "case.classification"}]
                        }]
                    }
                }));
            })
            .await;
        let client = create_client(&server);
        let err = client
            .cases()
            .create(&CreateCaseRequest {
                parent: "projects/p".to_string(),
                case: Case::default(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(Code::InvalidArgument));
    }
}
