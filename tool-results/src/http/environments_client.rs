use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::environments;
use crate::http::environments::get::GetEnvironmentRequest;
use crate::http::environments::list::{ListEnvironmentsRequest, ListEnvironmentsResponse};
use crate::http::environments::Environment;

#[derive(Clone, Debug)]
pub struct EnvironmentsClient {
    inner: Arc<HttpClient>,
}

impl EnvironmentsClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Gets an Environment.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(&self, req: &GetEnvironmentRequest) -> Result<Environment, Error> {
        let builder = environments::get::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Lists Environments for a given Execution. The Environments are sorted by display name.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, req: &ListEnvironmentsRequest) -> Result<ListEnvironmentsResponse, Error> {
        let builder = environments::list::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::http::environments::get::GetEnvironmentRequest;
    use crate::http::environments::list::ListEnvironmentsRequest;
    use crate::http::test::create_client;
    use crate::http::types::{OutcomeSummary, State};

    const BASE: &str = "/toolresults/v1beta3/projects/p1/histories/bh.1/executions/5/environments";

    #[tokio::test]
    async fn test_get() {
        let server = MockServer::start_async().await;
        let get = server
            .mock_async(|when, then| {
                when.method(GET).path(format!("{BASE}/env1"));
                then.status(200).json_body(json!({
                    "environmentId": "env1",
                    "displayName": "Pixel 7, API 33",
                    "dimensionValue": [{"key": "Model", "value": "panther"}],
                    "environmentResult": {"state": "complete", "outcome": {"summary": "flaky"}},
                    "shardSummaries": [{
                        "runs": [{}, {}],
                        "shardResult": {"state": "complete"}
                    }],
                    "resultsStorage": {"resultsStoragePath": {"fileUri": "gs://bucket/results"}}
                }));
            })
            .await;

        let client = create_client(&server);
        let environment = client
            .environments()
            .get(&GetEnvironmentRequest {
                project_id: "p1".to_string(),
                history_id: "bh.1".to_string(),
                execution_id: "5".to_string(),
                environment_id: "env1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(environment.dimension_value[0].value.as_deref(), Some("panther"));
        let result = environment.environment_result.unwrap();
        assert_eq!(result.state, Some(State::Complete));
        assert_eq!(result.outcome.unwrap().summary, Some(OutcomeSummary::Flaky));
        assert_eq!(environment.shard_summaries[0].runs.len(), 2);
        get.assert_async().await;
    }

    #[tokio::test]
    async fn test_list() {
        let server = MockServer::start_async().await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET).path(BASE).query_param("pageSize", "10");
                then.status(200).json_body(json!({
                    "projectId": "p1",
                    "historyId": "bh.1",
                    "executionId": "5",
                    "environments": [{"environmentId": "env1"}, {"environmentId": "env2"}]
                }));
            })
            .await;

        let client = create_client(&server);
        let response = client
            .environments()
            .list(&ListEnvironmentsRequest {
                project_id: "p1".to_string(),
                history_id: "bh.1".to_string(),
                execution_id: "5".to_string(),
                page_size: Some(10),
                page_token: None,
            })
            .await
            .unwrap();
        assert_eq!(response.environments.len(), 2);
        assert_eq!(response.execution_id.as_deref(), Some("5"));
        list.assert_async().await;
    }
}
