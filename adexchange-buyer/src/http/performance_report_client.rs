use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::performance_report;
use crate::http::performance_report::list::{ListPerformanceReportRequest, PerformanceReportList};

#[derive(Clone, Debug)]
pub struct PerformanceReportClient {
    inner: Arc<HttpClient>,
}

impl PerformanceReportClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Retrieves the authenticated user's list of performance metrics.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, req: &ListPerformanceReportRequest) -> Result<PerformanceReportList, Error> {
        let builder = performance_report::list::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::http::performance_report::list::ListPerformanceReportRequest;
    use crate::http::test::create_client;

    #[tokio::test]
    async fn test_list() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/adexchangebuyer/v1.4/performancereport")
                    .query_param("accountId", "1234")
                    .query_param("startDateTime", "2023-11-01T00:00:00Z")
                    .query_param("endDateTime", "2023-11-02T00:00:00Z")
                    .query_param("maxResults", "50");
                then.status(200).json_body(json!({
                    "kind": "adexchangebuyer#performanceReportList",
                    "performanceReport": [{
                        "region": "US_EAST",
                        "timestamp": "1698796800",
                        "bidRate": 120.5,
                        "latency50thPercentile": 35.0,
                        "calloutStatusRate": [{"status": 1, "rate": 0.5}]
                    }]
                }));
            })
            .await;

        let list = create_client(&server)
            .performance_report()
            .list(&ListPerformanceReportRequest {
                account_id: 1234,
                start_date_time: "2023-11-01T00:00:00Z".to_string(),
                end_date_time: "2023-11-02T00:00:00Z".to_string(),
                max_results: Some(50),
                page_token: None,
            })
            .await
            .unwrap();
        let report = &list.performance_report[0];
        assert_eq!(report.timestamp, Some(1698796800));
        assert_eq!(report.latency_50th_percentile, Some(35.0));
        assert_eq!(report.callout_status_rate[0]["rate"], json!(0.5));
        mock.assert_async().await;
    }
}
