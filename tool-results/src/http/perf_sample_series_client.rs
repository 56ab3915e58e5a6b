use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::perf_sample_series;
use crate::http::perf_sample_series::create::CreatePerfSampleSeriesRequest;
use crate::http::perf_sample_series::PerfSampleSeriesReference;
use crate::http::perf_sample_series::list::{ListPerfSampleSeriesRequest, ListPerfSampleSeriesResponse};
use crate::http::perf_sample_series::PerfSampleSeries;

#[derive(Clone, Debug)]
pub struct PerfSampleSeriesClient {
    inner: Arc<HttpClient>,
}

impl PerfSampleSeriesClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Creates a PerfSampleSeries.
    /// Returns ALREADY_EXISTS if a PerfSampleSeries with the same sample series label already exists for the step.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create(&self, req: &CreatePerfSampleSeriesRequest) -> Result<PerfSampleSeries, Error> {
        let builder = perf_sample_series::create::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Gets a PerfSampleSeries.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(&self, req: &PerfSampleSeriesReference) -> Result<PerfSampleSeries, Error> {
        let builder = perf_sample_series::get::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Lists PerfSampleSeries for a given Step.
    /// The request provides an optional filter which specifies one or more PerfMetricsType to include in the result; if none returns all.
    /// The resulting PerfSampleSeries are sorted by ids.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, req: &ListPerfSampleSeriesRequest) -> Result<ListPerfSampleSeriesResponse, Error> {
        let builder = perf_sample_series::list::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use serde_json::json;

    use google_cloud_gax::status::Code;

    use crate::http::perf_metrics_summary::PerfMetricType;
    use crate::http::perf_sample_series::create::CreatePerfSampleSeriesRequest;
    use crate::http::perf_sample_series::PerfSampleSeriesReference;
    use crate::http::perf_sample_series::list::ListPerfSampleSeriesRequest;
    use crate::http::perf_sample_series::{BasicPerfSampleSeries, PerfSampleSeries, PerfUnit, SampleSeriesLabel};
    use crate::http::steps::StepReference;
    use crate::http::test::create_client;

    fn step() -> StepReference {
        StepReference {
            project_id: "p1".to_string(),
            history_id: "bh.1".to_string(),
            execution_id: "5".to_string(),
            step_id: "s1".to_string(),
        }
    }

    const BASE: &str = "/toolresults/v1beta3/projects/p1/histories/bh.1/executions/5/steps/s1/perfSampleSeries";

    #[tokio::test]
    async fn test_create_and_get() {
        let server = MockServer::start_async().await;
        let create = server
            .mock_async(|when, then| {
                when.method(POST).path(BASE).json_body(json!({
                    "basicPerfSampleSeries": {
                        "perfMetricType": "cpu",
                        "perfUnit": "percent",
                        "sampleSeriesLabel": "cpuTotal"
                    }
                }));
                then.status(200).json_body(json!({"sampleSeriesId": "3", "stepId": "s1"}));
            })
            .await;
        let get = server
            .mock_async(|when, then| {
                when.method(GET).path(format!("{BASE}/3"));
                then.status(200).json_body(json!({
                    "sampleSeriesId": "3",
                    "basicPerfSampleSeries": {"perfUnit": "percent", "sampleSeriesLabel": "cpuTotal"}
                }));
            })
            .await;

        let client = create_client(&server);
        let series = client
            .perf_sample_series()
            .create(&CreatePerfSampleSeriesRequest {
                step: step(),
                perf_sample_series: PerfSampleSeries {
                    basic_perf_sample_series: Some(BasicPerfSampleSeries {
                        perf_metric_type: Some(PerfMetricType::Cpu),
                        perf_unit: Some(PerfUnit::Percent),
                        sample_series_label: Some(SampleSeriesLabel::CpuTotal),
                    }),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(series.sample_series_id.as_deref(), Some("3"));

        let series = client
            .perf_sample_series()
            .get(&PerfSampleSeriesReference {
                step: step(),
                sample_series_id: "3".to_string(),
            })
            .await
            .unwrap();
        let basic = series.basic_perf_sample_series.unwrap();
        assert_eq!(basic.sample_series_label, Some(SampleSeriesLabel::CpuTotal));
        assert_eq!(basic.perf_metric_type, None);
        create.assert_async().await;
        get.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_with_filters() {
        let server = MockServer::start_async().await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(BASE)
                    .query_param("filter", "cpuTotal")
                    .query_param("filter", "memoryTotal");
                then.status(200)
                    .json_body(json!({"perfSampleSeries": [{"sampleSeriesId": "3"}, {"sampleSeriesId": "4"}]}));
            })
            .await;

        let client = create_client(&server);
        let response = client
            .perf_sample_series()
            .list(&ListPerfSampleSeriesRequest {
                step: step(),
                filter: vec![SampleSeriesLabel::CpuTotal, SampleSeriesLabel::MemoryTotal],
            })
            .await
            .unwrap();
        assert_eq!(response.perf_sample_series.len(), 2);
        list.assert_async().await;
    }

    #[tokio::test]
    async fn test_already_exists() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(BASE);
                then.status(409).json_body(json!({
                    "error": {"code": 409, "message": "Sample series already exists", "status": "ALREADY_EXISTS"}
                }));
            })
            .await;
        let client = create_client(&server);
        let err = client
            .perf_sample_series()
            .create(&CreatePerfSampleSeriesRequest {
                step: step(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(Code::AlreadyExists));
        assert_eq!(err.http_status_code(), Some(409));
    }
}
