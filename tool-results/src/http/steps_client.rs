use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::perf_metrics_summary::PerfMetricsSummary;
use crate::http::steps;
use crate::http::steps::accessibility_clusters::{
    ListStepAccessibilityClustersRequest, ListStepAccessibilityClustersResponse,
};
use crate::http::steps::create::CreateStepRequest;
use crate::http::steps::StepReference;
use crate::http::steps::list::{ListStepsRequest, ListStepsResponse};
use crate::http::steps::patch::PatchStepRequest;
use crate::http::steps::publish_xunit_xml_files::PublishXunitXmlFilesRequest;
use crate::http::steps::Step;

#[derive(Clone, Debug)]
pub struct StepsClient {
    inner: Arc<HttpClient>,
}

impl StepsClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Creates a Step. The returned Step will have the id set.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create(&self, req: &CreateStepRequest) -> Result<Step, Error> {
        let builder = steps::create::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Gets a Step.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(&self, req: &StepReference) -> Result<Step, Error> {
        let builder = steps::get::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Lists Steps for a given Execution.
    /// The steps are sorted by creation_time in descending order. The step_id key will be used to order the steps with the same creation_time.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, req: &ListStepsRequest) -> Result<ListStepsResponse, Error> {
        let builder = steps::list::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Updates an existing Step with the supplied partial entity.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn patch(&self, req: &PatchStepRequest) -> Result<Step, Error> {
        let builder = steps::patch::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Retrieves a PerfMetricsSummary.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_perf_metrics_summary(&self, step: &StepReference) -> Result<PerfMetricsSummary, Error> {
        let builder = steps::get_perf_metrics_summary::build(self.inner.endpoint(), self.inner.http(), step);
        self.inner.send(builder).await
    }

    /// Publish xml files to an existing Step.
    /// Returns FAILED_PRECONDITION if the step is already COMPLETE.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn publish_xunit_xml_files(&self, req: &PublishXunitXmlFilesRequest) -> Result<Step, Error> {
        let builder = steps::publish_xunit_xml_files::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Lists accessibility clusters for a given Step.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn accessibility_clusters(
        &self,
        req: &ListStepAccessibilityClustersRequest,
    ) -> Result<ListStepAccessibilityClustersResponse, Error> {
        let builder = steps::accessibility_clusters::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}
