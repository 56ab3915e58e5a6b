use google_cloud_gax::Escape;

use crate::http::perf_metrics_summary::PerfMetricType;
use crate::http::steps::StepReference;

pub mod create;
pub mod get;
pub mod list;

/// Identifies a single sample series of a step.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct PerfSampleSeriesReference {
    pub step: StepReference,
    pub sample_series_id: String,
}

impl PerfSampleSeriesReference {
    pub(crate) fn url(&self, base_url: &str) -> String {
        format!("{}/perfSampleSeries/{}", self.step.url(base_url), self.sample_series_id.escape())
    }
}

/// Resource representing a collection of performance samples (or data points)
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PerfSampleSeries {
    /// Basic series represented by a line chart
    pub basic_perf_sample_series: Option<BasicPerfSampleSeries>,
    /// A tool results execution ID.
    pub execution_id: Option<String>,
    /// A tool results history ID.
    pub history_id: Option<String>,
    /// The cloud project
    pub project_id: Option<String>,
    /// A sample series id
    pub sample_series_id: Option<String>,
    /// A tool results step ID.
    pub step_id: Option<String>,
}

/// Encapsulates the metadata for basic sample series represented by a line chart
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct BasicPerfSampleSeries {
    pub perf_metric_type: Option<PerfMetricType>,
    pub perf_unit: Option<PerfUnit>,
    pub sample_series_label: Option<SampleSeriesLabel>,
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub enum PerfUnit {
    Kibibyte,
    Percent,
    BytesPerSecond,
    FramesPerSecond,
    Byte,
    #[default]
    #[serde(other)]
    PerfUnitUnspecified,
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub enum SampleSeriesLabel {
    /// Memory sample series
    MemoryRssPrivate,
    MemoryRssShared,
    MemoryRssTotal,
    MemoryTotal,
    /// CPU sample series
    CpuUser,
    CpuKernel,
    CpuTotal,
    /// Network sample series
    NtBytesTransferred,
    NtBytesReceived,
    NetworkSent,
    NetworkReceived,
    /// Graphics sample series
    GraphicsFrameRate,
    #[default]
    #[serde(other)]
    SampleSeriesTypeUnspecified,
}
