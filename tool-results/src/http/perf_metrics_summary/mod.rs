use crate::http::types::Duration;

pub mod create;

/// A summary of perf metrics collected and performance environment info
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PerfMetricsSummary {
    pub app_start_time: Option<AppStartTime>,
    /// A tool results execution ID.
    pub execution_id: Option<String>,
    /// Graphics statistics for the entire run.
    /// Statistics are reset at the beginning of the run and collected at the end of the run.
    pub graphics_stats: Option<GraphicsStats>,
    /// A tool results history ID.
    pub history_id: Option<String>,
    /// Describes the environment in which the performance metrics were collected
    pub perf_environment: Option<PerfEnvironment>,
    /// Set of resource collected
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub perf_metrics: Vec<PerfMetricType>,
    /// The cloud project
    pub project_id: Option<String>,
    /// A tool results step ID.
    pub step_id: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub enum PerfMetricType {
    Memory,
    Cpu,
    Network,
    Graphics,
    #[default]
    #[serde(other)]
    PerfMetricTypeUnspecified,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppStartTime {
    /// Optional. The time from app start to reaching the developer-reported "fully drawn" time.
    /// This is only stored if the app includes a call to Activity.reportFullyDrawn().
    pub fully_drawn_time: Option<Duration>,
    /// The time from app start to the first displayed activity being drawn, as reported in Logcat.
    pub initial_display_time: Option<Duration>,
}

/// Encapsulates the metadata for basic sample series represented by a line chart
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PerfEnvironment {
    /// CPU related environment info
    pub cpu_info: Option<CpuInfo>,
    /// Memory related environment info
    pub memory_info: Option<MemoryInfo>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CpuInfo {
    /// description of the device processor ie '1.8 GHz hexa core 64-bit ARMv8-A'
    pub cpu_processor: Option<String>,
    /// the CPU clock speed in GHz
    pub cpu_speed_in_ghz: Option<f32>,
    /// the number of CPU cores
    pub number_of_cores: Option<i32>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MemoryInfo {
    /// Maximum memory that can be allocated to the process in KiB
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub memory_cap_in_kibibyte: Option<i64>,
    /// Total memory available on the device in KiB
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub memory_total_in_kibibyte: Option<i64>,
}

/// Graphics statistics for the App. The information is collected from 'adb shell dumpsys graphicsstats'.
/// For more info see: https://developer.android.com/training/testing/performance.html Statistics will only be present for API 23+.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GraphicsStats {
    /// Histogram of frame render times. There should be 154 buckets ranging from [5ms, 6ms) to [4950ms, infinity)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buckets: Vec<GraphicsStatsBucket>,
    /// Total "high input latency" events.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub high_input_latency_count: Option<i64>,
    /// Total frames with slow render time. Should be <= total_frames.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub janky_frames: Option<i64>,
    /// Total "missed vsync" events.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub missed_vsync_count: Option<i64>,
    /// 50th percentile frame render time in milliseconds.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub p50_millis: Option<i64>,
    /// 90th percentile frame render time in milliseconds.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub p90_millis: Option<i64>,
    /// 95th percentile frame render time in milliseconds.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub p95_millis: Option<i64>,
    /// 99th percentile frame render time in milliseconds.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub p99_millis: Option<i64>,
    /// Total "slow bitmap upload" events.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub slow_bitmap_upload_count: Option<i64>,
    /// Total "slow draw" events.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub slow_draw_count: Option<i64>,
    /// Total "slow UI thread" events.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub slow_ui_thread_count: Option<i64>,
    /// Total frames rendered by package.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub total_frames: Option<i64>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GraphicsStatsBucket {
    /// Number of frames in the bucket.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub frame_count: Option<i64>,
    /// Lower bound of render time in milliseconds.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub render_millis: Option<i64>,
}
