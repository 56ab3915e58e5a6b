use crate::http::types::Timestamp;

pub mod batch_create;
pub mod list;

/// Resource representing a single performance measure or data point
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PerfSample {
    /// Timestamp of collection.
    pub sample_time: Option<Timestamp>,
    /// Value observed
    pub value: Option<f64>,
}
