use crate::http::steps::StepSummary;
use crate::http::types::{FileReference, KeyValue, Outcome, State, TestSuiteOverview, Timestamp};

pub mod get;
pub mod list;

/// An Environment represents the set of test runs (Steps) from the parent Execution that are configured with the same set of dimensions (Model, Version, Locale, and Orientation).
/// Multiple such runs occur particularly because of features like sharding (splitting up a test suite to run in parallel across devices) and reruns (running a test multiple times to check for different outcomes).
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    /// Output only. The time when the Environment status was set to complete.
    pub completion_time: Option<Timestamp>,
    /// Output only. The time when the Environment was created.
    pub creation_time: Option<Timestamp>,
    /// Dimension values describing the environment.
    /// Dimension values always consist of "Model", "Version", "Locale", and "Orientation".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimension_value: Vec<KeyValue>,
    /// A short human-readable name to display in the UI. Maximum of 100 characters.
    /// For example: Nexus 5, API 27.
    pub display_name: Option<String>,
    /// Output only. An Environment id.
    pub environment_id: Option<String>,
    /// Merged result of the environment.
    pub environment_result: Option<MergedResult>,
    /// Output only. An Execution id.
    pub execution_id: Option<String>,
    /// Output only. A History id.
    pub history_id: Option<String>,
    /// Output only. A Project id.
    pub project_id: Option<String>,
    /// The location where output files are stored in the user bucket.
    pub results_storage: Option<ResultsStorage>,
    /// Output only. Summaries of shards. Only one shard will present unless sharding feature is enabled in TestExecutionService.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shard_summaries: Vec<ShardSummary>,
}

/// Merged test result for environment.
/// If the environment has only one step (no reruns or shards), then the merged result is the same as the step result.
/// If the environment has multiple shards and/or reruns, then the results of shards and reruns that belong to the same environment are merged into one environment result.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MergedResult {
    /// Outcome of the resource
    pub outcome: Option<Outcome>,
    /// State of the resource
    pub state: Option<State>,
    /// The combined and rolled-up result of each test suite that was run as part of this environment.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub test_suite_overviews: Vec<TestSuiteOverview>,
}

/// The storage for test results.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResultsStorage {
    /// The root directory for test results.
    pub results_storage_path: Option<FileReference>,
    /// The path to the Xunit XML file.
    pub xunit_xml_file: Option<FileReference>,
}

/// Result summary for a shard in an environment.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShardSummary {
    /// Summaries of the steps belonging to the shard.
    /// With flaky_test_attempts enabled from TestExecutionService, more than one run (Step) can present.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub runs: Vec<StepSummary>,
    /// Merged result of the shard.
    pub shard_result: Option<MergedResult>,
}
