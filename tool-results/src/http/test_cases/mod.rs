use crate::http::types::{Duration, StackTrace, TestCaseReference, Timestamp, ToolOutputReference};

pub mod get;
pub mod list;

/// An individual test case.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    /// The elapsed run time of the test case.
    pub elapsed_time: Option<Duration>,
    /// The end time of the test case.
    pub end_time: Option<Timestamp>,
    /// Why the test case was skipped. Present only for skipped test case
    pub skipped_message: Option<String>,
    /// The stack trace details if the test case failed or encountered an error.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stack_traces: Vec<StackTrace>,
    /// The start time of the test case.
    pub start_time: Option<Timestamp>,
    /// The status of the test case. Required.
    pub status: Option<TestCaseStatus>,
    /// A unique identifier within a Step for this Test Case.
    pub test_case_id: Option<String>,
    /// Test case reference, e.g. name, class name and test suite name. Required.
    pub test_case_reference: Option<TestCaseReference>,
    /// References to opaque files of any format output by the tool execution.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_outputs: Vec<ToolOutputReference>,
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub enum TestCaseStatus {
    /// Test passed.
    #[default]
    Passed,
    /// Test failed.
    Failed,
    /// Test encountered an error
    Error,
    /// Test skipped
    Skipped,
    /// Test flaked. Present only for rollup test cases; test cases from steps that were run with the same configuration had both failure and success outcomes.
    Flaky,
}
