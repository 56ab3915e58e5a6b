use crate::http::step_url;
use crate::http::types::{
    Any, Duration, KeyValue, Outcome, OutcomeSummary, StackTrace, State, TestSuiteOverview, Timestamp, ToolExecution,
};

pub mod accessibility_clusters;
pub mod create;
pub mod get;
pub mod get_perf_metrics_summary;
pub mod list;
pub mod patch;
pub mod publish_xunit_xml_files;

/// Identifies a single step of an execution.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct StepReference {
    pub project_id: String,
    pub history_id: String,
    pub execution_id: String,
    pub step_id: String,
}

impl StepReference {
    pub(crate) fn url(&self, base_url: &str) -> String {
        step_url(
            base_url,
            &self.project_id,
            &self.history_id,
            &self.execution_id,
            &self.step_id,
        )
    }
}

/// A Step represents a single operation performed as part of Execution.
/// A step can be used to represent the execution of a tool (for example a test runner execution or an execution of a compiler).
/// Steps can overlap (for instance two steps might have the same start time if some operations are done in parallel).
///
/// A Step can be updated until its state is set to COMPLETE at which point it becomes immutable.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// The time when the step status was set to complete.
    pub completion_time: Option<Timestamp>,
    /// The time when the step was created.
    pub creation_time: Option<Timestamp>,
    /// A description of this tool For example: mvn clean package -D skipTests=true
    pub description: Option<String>,
    /// How much the device resource is used to perform the test.
    /// This is the device usage used for billing purpose, which is different from the run_duration.
    pub device_usage_duration: Option<Duration>,
    /// If the execution containing this step has any dimension_definition set, then this field allows the child to specify the values of the dimensions.
    /// The keys must exactly match the dimension_definition of the execution.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimension_value: Vec<KeyValue>,
    /// Whether any of the outputs of this step are images whose thumbnails can be fetched with ListThumbnails.
    pub has_images: Option<bool>,
    /// Arbitrary user-supplied key/value pairs that are associated with the step.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<KeyValue>,
    /// Details when multiple steps are run with the same configuration as a group.
    /// These details can be used identify which group this step is part of.
    /// It also identifies the groups 'primary step' which indexes all the group members.
    pub multi_step: Option<MultiStep>,
    /// A short human-readable name to display in the UI. Maximum of 100 characters.
    /// For example: Clean build
    pub name: Option<String>,
    /// Classification of the result, for example into SUCCESS or FAILURE
    pub outcome: Option<Outcome>,
    /// How long it took for this step to run.
    /// If unset, this is set to the difference between creation_time and completion_time when the step is set to the COMPLETE state.
    pub run_duration: Option<Duration>,
    /// The initial state is IN_PROGRESS. The only legal state transitions are * IN_PROGRESS -> COMPLETE
    pub state: Option<State>,
    /// A unique identifier within a Execution for this Step.
    /// Returns INVALID_ARGUMENT if this field is set or overwritten by the caller.
    pub step_id: Option<String>,
    /// An execution of a test runner.
    pub test_execution_step: Option<TestExecutionStep>,
    /// An execution of a tool (used for steps we don't explicitly support).
    pub tool_execution_step: Option<ToolExecutionStep>,
}

/// Details when multiple steps are run with the same configuration as a group.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MultiStep {
    /// Unique int given to each step. Ranges from 0(inclusive) to total number of steps(exclusive).
    /// The primary step is 0.
    pub multistep_number: Option<i32>,
    /// Present if it is a primary (original) step.
    pub primary_step: Option<PrimaryStep>,
    /// Step Id of the primary (original) step, which might be this step.
    pub primary_step_id: Option<String>,
}

/// Stores rollup test status of multiple steps that were run as a group and outcome of each individual step.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryStep {
    /// Step Id and outcome of each individual step.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub individual_outcome: Vec<IndividualOutcome>,
    /// Rollup test status of multiple steps that were run with the same configuration as a group.
    pub roll_up: Option<OutcomeSummary>,
}

/// Step Id and outcome of each individual step that was run as a group with other steps with the same configuration.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct IndividualOutcome {
    /// Unique int given to each step. Ranges from 0(inclusive) to total number of steps(exclusive).
    pub multistep_number: Option<i32>,
    pub outcome_summary: Option<OutcomeSummary>,
    /// How long it took for this step to run.
    pub run_duration: Option<Duration>,
    pub step_id: Option<String>,
}

/// Lightweight summary of a step within this execution.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub struct StepSummary {}

/// A step that represents running tests.
/// It accepts ant-junit xml files which will be parsed into structured test results by the service.
/// Xml file paths are updated in order to append more files, however they can't be deleted.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TestExecutionStep {
    /// Issues observed during the test execution.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub test_issues: Vec<TestIssue>,
    /// List of test suite overview contents.
    /// This could be parsed from xUnit XML log by server, or uploaded directly by user.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub test_suite_overviews: Vec<TestSuiteOverview>,
    /// The timing break down of the test execution.
    pub test_timing: Option<TestTiming>,
    /// Represents the execution of the test runner. The exit code of this tool will be used to determine if the test passed.
    pub tool_execution: Option<ToolExecution>,
}

/// Testing timing break down to know phases.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TestTiming {
    /// How long it took to run the test process.
    pub test_process_duration: Option<Duration>,
}

/// Generic tool step to be used for binaries we do not explicitly support.
/// For example: running cp to copy artifacts from one location to another.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ToolExecutionStep {
    /// A Tool execution.
    pub tool_execution: Option<ToolExecution>,
}

/// An issue detected occurring during a test execution.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TestIssue {
    /// Category of issue. Required.
    pub category: Option<IssueCategory>,
    /// A brief human-readable message describing the issue. Required.
    pub error_message: Option<String>,
    /// Severity of issue. Required.
    pub severity: Option<Severity>,
    /// Deprecated in favor of stack trace fields inside specific warnings.
    pub stack_trace: Option<StackTrace>,
    /// Type of issue, for example `nativeCrash` or `anr`. Required.
    #[serde(rename = "type")]
    pub issue_type: Option<String>,
    /// Warning message with additional details of the issue.
    /// Should always be a message from com.google.devtools.toolresults.v1.warnings
    pub warning: Option<Any>,
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub enum IssueCategory {
    /// Issue is not specific to a particular test kind (e.g., a native crash).
    Common,
    /// Issue is specific to Robo run.
    Robo,
    /// Default unspecified category. Do not use. For versioning only.
    #[default]
    #[serde(other)]
    UnspecifiedCategory,
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    /// Non critical issue, providing users with some info about the test run.
    Info,
    /// Non critical issue, providing users with some hints on improving their testing experience, e.g. suggesting to use Game Loops.
    Suggestion,
    /// Potentially critical issue.
    Warning,
    /// Critical issue.
    Severe,
    /// Default unspecified severity. Do not use. For versioning only.
    #[default]
    #[serde(other)]
    UnspecifiedSeverity,
}

/// A set of similar suggestions that we suspect are closely related.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionCluster {
    /// Category in which these types of suggestions should appear. Always set.
    pub category: Option<SuggestionCategory>,
    /// A sequence of suggestions. All of the suggestions within a cluster must have the same SuggestionPriority and belong to the same SuggestionCategory.
    /// Suggestions with the same screenshot URL should be adjacent.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub enum SuggestionCategory {
    ContentLabeling,
    TouchTargetSize,
    LowContrast,
    Implementation,
    #[default]
    #[serde(other)]
    UnknownCategory,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Reference to a help center article concerning this type of suggestion. Always set.
    pub help_url: Option<String>,
    /// Message, in the user's language, explaining the suggestion, which may contain markup. Always set.
    pub long_message: Option<SafeHtml>,
    /// Relative importance of a suggestion. Always set.
    pub priority: Option<SuggestionPriority>,
    /// A somewhat human readable identifier of the source view, if it does not have a resource_name.
    /// This is a path within the accessibility hierarchy, an element with resource name; similar to an XPath.
    pub pseudo_resource_id: Option<String>,
    /// Region within the screenshot that is relevant to this suggestion. Optional.
    pub region: Option<Region>,
    /// Reference to a view element, identified by its resource name, if it has one.
    pub resource_name: Option<String>,
    /// ID of the screen for the suggestion.
    /// It is used for getting the corresponding screenshot path.
    pub screen_id: Option<String>,
    /// Relative importance of a suggestion as compared with other suggestions that have the same priority and category.
    /// This is a meaningless value that can be used to order suggestions that are in the same category and have the same priority.
    /// The larger values have higher priority (i.e., are more important). Optional.
    pub secondary_priority: Option<f64>,
    /// Concise message, in the user's language, representing the suggestion, which may contain markup. Always set.
    pub short_message: Option<SafeHtml>,
    /// General title for the suggestion, in the user's language, without markup. Always set.
    pub title: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub enum SuggestionPriority {
    Error,
    Warning,
    Info,
    #[default]
    #[serde(other)]
    UnknownPriority,
}

/// IMPORTANT: It is unsafe to accept this message from an untrusted source,
/// since it's trivial for an attacker to forge serialized messages that don't fulfill the type's safety contract.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SafeHtml {
    /// IMPORTANT: Never set or read this field, even from tests, it is private.
    pub private_do_not_access_or_else_safe_html_wrapped_value: Option<String>,
}

/// A rectangular region.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// The height, in pixels. Always set.
    pub height_px: Option<i32>,
    /// The left side of the rectangle, in pixels. Always set.
    pub left_px: Option<i32>,
    /// The top of the rectangle, in pixels. Always set.
    pub top_px: Option<i32>,
    /// The width, in pixels. Always set.
    pub width_px: Option<i32>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::http::steps::{IssueCategory, Severity, Step, TestIssue};
    use crate::http::types::OutcomeSummary;

    #[test]
    fn test_step_with_issues() {
        let step: Step = serde_json::from_value(json!({
            "stepId": "s1",
            "runDuration": {"seconds": "42", "nanos": 1000},
            "multiStep": {
                "multistepNumber": 0,
                "primaryStepId": "s1",
                "primaryStep": {
                    "rollUp": "flaky",
                    "individualOutcome": [{"stepId": "s2", "outcomeSummary": "success"}]
                }
            },
            "testExecutionStep": {
                "testIssues": [{
                    "errorMessage": "App crashed",
                    "severity": "severe",
                    "category": "common",
                    "type": "nativeCrash",
                    "warning": {"typeUrl": "type.googleapis.com/google.devtools.toolresults.v1beta3.NativeCrash", "value": "AAE="}
                }],
                "testSuiteOverviews": [{"name": "suite", "totalCount": 3, "elapsedTime": {"seconds": "7"}}]
            }
        }))
        .unwrap();
        assert_eq!(
            std::time::Duration::try_from(step.run_duration.unwrap()).unwrap(),
            std::time::Duration::new(42, 1000)
        );
        let primary = step.multi_step.unwrap().primary_step.unwrap();
        assert_eq!(primary.roll_up, Some(OutcomeSummary::Flaky));
        let test_step = step.test_execution_step.unwrap();
        let issue: &TestIssue = &test_step.test_issues[0];
        assert_eq!(issue.severity, Some(Severity::Severe));
        assert_eq!(issue.category, Some(IssueCategory::Common));
        assert_eq!(issue.issue_type.as_deref(), Some("nativeCrash"));
        assert_eq!(issue.warning.as_ref().unwrap().value, Some(vec![0, 1]));
        assert_eq!(test_step.test_suite_overviews[0].total_count, Some(3));
    }
}
