use time::OffsetDateTime;

use google_cloud_gax::conversion::ConversionError;
use google_cloud_gax::status::Code;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// A point in time independent of any time zone, as `seconds` and `nanos` since the Unix epoch.
///
/// Unlike most Google APIs, Tool Results carries timestamps as objects rather than RFC 3339 strings.
#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Timestamp {
    /// Represents seconds of UTC time since Unix epoch 1970-01-01T00:00:00Z.
    /// Must be from 0001-01-01T00:00:00Z to 9999-12-31T23:59:59Z inclusive.
    #[serde(default, with = "google_cloud_gax::conversion::string")]
    pub seconds: i64,
    /// Non-negative fractions of a second at nanosecond resolution.
    #[serde(default)]
    pub nanos: i32,
}

impl From<OffsetDateTime> for Timestamp {
    fn from(value: OffsetDateTime) -> Self {
        Self {
            seconds: value.unix_timestamp(),
            nanos: value.nanosecond() as i32,
        }
    }
}

impl TryFrom<Timestamp> for OffsetDateTime {
    type Error = ConversionError;

    fn try_from(value: Timestamp) -> Result<Self, Self::Error> {
        if !(0..1_000_000_000).contains(&value.nanos) {
            return Err(ConversionError::InvalidTimestamp(format!("nanos out of range: {}", value.nanos)));
        }
        let nanos = value.seconds as i128 * NANOS_PER_SECOND + value.nanos as i128;
        OffsetDateTime::from_unix_timestamp_nanos(nanos).map_err(|e| ConversionError::InvalidTimestamp(e.to_string()))
    }
}

/// A signed, fixed-length span of time as `seconds` and `nanos`.
#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Duration {
    /// Signed seconds of the span of time. Must be from -315,576,000,000 to +315,576,000,000 inclusive.
    #[serde(default, with = "google_cloud_gax::conversion::string")]
    pub seconds: i64,
    /// Signed fractions of a second at nanosecond resolution of the span of time.
    /// Must have the same sign as `seconds`.
    #[serde(default)]
    pub nanos: i32,
}

impl From<std::time::Duration> for Duration {
    fn from(value: std::time::Duration) -> Self {
        Self {
            seconds: i64::try_from(value.as_secs()).unwrap_or(i64::MAX),
            nanos: value.subsec_nanos() as i32,
        }
    }
}

/// Negative durations have no `std::time::Duration` counterpart.
impl TryFrom<Duration> for std::time::Duration {
    type Error = ConversionError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        if value.seconds < 0 || !(0..1_000_000_000).contains(&value.nanos) {
            return Err(ConversionError::InvalidDuration(format!(
                "{}s {}ns",
                value.seconds, value.nanos
            )));
        }
        Ok(std::time::Duration::new(value.seconds as u64, value.nanos as u32))
    }
}

/// An arbitrary serialized message along with a URL that describes its type.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Any {
    /// A URL/resource name that uniquely identifies the type of the serialized message.
    pub type_url: Option<String>,
    /// Must be a valid serialized message of the type named by `type_url`.
    #[serde(default, with = "google_cloud_gax::conversion::base64::option")]
    pub value: Option<Vec<u8>>,
}

/// The `google.rpc.Status` error model.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    /// The status code, which should be an enum value of `google.rpc.Code`.
    pub code: Option<i32>,
    /// A developer-facing error message, which should be in English.
    pub message: Option<String>,
    /// A list of messages that carry the error details.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<Any>,
}

impl Status {
    pub fn code(&self) -> Code {
        Code::from(self.code.unwrap_or_default())
    }
}

/// A reference to a file.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct FileReference {
    /// The URI of a file stored in Google Cloud Storage.
    /// For example: `gs://mybucket/path/to/test.xml`.
    pub file_uri: Option<String>,
}

/// A generic key-value pair.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct KeyValue {
    pub key: Option<String>,
    pub value: Option<String>,
}

/// An execution of an arbitrary tool. It could be a test runner or a tool copying artifacts or deploying code.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ToolExecution {
    /// The full tokenized command line including the program name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command_line_arguments: Vec<String>,
    /// Tool execution exit code. This field will be set once the tool has exited.
    pub exit_code: Option<ToolExitCode>,
    /// References to any plain text logs output the tool execution.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_logs: Vec<FileReference>,
    /// References to opaque files of any format output by the tool execution.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_outputs: Vec<ToolOutputReference>,
}

/// Exit code from a tool execution.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ToolExitCode {
    /// Tool execution exit code. A value of 0 means that the execution was successful.
    pub number: Option<i32>,
}

/// A reference to a ToolExecution output file.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ToolOutputReference {
    /// The creation time of the file.
    pub creation_time: Option<Timestamp>,
    /// A FileReference to an output file.
    pub output: Option<FileReference>,
    /// The test case to which this output file belongs.
    pub test_case: Option<TestCaseReference>,
}

/// A reference to a test case.
/// Test case references are canonically ordered lexicographically by these three factors:
/// first by `test_suite_name`, then by `class_name` and then by `name`.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseReference {
    /// The name of the class.
    pub class_name: Option<String>,
    /// The name of the test case. Required.
    pub name: Option<String>,
    /// The name of the test suite to which this test case belongs.
    pub test_suite_name: Option<String>,
}

/// A stacktrace.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct StackTrace {
    /// The stack trace message. Required
    pub exception: Option<String>,
}

/// A summary of a test suite result either parsed from XML or uploaded directly by a user.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TestSuiteOverview {
    /// Elapsed time of test suite.
    pub elapsed_time: Option<Duration>,
    /// Number of test cases in error, typically set by the service by parsing the `xml_source`.
    pub error_count: Option<i32>,
    /// Number of failed test cases, typically set by the service by parsing the `xml_source`.
    pub failure_count: Option<i32>,
    /// Number of flaky test cases, set by the service by rolling up flaky test attempts.
    pub flaky_count: Option<i32>,
    /// The name of the test suite.
    pub name: Option<String>,
    /// Number of test cases not run, typically set by the service by parsing the `xml_source`.
    pub skipped_count: Option<i32>,
    /// Number of test cases, typically set by the service by parsing the `xml_source`.
    pub total_count: Option<i32>,
    /// If this test suite was parsed from XML, this is the URI where the original XML file is stored.
    pub xml_source: Option<FileReference>,
}

/// Interprets a result so that humans and machines can act on it.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    /// More information about a FAILURE outcome.
    pub failure_detail: Option<FailureDetail>,
    /// More information about an INCONCLUSIVE outcome.
    pub inconclusive_detail: Option<InconclusiveDetail>,
    /// More information about a SKIPPED outcome.
    pub skipped_detail: Option<SkippedDetail>,
    /// More information about a SUCCESS outcome.
    pub success_detail: Option<SuccessDetail>,
    /// The simplest way to interpret a result. Required
    pub summary: Option<OutcomeSummary>,
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub enum OutcomeSummary {
    /// The test matrix run was successful.
    Success,
    /// A run failed.
    Failure,
    /// Something unexpected happened. The run should still be considered unsuccessful.
    Inconclusive,
    /// All tests were skipped.
    Skipped,
    /// A group of steps that were run with the same configuration had both failure and success outcomes.
    Flaky,
    /// Do not use. For proto versioning only.
    #[default]
    #[serde(other)]
    Unset,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct FailureDetail {
    /// If the failure was severe because the system (app) under test crashed.
    pub crashed: Option<bool>,
    /// If the device ran out of memory during a test, causing the test to crash.
    pub device_out_of_memory: Option<bool>,
    /// If the Roboscript failed to complete successfully.
    pub failed_roboscript: Option<bool>,
    /// If an app is not installed and thus no test can be run with the app.
    pub not_installed: Option<bool>,
    /// If a native process (including any other than the app) crashed.
    pub other_native_crash: Option<bool>,
    /// If the test overran some time limit, and that is why it failed.
    pub timed_out: Option<bool>,
    /// If the robo was unable to crawl the app; perhaps because the app did not start.
    pub unable_to_crawl: Option<bool>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct InconclusiveDetail {
    /// If the end user aborted the test execution before a pass or fail could be determined.
    pub aborted_by_user: Option<bool>,
    /// If results are being provided to the user in certain cases of infrastructure failures.
    pub has_error_logs: Option<bool>,
    /// If the test runner could not determine success or failure because the test depends on a component other than the system under test which failed.
    pub infrastructure_failure: Option<bool>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SkippedDetail {
    /// If the App doesn't support the specific API level.
    pub incompatible_app_version: Option<bool>,
    /// If the App doesn't run on the specific architecture, for example, x86.
    pub incompatible_architecture: Option<bool>,
    /// If the requested OS version doesn't run on the specific device model.
    pub incompatible_device: Option<bool>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SuccessDetail {
    /// If a native process other than the app crashed.
    pub other_native_crash: Option<bool>,
}

/// The state of an execution or a step.
#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub enum State {
    /// The Execution/Step is created, ready to run, but not running yet.
    Pending,
    /// The Execution/Step is in progress.
    InProgress,
    /// The finalized, immutable state. Steps/Executions in this state cannot be modified.
    Complete,
    /// Should never be in this state. Exists for proto deserialization backward compatibility.
    #[default]
    #[serde(other)]
    UnknownState,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::datetime;
    use time::OffsetDateTime;

    use google_cloud_gax::conversion::ConversionError;

    use crate::http::types::{Any, Duration, Outcome, OutcomeSummary, State, Timestamp};

    #[test]
    fn test_timestamp_conversion() {
        let ts: Timestamp = serde_json::from_value(json!({"seconds": "1700000000", "nanos": 500})).unwrap();
        let value = OffsetDateTime::try_from(ts).unwrap();
        assert_eq!(value, datetime!(2023-11-14 22:13:20.0000005 UTC));
        assert_eq!(Timestamp::from(value), ts);
        assert_eq!(
            serde_json::to_value(ts).unwrap(),
            json!({"seconds": "1700000000", "nanos": 500})
        );

        let invalid = Timestamp {
            seconds: 0,
            nanos: -1,
        };
        assert!(matches!(
            OffsetDateTime::try_from(invalid),
            Err(ConversionError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_duration_conversion() {
        let value: Duration = serde_json::from_value(json!({"seconds": 90})).unwrap();
        assert_eq!(
            std::time::Duration::try_from(value).unwrap(),
            std::time::Duration::from_secs(90)
        );
        let value = Duration::from(std::time::Duration::from_millis(1500));
        assert_eq!(serde_json::to_value(value).unwrap(), json!({"seconds": "1", "nanos": 500000000}));

        let negative = Duration {
            seconds: -3,
            nanos: 0,
        };
        assert!(std::time::Duration::try_from(negative).is_err());
    }

    #[test]
    fn test_any_value_is_base64() {
        let any = Any {
            type_url: Some("type.googleapis.com/google.devtools.toolresults.v1beta3.Warning".to_string()),
            value: Some(vec![0xfb, 0xff]),
        };
        let value = serde_json::to_value(&any).unwrap();
        assert_eq!(value["value"], "+/8=");
        assert_eq!(serde_json::from_value::<Any>(value).unwrap(), any);
    }

    #[test]
    fn test_unknown_outcome_values() {
        let outcome: Outcome = serde_json::from_value(json!({"summary": "partiallyRetried"})).unwrap();
        assert_eq!(outcome.summary, Some(OutcomeSummary::Unset));
        let state: State = serde_json::from_value(json!("archived")).unwrap();
        assert_eq!(state, State::UnknownState);
        let state: State = serde_json::from_value(json!("complete")).unwrap();
        assert_eq!(state, State::Complete);
    }
}
