use crate::http::types::{Duration, Outcome, State, Timestamp};

pub mod create;
pub mod get;
pub mod list;
pub mod patch;

/// An Execution represents a collection of Steps.
/// For instance, it could represent:
/// - a mobile test executed across a range of device configurations
/// - a jenkins job with a build step followed by a test step
///
/// The maximum size of an execution message is 1 MiB.
/// An Execution can be updated until its state is set to COMPLETE at which point it becomes immutable.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    /// The time when the Execution status transitioned to COMPLETE.
    /// This value will be set automatically when state transitions to COMPLETE.
    pub completion_time: Option<Timestamp>,
    /// The time when the Execution was created. This value will be set automatically when CreateExecution is called.
    pub creation_time: Option<Timestamp>,
    /// The dimensions along which different steps in this execution may vary.
    /// This must remain fixed over the life of the execution.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimension_definitions: Vec<MatrixDimensionDefinition>,
    /// A unique identifier within a History for this Execution.
    /// Returns INVALID_ARGUMENT if this field is set or overwritten by the caller.
    pub execution_id: Option<String>,
    /// Classify the result, for example into SUCCESS or FAILURE.
    pub outcome: Option<Outcome>,
    /// Lightweight information about execution request.
    pub specification: Option<Specification>,
    /// The initial state is IN_PROGRESS. The only legal state transitions is from IN_PROGRESS to COMPLETE.
    pub state: Option<State>,
    /// TestExecution Matrix ID that the TestExecutionService uses.
    pub test_execution_matrix_id: Option<String>,
}

/// One dimension of the matrix of different runs of a step.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub struct MatrixDimensionDefinition {}

/// The details about how to run the execution.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Specification {
    /// An Android mobile test execution specification.
    pub android_test: Option<AndroidTest>,
    /// An iOS mobile test execution specification.
    pub ios_test: Option<IosTest>,
}

/// An Android mobile test specification.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AndroidTest {
    /// Information about the application under test.
    pub android_app_info: Option<AndroidAppInfo>,
    /// An Android instrumentation test.
    pub android_instrumentation_test: Option<AndroidInstrumentationTest>,
    /// An Android robo test.
    pub android_robo_test: Option<AndroidRoboTest>,
    /// An Android test loop.
    pub android_test_loop: Option<AndroidTestLoop>,
    /// Max time a test is allowed to run before it is automatically cancelled.
    pub test_timeout: Option<Duration>,
}

/// Android app information.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AndroidAppInfo {
    /// The name of the app. Optional
    pub name: Option<String>,
    /// The package name of the app. Required.
    pub package_name: Option<String>,
    /// The internal version code of the app. Optional.
    pub version_code: Option<String>,
    /// The version name of the app. Optional.
    pub version_name: Option<String>,
}

/// A test of an Android application that can control an Android component independently of its normal lifecycle.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AndroidInstrumentationTest {
    /// The java package for the test to be executed. Required
    pub test_package_id: Option<String>,
    /// The InstrumentationTestRunner class. Required
    pub test_runner_class: Option<String>,
    /// Each target must be fully qualified with the package name or class name, in one of these formats:
    /// - "package package_name"
    /// - "class package_name.class_name"
    /// - "class package_name.class_name#method_name"
    ///
    /// If empty, all targets in the module will be run.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub test_targets: Vec<String>,
    /// The flag indicates whether Android Test Orchestrator will be used to run test or not.
    pub use_orchestrator: Option<bool>,
}

/// A test of an android application that explores the application on a virtual or physical Android device,
/// finding culprits and crashes as it goes.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AndroidRoboTest {
    /// The initial activity that should be used to start the app. Optional
    pub app_initial_activity: Option<String>,
    /// The java package for the bootstrap. Optional
    pub bootstrap_package_id: Option<String>,
    /// The runner class for the bootstrap. Optional
    pub bootstrap_runner_class: Option<String>,
    /// The max depth of the traversal stack Robo can explore. Optional
    pub max_depth: Option<i32>,
    /// The max number of steps/actions Robo can execute. Default is no limit (0). Optional
    pub max_steps: Option<i32>,
}

/// Test Loops are tests that can be launched by the app itself, determining when to run by listening for an intent.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub struct AndroidTestLoop {}

/// A iOS mobile test specification
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct IosTest {
    /// Information about the application under test.
    pub ios_app_info: Option<IosAppInfo>,
    /// Max time a test is allowed to run before it is automatically cancelled.
    pub test_timeout: Option<Duration>,
}

/// iOS app information
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct IosAppInfo {
    /// The name of the app. Required
    pub name: Option<String>,
}
