pub mod create;
pub mod get;
pub mod list;

/// A History represents a sorted list of Executions ordered by the `start_timestamp_millis` field (descending).
/// It can be used to group all the Executions of a continuous build.
/// Note that the ordering only operates on one-dimension.
/// If a repository has multiple branches, it means that multiple histories will need to be used in order to order Executions per branch.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct History {
    /// A short human-readable (plain text) name to display in the UI. Maximum of 100 characters.
    pub display_name: Option<String>,
    /// A unique identifier within a project for this History.
    /// Returns INVALID_ARGUMENT if this field is set or overwritten by the caller.
    pub history_id: Option<String>,
    /// A name to uniquely identify a history within a project. Maximum of 200 characters.
    pub name: Option<String>,
    /// The platform of the test history.
    pub test_platform: Option<TestPlatform>,
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub enum TestPlatform {
    Android,
    Ios,
    #[default]
    #[serde(other)]
    UnknownPlatform,
}
