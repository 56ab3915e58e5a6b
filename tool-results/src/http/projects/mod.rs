pub mod get_settings;
pub mod initialize_settings;

/// Per-project settings for the Tool Results service.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    /// The name of the Google Cloud Storage bucket to which results are written.
    /// By default, this is unset. In update request: optional In response: optional
    pub default_bucket: Option<String>,
    /// The name of the project's settings. Always of the form: `projects/{project-id}/settings`
    pub name: Option<String>,
}
