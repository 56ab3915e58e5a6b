pub mod get;
pub mod list;

/// A group of screenshots of the same screen captured on different devices.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotCluster {
    /// A string that describes the activity of every screen in the cluster.
    pub activity: Option<String>,
    /// A unique identifier for the cluster.
    pub cluster_id: Option<String>,
    /// A singular screen that represents the cluster as a whole.
    /// This screen will act as the "cover" of the entire cluster.
    /// When users look at the clusters, only the key screen from each cluster will be shown.
    /// Which screen is the key screen is determined by the ClusteringAlgorithm
    pub key_screen: Option<Screen>,
    /// Full list of screens.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub screens: Vec<Screen>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    /// File reference of the png file. Required.
    pub file_reference: Option<String>,
    /// Locale of the device that the screenshot was taken on. Required.
    pub locale: Option<String>,
    /// Model of the device that the screenshot was taken on. Required.
    pub model: Option<String>,
    /// OS version of the device that the screenshot was taken on. Required.
    pub version: Option<String>,
}
