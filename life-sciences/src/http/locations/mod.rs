use std::collections::HashMap;

use serde_json::{Map, Value};

pub mod get;
pub mod list;

/// A resource that represents a Google Cloud location.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Resource name for the location, which may vary between implementations.
    /// For example: `"projects/example-project/locations/us-east1"`
    #[serde(default)]
    pub name: String,
    /// The canonical id for this location. For example: `"us-east1"`.
    #[serde(default)]
    pub location_id: String,
    /// The friendly name for this location, typically a nearby city name. For example, "Tokyo".
    pub display_name: Option<String>,
    /// Cross-service attributes for the location. For example {"cloud.googleapis.com/region": "us-east1"}
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
    /// Service-specific metadata. For example the available capacity at the given location.
    pub metadata: Option<Map<String, Value>>,
}
