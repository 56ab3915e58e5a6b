use time::OffsetDateTime;

use crate::http::cases::Actor;

pub mod list;

/// An Attachment contains metadata about a file that was uploaded to a case - it is NOT a file itself.
/// That being said, the name of an Attachment object can be used to download its accompanying file through the `media.download` endpoint.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Output only. The resource name of the attachment.
    pub name: Option<String>,
    /// Output only. The time at which the attachment was created.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub create_time: Option<OffsetDateTime>,
    /// Output only. The user who uploaded the attachment.
    /// Note, the name and email will be obfuscated if the attachment was uploaded by Google support.
    pub creator: Option<Actor>,
    /// The filename of the attachment (e.g. `"graph.jpg"`).
    pub filename: Option<String>,
    /// Output only. The MIME type of the attachment (e.g. text/plain).
    pub mime_type: Option<String>,
    /// Output only. The size of the attachment in bytes.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub size_bytes: Option<i64>,
}
