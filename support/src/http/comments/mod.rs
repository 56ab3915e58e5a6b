use time::OffsetDateTime;

use crate::http::cases::Actor;

pub mod create;
pub mod list;

/// A comment associated with a support case.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Output only. The resource name of the comment.
    pub name: Option<String>,
    /// Output only. The time when the comment was created.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub create_time: Option<OffsetDateTime>,
    /// Output only. The user or Google Support agent who created the comment.
    pub creator: Option<Actor>,
    /// The full comment body. Maximum of 12800 characters.
    pub body: Option<String>,
    /// Output only. DEPRECATED. DO NOT USE. A duplicate of the `body` field.
    /// This field is only present for legacy reasons.
    pub plain_text_body: Option<String>,
}
