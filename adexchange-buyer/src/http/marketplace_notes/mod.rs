pub mod insert;
pub mod list;

/// A proposal is associated with a bunch of notes which may optionally be associated with a deal and/or revision number.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceNote {
    /// The role of the person (buyer/seller) creating the note. (readonly)
    pub creator_role: Option<String>,
    /// Notes can optionally be associated with a deal. (readonly, except on create)
    pub deal_id: Option<String>,
    /// Identifies what kind of resource this is. Value: the fixed string "adexchangebuyer#marketplaceNote".
    pub kind: Option<String>,
    /// The actual note to attach. (readonly, except on create)
    pub note: Option<String>,
    /// The unique id for the note. (readonly)
    pub note_id: Option<String>,
    /// The proposalId that a note is attached to. (readonly)
    pub proposal_id: Option<String>,
    /// If the note is associated with a proposal revision number, then store that here. (readonly, except on create)
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub proposal_revision_number: Option<i64>,
    /// The timestamp (ms since epoch) that this note was created. (readonly)
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub timestamp_ms: Option<i64>,
}

/// Notes sent to and returned by `insert`, and returned by `list`.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceNotes {
    #[serde(default)]
    pub notes: Vec<MarketplaceNote>,
}
