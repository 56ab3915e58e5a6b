use crate::http::types::{Buyer, ContactInformation, MarketplaceLabel, PrivateData, Seller};

pub mod get;
pub mod insert;
pub mod patch;
pub mod search;
pub mod setup_complete;

/// Represents a proposal in the marketplace.
/// A proposal is the unit of negotiation between a seller and a buyer and contains deals which are served.
/// Each field in a proposal can have one of the following setting:
///
/// (readonly) - It is an error to try and set this field.
/// (buyer-readonly) - Only the seller can set this field.
/// (seller-readonly) - Only the buyer can set this field.
/// (updatable) - The field is updatable at all times by either buyer or the seller.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    /// Reference to the buyer that will get billed for this proposal. (readonly)
    pub billed_buyer: Option<Buyer>,
    /// Reference to the buyer on the proposal. (readonly, except on create)
    pub buyer: Option<Buyer>,
    /// Optional contact information of the buyer. (seller-readonly)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buyer_contacts: Vec<ContactInformation>,
    /// Private data for buyer. (hidden from seller).
    pub buyer_private_data: Option<PrivateData>,
    /// IDs of DBM advertisers permission to this proposal.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dbm_advertiser_ids: Vec<String>,
    /// When an proposal is in an accepted state, indicates whether the buyer has signed off.
    /// Once both sides have signed off on a deal, the proposal can be finalized by the seller. (seller-readonly)
    pub has_buyer_signed_off: Option<bool>,
    /// When an proposal is in an accepted state, indicates whether the buyer has signed off
    /// Once both sides have signed off on a deal, the proposal can be finalized by the seller. (buyer-readonly)
    pub has_seller_signed_off: Option<bool>,
    /// What exchange will provide this inventory (readonly, except on create).
    pub inventory_source: Option<String>,
    /// True if the proposal is being renegotiated (readonly).
    pub is_renegotiating: Option<bool>,
    /// True, if the buyside inventory setup is complete for this proposal. (readonly, except via OrderSetupCompleted action)
    /// Deprecated in favor of deal level setup complete flag.
    pub is_setup_complete: Option<bool>,
    /// Identifies what kind of resource this is. Value: the fixed string "adexchangebuyer#proposal".
    pub kind: Option<String>,
    /// List of labels associated with the proposal. (readonly)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<MarketplaceLabel>,
    /// The role of the last user that either updated the proposal or left a comment. (readonly)
    pub last_updater_or_commentor_role: Option<String>,
    /// The name for the proposal (updatable)
    pub name: Option<String>,
    /// Optional negotiation id if this proposal is a preferred deal proposal.
    pub negotiation_id: Option<String>,
    /// Indicates whether the buyer/seller created the proposal.(readonly)
    pub originator_role: Option<String>,
    /// Optional private auction id if this proposal is a private auction proposal.
    pub private_auction_id: Option<String>,
    /// The unique id of the proposal. (readonly).
    pub proposal_id: Option<String>,
    /// The current state of the proposal. (readonly)
    pub proposal_state: Option<String>,
    /// The revision number for the proposal (readonly).
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub revision_number: Option<i64>,
    /// The time (ms since epoch) when the proposal was last revised (readonly).
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub revision_time_ms: Option<i64>,
    /// Reference to the seller on the proposal. (readonly, except on create)
    pub seller: Option<Seller>,
    /// Optional contact information of the seller (buyer-readonly).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seller_contacts: Vec<ContactInformation>,
}

/// Proposals returned by `insert` and `search`.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProposalList {
    /// The list of matching proposals.
    #[serde(default)]
    pub proposals: Vec<Proposal>,
}
