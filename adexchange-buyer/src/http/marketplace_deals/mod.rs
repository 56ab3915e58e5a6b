use crate::http::types::{ContactInformation, DealTerms, DeliveryControl, PrivateData, SharedTargeting, UpdateAction};

pub mod delete;
pub mod insert;
pub mod list;
pub mod update;

/// A proposal can contain multiple deals. A deal contains the terms and targeting information that is used for serving.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceDeal {
    /// Buyer private data (hidden from seller).
    pub buyer_private_data: Option<PrivateData>,
    /// The time (ms since epoch) of the deal creation. (readonly)
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub creation_time_ms: Option<i64>,
    /// Specifies the creative pre-approval policy (buyer-readonly)
    pub creative_pre_approval_policy: Option<String>,
    /// Specifies whether the creative is safeFrame compatible (buyer-readonly)
    pub creative_safe_frame_compatibility: Option<String>,
    /// A unique deal-id for the deal (readonly).
    pub deal_id: Option<String>,
    /// Metadata about the serving status of this deal (readonly, writes via custom actions)
    pub deal_serving_metadata: Option<DealServingMetadata>,
    /// The set of fields around delivery control that are interesting for a buyer to see but are non-negotiable.
    /// These are set by the publisher.
    pub delivery_control: Option<DeliveryControl>,
    /// The external deal id assigned to this deal once the deal is finalized.
    /// This is the deal-id that shows up in serving/reporting etc. (readonly)
    pub external_deal_id: Option<String>,
    /// Proposed flight end time of the deal (ms since epoch) This will generally be stored in a granularity of a second. (updatable)
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub flight_end_time_ms: Option<i64>,
    /// Proposed flight start time of the deal (ms since epoch) This will generally be stored in a granularity of a second. (updatable)
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub flight_start_time_ms: Option<i64>,
    /// Description for the deal terms. (buyer-readonly)
    pub inventory_description: Option<String>,
    /// Indicates whether the current deal is a RFP template. RFP template is created by buyer and not based on seller created products.
    pub is_rfp_template: Option<bool>,
    /// True, if the buyside inventory setup is complete for this deal. (readonly, except via OrderSetupCompleted action)
    pub is_setup_complete: Option<bool>,
    /// Identifies what kind of resource this is. Value: the fixed string "adexchangebuyer#marketplaceDeal".
    pub kind: Option<String>,
    /// The time (ms since epoch) when the deal was last updated. (readonly)
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub last_update_time_ms: Option<i64>,
    pub makegood_requested_reason: Option<String>,
    /// The name of the deal. (updatable)
    pub name: Option<String>,
    /// The product-id from which this deal was created. (readonly, except on create)
    pub product_id: Option<String>,
    /// The revision number of the product that the deal was created from (readonly, except on create)
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub product_revision_number: Option<i64>,
    /// Specifies the creative source for programmatic deals, PUBLISHER means creative is provided by seller and ADVERTISR means creative is provided by buyer. (buyer-readonly)
    pub programmatic_creative_source: Option<String>,
    pub proposal_id: Option<String>,
    /// Optional Seller contact information for the deal (buyer-readonly)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seller_contacts: Vec<ContactInformation>,
    /// The shared targeting visible to buyers and sellers. Each shared targeting entity is AND'd together. (updatable)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shared_targetings: Vec<SharedTargeting>,
    /// The syndication product associated with the deal. (readonly, except on create)
    pub syndication_product: Option<String>,
    /// The negotiable terms of the deal. (updatable)
    pub terms: Option<DealTerms>,
    pub web_property_code: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DealServingMetadata {
    /// True if alcohol ads are allowed for this deal (read-only).
    /// This field is only populated when querying for finalized orders using the method GetFinalizedOrderDeals
    pub alcohol_ads_allowed: Option<bool>,
    /// Tracks which parties (if any) have paused a deal. (readonly, except via PauseResumeOrderDeals action)
    pub deal_pause_status: Option<DealServingMetadataDealPauseStatus>,
}

/// Tracks which parties (if any) have paused a deal.
/// The deal is considered paused if has_buyer_paused || has_seller_paused.
/// Each of the has_buyer_paused or the has_seller_paused bits can be set independently.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DealServingMetadataDealPauseStatus {
    pub buyer_pause_reason: Option<String>,
    /// If the deal is paused, records which party paused the deal first.
    pub first_paused_by: Option<String>,
    pub has_buyer_paused: Option<bool>,
    pub has_seller_paused: Option<bool>,
    pub seller_pause_reason: Option<String>,
}

/// Deals and the proposal revision returned by `delete` and `insert`.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderDealsResponse {
    /// List of deals affected by the request.
    #[serde(default)]
    pub deals: Vec<MarketplaceDeal>,
    /// The updated revision number for the proposal.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub proposal_revision_number: Option<i64>,
}

/// The proposal revision and update action carried by deal mutations.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProposalRevision {
    /// The last known proposal revision number.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub proposal_revision_number: Option<i64>,
    /// Indicates an optional action to take on the proposal
    pub update_action: Option<UpdateAction>,
}
