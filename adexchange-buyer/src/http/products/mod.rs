use crate::http::types::{
    Buyer, ContactInformation, DealTerms, DeliveryControl, MarketplaceLabel, PublisherProvidedForecast, Seller,
    SharedTargeting,
};

pub mod get;
pub mod search;

/// A product is segment of inventory that a seller wishes to sell.
/// It is associated with certain terms and targeting information which helps buyer know more about the inventory.
/// Each field in a product can have one of the following setting:
///
/// (readonly) - It is an error to try and set this field.
/// (buyer-readonly) - Only the seller can set this field.
/// (seller-readonly) - Only the buyer can set this field.
/// (updatable) - The field is updatable at all times by either buyer or the seller.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// The billed buyer corresponding to the buyer that created the offer. (readonly, except on create)
    pub billed_buyer: Option<Buyer>,
    /// The buyer that created the offer if this is a buyer initiated offer (readonly, except on create)
    pub buyer: Option<Buyer>,
    /// Creation time in ms. since epoch (readonly)
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub creation_time_ms: Option<i64>,
    /// Optional contact information for the creator of this product. (buyer-readonly)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub creator_contacts: Vec<ContactInformation>,
    /// The role that created the offer. Set to BUYER for buyer initiated offers.
    pub creator_role: Option<String>,
    /// The set of fields around delivery control that are interesting for a buyer to see but are non-negotiable.
    /// These are set by the publisher. This message is assigned an id of 100 since some day we would want to model this as a protobuf extension.
    pub delivery_control: Option<DeliveryControl>,
    /// The proposed end time for the deal (ms since epoch) (buyer-readonly)
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub flight_end_time_ms: Option<i64>,
    /// Inventory availability dates. (times are in ms since epoch)
    /// The granularity is generally in the order of seconds. (buyer-readonly)
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub flight_start_time_ms: Option<i64>,
    /// If the creator has already signed off on the product, then the buyer can finalize the deal by accepting the product as is.
    /// When copying to a proposal, if any of the terms are changed, then auto_finalize is automatically set to false.
    pub has_creator_signed_off: Option<bool>,
    /// What exchange will provide this inventory (readonly, except on create).
    pub inventory_source: Option<String>,
    /// Identifies what kind of resource this is. Value: the fixed string "adexchangebuyer#product".
    pub kind: Option<String>,
    /// Optional List of labels for the product (optional, buyer-readonly).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<MarketplaceLabel>,
    /// Time of last update in ms. since epoch (readonly)
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub last_update_time_ms: Option<i64>,
    /// Optional legacy offer id if this offer is a preferred deal offer.
    pub legacy_offer_id: Option<String>,
    /// Marketplace publisher profile Id. This Id differs from the regular publisher_profile_id in that
    /// 1. This is a new id, the old Id will be deprecated in 2017.
    /// 2. This id uniquely identifies a publisher profile by itself.
    pub marketplace_publisher_profile_id: Option<String>,
    /// The name for this product as set by the seller. (buyer-readonly)
    pub name: Option<String>,
    /// Optional private auction id if this offer is a private auction offer.
    pub private_auction_id: Option<String>,
    /// The unique id for the product (readonly)
    pub product_id: Option<String>,
    /// Id of the publisher profile for a given seller.
    /// A (seller.account_id, publisher_profile_id) pair uniquely identifies a publisher profile.
    /// Buyers can call the PublisherProfiles::List endpoint to get a list of publisher profiles for a given seller.
    pub publisher_profile_id: Option<String>,
    /// Publisher self-provided forecast information.
    pub publisher_provided_forecast: Option<PublisherProvidedForecast>,
    /// The revision number of the product. (readonly)
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub revision_number: Option<i64>,
    /// Information about the seller that created this product (readonly, except on create)
    pub seller: Option<Seller>,
    /// Targeting that is shared between the buyer and the seller.
    /// Each targeting criteria has a specified key and for each key there is a list of inclusion value or exclusion values. (buyer-readonly)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shared_targetings: Vec<SharedTargeting>,
    /// The state of the product. (buyer-readonly)
    pub state: Option<String>,
    /// The syndication product associated with the deal. (readonly, except on create)
    pub syndication_product: Option<String>,
    /// The negotiable terms of the deal (buyer-readonly)
    pub terms: Option<DealTerms>,
    /// The web property code for the seller. This field is meant to be copied over as is when creating deals.
    pub web_property_code: Option<String>,
}
