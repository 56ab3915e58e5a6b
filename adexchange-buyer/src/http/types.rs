//! Records shared by the marketplace resources: proposals, products, deals and notes.

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Buyer {
    /// Adx account id of the buyer.
    pub account_id: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    /// The unique id for the seller. The seller fills in this field.
    /// The seller account id is then available to buyer in the product.
    pub account_id: Option<String>,
    /// Optional sub-account id for the seller.
    pub sub_account_id: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactInformation {
    /// Email address of the contact.
    pub email: Option<String>,
    /// The name of the contact.
    pub name: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PrivateData {
    pub reference_id: Option<String>,
    #[serde(default, with = "google_cloud_gax::conversion::base64::option")]
    pub reference_payload: Option<Vec<u8>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceLabel {
    /// The accountId of the party that created the label.
    pub account_id: Option<String>,
    /// The creation time (in ms since epoch) for the label.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub create_time_ms: Option<i64>,
    /// Information about the party that created the label.
    pub deprecated_marketplace_deal_party: Option<MarketplaceDealParty>,
    /// The label to use.
    pub label: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceDealParty {
    /// The buyer/seller associated with the deal. One of buyer/seller is specified for a deal-party.
    pub buyer: Option<Buyer>,
    /// The buyer/seller associated with the deal. One of buyer/seller is specified for a deal party.
    pub seller: Option<Seller>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// The price value in micros.
    pub amount_micros: Option<f64>,
    /// The currency code for the price.
    pub currency_code: Option<String>,
    /// In case of CPD deals, the expected CPM in micros.
    pub expected_cpm_micros: Option<f64>,
    /// The pricing type for the deal/product.
    pub pricing_type: Option<String>,
}

/// Used to specify pricing rules for buyers. Each PricePerBuyer in a product can become
/// [0,1] deals. To check if there is a PricePerBuyer for a particular buyer we look for the most
/// specific matching rule - we first look for a rule matching the buyer and otherwise look for a
/// matching rule where no buyer is set.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PricePerBuyer {
    /// Optional access type for this buyer.
    pub auction_tier: Option<String>,
    /// Reference to the buyer that will get billed.
    pub billed_buyer: Option<Buyer>,
    /// The buyer who will pay this price. If unset, all buyers can pay this price
    /// (if the advertisers match, and there's no more specific rule matching the buyer).
    pub buyer: Option<Buyer>,
    /// The specified price
    pub price: Option<Price>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DealTerms {
    /// Visibility of the URL in bid requests.
    pub branding_type: Option<String>,
    /// Indicates that this ExternalDealId exists under at least two different AdxInventoryDeals.
    /// Currently, the only case that the same ExternalDealId will exist is programmatic cross sell case.
    pub cross_listed_external_deal_id_type: Option<String>,
    /// Description for the proposed terms of the deal.
    pub description: Option<String>,
    /// Non-binding estimate of the estimated gross spend for this deal Can be set by buyer or seller.
    pub estimated_gross_spend: Option<Price>,
    /// Non-binding estimate of the impressions served per day Can be set by buyer or seller.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub estimated_impressions_per_day: Option<i64>,
    /// The terms for guaranteed fixed price deals.
    pub guaranteed_fixed_price_terms: Option<GuaranteedFixedPriceTerms>,
    /// The terms for non-guaranteed auction deals.
    pub non_guaranteed_auction_terms: Option<NonGuaranteedAuctionTerms>,
    /// The terms for non-guaranteed fixed price deals.
    pub non_guaranteed_fixed_price_terms: Option<NonGuaranteedFixedPriceTerms>,
    /// The terms for rubicon non-guaranteed deals.
    pub rubicon_non_guaranteed_terms: Option<RubiconNonGuaranteedTerms>,
    /// For deals with Cost Per Day billing, defines the timezone used to mark the boundaries of a day (buyer-readonly)
    pub seller_time_zone: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GuaranteedFixedPriceTerms {
    /// External billing info for this Deal. This field is relevant when external billing info such as price has a different currency code than DFP/AdX.
    pub billing_info: Option<GuaranteedFixedPriceTermsBillingInfo>,
    /// Fixed price for the specified buyer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fixed_prices: Vec<PricePerBuyer>,
    /// Guaranteed impressions as a percentage. This is the percentage of guaranteed looks that the buyer is guaranteeing to buy.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub guaranteed_impressions: Option<i64>,
    /// Count of guaranteed looks. Required for deal, optional for product.
    /// For CPD deals, buyer changes to guaranteed_looks will be ignored.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub guaranteed_looks: Option<i64>,
    /// Count of minimum daily looks for a CPD deal. For CPD deals, buyer should negotiate on this field instead of guaranteed_looks.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub minimum_daily_looks: Option<i64>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GuaranteedFixedPriceTermsBillingInfo {
    /// The timestamp (in ms since epoch) when the original reservation price for the deal was first converted to DFP currency.
    /// This is used to convert the contracted price into buyer's currency without discrepancy.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub currency_conversion_time_ms: Option<i64>,
    /// The DFP line item id associated with this deal. For features like CPD, buyers can retrieve the DFP line item for billing reconciliation.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub dfp_line_item_id: Option<i64>,
    /// The original contracted quantity (# impressions) for this deal.
    /// To ensure delivery, sometimes the publisher will book the deal with a impression buffer, however clients are billed using the original contracted quantity.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub original_contracted_quantity: Option<i64>,
    /// The original reservation price for the deal, if the currency code is different from the one used in negotiation.
    pub price: Option<Price>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NonGuaranteedAuctionTerms {
    /// True if open auction buyers are allowed to compete with invited buyers in this private auction (buyer-readonly).
    pub auto_optimize_private_auction: Option<bool>,
    /// Reserve price for the specified buyer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reserve_price_per_buyers: Vec<PricePerBuyer>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NonGuaranteedFixedPriceTerms {
    /// Fixed price for the specified buyer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fixed_prices: Vec<PricePerBuyer>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RubiconNonGuaranteedTerms {
    /// Optional price for Rubicon priority access in the auction.
    pub priority_price: Option<Price>,
    /// Optional price for Rubicon standard access in the auction.
    pub standard_price: Option<Price>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryControl {
    pub creative_blocking_level: Option<String>,
    pub delivery_rate_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frequency_caps: Vec<FrequencyCap>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyCap {
    pub max_impressions: Option<i32>,
    pub num_time_units: Option<i32>,
    pub time_unit_type: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SharedTargeting {
    /// The list of values to exclude from targeting. Each value is AND'd together.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<TargetingValue>,
    /// The list of value to include as part of the targeting. Each value is OR'd together.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inclusions: Vec<TargetingValue>,
    /// The key representing the shared targeting criterion.
    pub key: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TargetingValue {
    /// The creative size value to exclude/include.
    pub creative_size_value: Option<TargetingValueCreativeSize>,
    /// The daypart targeting to include / exclude. Filled in when the key is GOOG_DAYPART_TARGETING.
    pub day_part_targeting_value: Option<TargetingValueDayPartTargeting>,
    /// The long value to exclude/include.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub long_value: Option<i64>,
    /// The string value to exclude/include.
    pub string_value: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TargetingValueCreativeSize {
    /// The formats allowed by the publisher.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_formats: Vec<String>,
    /// For video size type, the list of companion sizes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub companion_sizes: Vec<TargetingValueSize>,
    /// The Creative size type.
    pub creative_size_type: Option<String>,
    /// The native template for native ad.
    pub native_template: Option<String>,
    /// For regular or video creative size type, specifies the size of the creative.
    pub size: Option<TargetingValueSize>,
    /// The skippable ad type for video size.
    pub skippable_ad_type: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TargetingValueSize {
    /// The height of the creative.
    pub height: Option<i32>,
    /// The width of the creative.
    pub width: Option<i32>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TargetingValueDayPartTargeting {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub day_parts: Vec<TargetingValueDayPart>,
    pub time_zone_type: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TargetingValueDayPart {
    pub day_of_week: Option<String>,
    pub end_hour: Option<i32>,
    pub end_minute: Option<i32>,
    pub start_hour: Option<i32>,
    pub start_minute: Option<i32>,
}

/// The proposal state transition requested alongside a marketplace write.
#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub enum UpdateAction {
    Accept,
    Cancel,
    Propose,
    ProposeAndAccept,
    #[default]
    UnknownAction,
    UpdateNonTerms,
}

impl UpdateAction {
    /// The wire name, used where the action is a path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateAction::Accept => "accept",
            UpdateAction::Cancel => "cancel",
            UpdateAction::Propose => "propose",
            UpdateAction::ProposeAndAccept => "proposeAndAccept",
            UpdateAction::UnknownAction => "unknownAction",
            UpdateAction::UpdateNonTerms => "updateNonTerms",
        }
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PublisherProvidedForecast {
    /// Publisher provided dimensions. E.g. geo, sizes etc...
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<Dimension>,
    /// Publisher provided weekly impressions.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub weekly_impressions: Option<i64>,
    /// Publisher provided weekly uniques.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub weekly_uniques: Option<i64>,
}

/// A dimension of a forecast, for example geo or size, and the share of traffic per value.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    pub dimension_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimension_values: Vec<DimensionDimensionValue>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DimensionDimensionValue {
    /// Id of the dimension.
    pub id: Option<i32>,
    /// Name of the dimension mainly for debugging purposes, except for the case of CREATIVE_SIZE.
    /// For CREATIVE_SIZE, strings are used instead of ids.
    pub name: Option<String>,
    /// Percent of total impressions for a dimension type. e.g. {dimension_type: 'GENDER', [{dimension_value: {id: 1, name: 'MALE', percentage: 60}}]}
    /// Gender MALE is 60% of all impressions which have gender.
    pub percentage: Option<i32>,
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use crate::http::types::{DealTerms, UpdateAction};

    #[test]
    fn test_update_action_wire_names() {
        for action in [
            UpdateAction::Accept,
            UpdateAction::Cancel,
            UpdateAction::Propose,
            UpdateAction::ProposeAndAccept,
            UpdateAction::UnknownAction,
            UpdateAction::UpdateNonTerms,
        ] {
            assert_eq!(serde_json::to_value(action).unwrap(), json!(action.as_str()));
        }
    }

    #[test]
    fn test_deal_terms_int64_strings() {
        let terms: DealTerms = serde_json::from_value(json!({
            "estimatedImpressionsPerDay": "123456789012",
            "guaranteedFixedPriceTerms": {
                "guaranteedLooks": "1000",
                "billingInfo": {"currencyConversionTimeMs": "1700000000000"}
            }
        }))
        .unwrap();
        assert_eq!(terms.estimated_impressions_per_day, Some(123456789012));
        let guaranteed = terms.guaranteed_fixed_price_terms.as_ref().unwrap();
        assert_eq!(guaranteed.guaranteed_looks, Some(1000));
        assert_eq!(
            guaranteed.billing_info.as_ref().unwrap().currency_conversion_time_ms,
            Some(1700000000000)
        );
        let value = serde_json::to_value(&terms).unwrap();
        assert_eq!(value["estimatedImpressionsPerDay"], "123456789012");
    }
}
