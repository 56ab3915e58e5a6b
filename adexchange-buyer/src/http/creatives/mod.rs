use time::OffsetDateTime;

pub mod deals;
pub mod get;
pub mod insert;
pub mod list;

/// A creative and its classification data.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Creative {
    /// The HTML snippet that displays the ad when inserted in the web page.
    /// If set, videoURL, videoVastXML, and nativeAd should not be set.
    #[serde(rename = "HTMLSnippet")]
    pub html_snippet: Option<String>,
    /// Account id.
    pub account_id: Option<i32>,
    /// The link to the Ad Preferences page. This is only supported for native ads.
    pub ad_choices_destination_url: Option<String>,
    pub ad_technology_providers: Option<AdTechnologyProviders>,
    /// Detected advertiser id, if any. Read-only. This field should not be set in requests.
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "google_cloud_gax::conversion::string::vec")]
    pub advertiser_id: Vec<i64>,
    /// The name of the company being advertised in the creative.
    /// A list of advertisers is provided in the advertisers.txt file.
    pub advertiser_name: Option<String>,
    /// The agency id for this creative.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub agency_id: Option<i64>,
    /// The last upload timestamp of this creative if it was uploaded via API. Read-only.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub api_upload_timestamp: Option<OffsetDateTime>,
    /// List of buyer selectable attributes for the ads that may be shown from this snippet.
    /// Each attribute is represented by an integer as defined in buyer-declarable-creative-attributes.txt.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute: Vec<i32>,
    /// A buyer-specific id identifying the creative in this ad.
    pub buyer_creative_id: Option<String>,
    /// The set of destination urls for the snippet.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub click_through_url: Vec<String>,
    /// Shows any corrections that were applied to this creative. Read-only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub corrections: Vec<Correction>,
    /// Creative status identity type that the creative item applies to.
    /// Ad Exchange real-time bidding is migrating to the sizeless creative verification.
    /// Originally, Ad Exchange assigned creative verification status to a unique combination of a buyer creative ID and creative dimensions.
    /// Post-migration, a single verification status will be assigned at the buyer creative ID level.
    pub creative_status_identity_type: Option<String>,
    /// Top-level deals status. Read-only.
    /// This field should not be set in requests. If disapproved, an entry for auctionType=DIRECT_DEALS
    /// (or ALL) in servingRestrictions will also exist.
    pub deals_status: Option<String>,
    /// Detected domains for this creative. Read-only. This field should not be set in requests.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detected_domains: Vec<String>,
    /// The filtering reasons for the creative. Read-only. This field should not be set in requests.
    pub filtering_reasons: Option<FilteringReasons>,
    /// Ad height.
    pub height: Option<i32>,
    /// The set of urls to be called to record an impression.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub impression_tracking_url: Vec<String>,
    /// Resource type.
    pub kind: Option<String>,
    /// Detected languages for this creative. Read-only. This field should not be set in requests.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
    /// If nativeAd is set, HTMLSnippet, videoVastXML, and the videoURL outside of nativeAd should not be set.
    pub native_ad: Option<NativeAd>,
    /// Top-level open auction status. Read-only.
    pub open_auction_status: Option<String>,
    /// Detected product categories, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_categories: Vec<i32>,
    /// All restricted categories for the ads that may be shown from this snippet.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restricted_categories: Vec<i32>,
    /// Detected sensitive categories, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sensitive_categories: Vec<i32>,
    /// The granular status of this ad in specific contexts.
    /// A context here relates to where something ultimately serves (for example, a physical location, a platform, an HTTPS vs HTTP request, or the type of auction). Read-only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub serving_restrictions: Vec<ServingRestriction>,
    /// List of vendor types for the ads that may be shown from this snippet.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vendor_type: Vec<i32>,
    /// The version for this creative. Read-only. This field should not be set in requests.
    pub version: Option<i32>,
    /// The URL to fetch a video ad. If set, HTMLSnippet, videoVastXML, and nativeAd should not be set.
    #[serde(rename = "videoURL")]
    pub video_url: Option<String>,
    /// The contents of a VAST document for a video ad.
    #[serde(rename = "videoVastXML")]
    pub video_vast_xml: Option<String>,
    /// Ad width.
    pub width: Option<i32>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdTechnologyProviders {
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "google_cloud_gax::conversion::string::vec")]
    pub detected_provider_ids: Vec<i64>,
    pub has_unidentified_provider: Option<bool>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Correction {
    /// All known serving contexts containing serving status information.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contexts: Vec<ServingContext>,
    /// Additional details about the correction.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    /// The type of correction that was applied to the creative.
    pub reason: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServingContext {
    /// Only set when contextType=AUCTION_TYPE. Represents the auction types this correction applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auction_type: Vec<String>,
    /// The type of context (e.g., location, platform, auction type, SSL-ness).
    pub context_type: Option<String>,
    /// Only set when contextType=LOCATION. Represents the geo criterias this correction applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub geo_criteria_id: Vec<i32>,
    /// Only set when contextType=PLATFORM. Represents the platforms this correction applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platform: Vec<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilteringReasons {
    /// The date in ISO 8601 format for the data. The data is collected from 00:00:00 to 23:59:59 in PST.
    pub date: Option<String>,
    /// The filtering reasons.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<FilteringReason>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilteringReason {
    /// The number of times the creative was filtered for the status. The count is aggregated across all publishers on the exchange.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub filtering_count: Option<i64>,
    /// The filtering status code as defined in creative-status-codes.txt.
    pub filtering_status: Option<i32>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NativeAd {
    pub advertiser: Option<String>,
    /// The app icon, for app download ads.
    pub app_icon: Option<NativeAdImage>,
    /// A long description of the ad.
    pub body: Option<String>,
    /// A label for the button that the user is supposed to click.
    pub call_to_action: Option<String>,
    /// The URL that the browser/SDK will load when the user clicks the ad.
    pub click_link_url: Option<String>,
    /// The URL to use for click tracking.
    pub click_tracking_url: Option<String>,
    /// A short title for the ad.
    pub headline: Option<String>,
    /// A large image.
    pub image: Option<NativeAdImage>,
    /// The URLs are called when the impression is rendered.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub impression_tracking_url: Vec<String>,
    /// A smaller image, for the advertiser logo.
    pub logo: Option<NativeAdImage>,
    /// The price of the promoted app including the currency info.
    pub price: Option<String>,
    /// The app rating in the app store. Must be in the range [0-5].
    pub star_rating: Option<f64>,
    /// The URL of the XML VAST for a native ad. Note this is a separate field from resource.video_url.
    #[serde(rename = "videoURL")]
    pub video_url: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NativeAdImage {
    pub height: Option<i32>,
    pub url: Option<String>,
    pub width: Option<i32>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServingRestriction {
    /// All known contexts/restrictions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contexts: Vec<ServingContext>,
    /// The reasons for disapproval within this restriction, if any.
    /// Note that not all disapproval reasons may be categorized, so it is possible for the creative to have a status of DISAPPROVED or CONDITIONALLY_APPROVED with an empty list for disapproval_reasons.
    /// In this case, please reach out to your TAM to help debug the issue.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disapproval_reasons: Vec<DisapprovalReason>,
    /// Why the creative is ineligible to serve in this context (e.g., it has been explicitly disapproved or is pending review).
    pub reason: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DisapprovalReason {
    /// Additional details about the reason for disapproval.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    /// The categorized reason for disapproval.
    pub reason: Option<String>,
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use crate::http::creatives::Creative;

    #[test]
    fn test_creative_uppercase_keys() {
        let creative: Creative = serde_json::from_value(json!({
            "HTMLSnippet": "<div>ad</div>",
            "videoURL": "https://video.example.com/ad.mp4",
            "videoVastXML": "<VAST/>",
            "advertiserId": ["10", "11"],
            "apiUploadTimestamp": "2023-01-02T03:04:05Z",
            "nativeAd": {"headline": "buy", "videoURL": "https://video.example.com/native.xml", "starRating": 4.5}
        }))
        .unwrap();
        assert_eq!(creative.html_snippet.as_deref(), Some("<div>ad</div>"));
        assert_eq!(creative.advertiser_id, vec![10, 11]);
        assert_eq!(creative.api_upload_timestamp.unwrap().unix_timestamp(), 1672628645);
        let native = creative.native_ad.as_ref().unwrap();
        assert_eq!(native.star_rating, Some(4.5));

        let value = serde_json::to_value(&creative).unwrap();
        assert_eq!(value["HTMLSnippet"], "<div>ad</div>");
        assert_eq!(value["videoURL"], "https://video.example.com/ad.mp4");
        assert_eq!(value["nativeAd"]["videoURL"], "https://video.example.com/native.xml");
        assert_eq!(value["advertiserId"], json!(["10", "11"]));
    }
}
