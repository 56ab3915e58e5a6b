pub mod get;
pub mod list;
pub mod patch;

/// Configuration data for an Ad Exchange buyer account.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// When this is false, bid requests that include a deal ID for a private auction or preferred deal are always sent to your bidder.
    /// When true, all active pretargeting configs will be applied to private auctions and preferred deals.
    /// Programmatic Guaranteed deals (when enabled) are always sent to your bidder.
    pub apply_pretargeting_to_non_guaranteed_deals: Option<bool>,
    /// Your bidder locations that have distinct URLs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bidder_location: Vec<BidderLocation>,
    /// The nid parameter value used in cookie match requests. Please contact your technical account manager if you need to change this.
    pub cookie_matching_nid: Option<String>,
    /// The base URL used in cookie match requests.
    pub cookie_matching_url: Option<String>,
    /// Account id.
    pub id: Option<i32>,
    /// Resource type.
    pub kind: Option<String>,
    /// The maximum number of active creatives that an account can have, where a creative is active if it was inserted or bid with in the last 30 days.
    /// Please contact your technical account manager if you need to change this.
    pub maximum_active_creatives: Option<i32>,
    /// The sum of all bidderLocation.maximumQps values cannot exceed this.
    /// Please contact your technical account manager if you need to change this.
    pub maximum_total_qps: Option<i32>,
    /// The number of creatives that this account inserted or bid with in the last 30 days.
    pub number_active_creatives: Option<i32>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct BidderLocation {
    /// The protocol that the bidder endpoint is using.
    /// OpenRTB protocols with prefix PROTOCOL_OPENRTB_PROTOBUF use proto buffer, otherwise use JSON.
    pub bid_protocol: Option<String>,
    /// The maximum queries per second the Ad Exchange will send.
    pub maximum_qps: Option<i32>,
    /// The geographical region the Ad Exchange should send requests from.
    /// Only used by some quota systems, but always setting the value is recommended.
    /// Allowed values: ASIA, EUROPE, US_EAST, US_WEST
    pub region: Option<String>,
    /// The URL to which the Ad Exchange will send bid requests.
    pub url: Option<String>,
}
