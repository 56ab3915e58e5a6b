pub mod list;

/// The configuration data for an Ad Exchange performance report list.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    /// The number of bid responses with an ad.
    pub bid_rate: Option<f64>,
    /// The number of bid requests sent to your bidder.
    pub bid_request_rate: Option<f64>,
    /// Rate of various prefiltering statuses per match. Please refer to the callout-status-codes.txt file for different statuses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub callout_status_rate: Vec<serde_json::Value>,
    /// Average QPS for cookie matcher operations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cookie_matcher_status_rate: Vec<serde_json::Value>,
    /// Rate of ads with a given status. Please refer to the creative-status-codes.txt file for different statuses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub creative_status_rate: Vec<serde_json::Value>,
    /// The number of bid responses that were filtered due to a policy violation or other errors.
    pub filtered_bid_rate: Option<f64>,
    /// Average QPS for hosted match operations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hosted_match_status_rate: Vec<serde_json::Value>,
    /// The number of potential queries based on your pretargeting settings.
    pub inventory_match_rate: Option<f64>,
    /// Resource type.
    pub kind: Option<String>,
    /// The 50th percentile round trip latency(ms) as perceived from Google servers for the duration period covered by the report.
    pub latency_50th_percentile: Option<f64>,
    /// The 85th percentile round trip latency(ms) as perceived from Google servers for the duration period covered by the report.
    pub latency_85th_percentile: Option<f64>,
    /// The 95th percentile round trip latency(ms) as perceived from Google servers for the duration period covered by the report.
    pub latency_95th_percentile: Option<f64>,
    /// Rate of various quota account statuses per quota check.
    pub no_quota_in_region: Option<f64>,
    /// Rate of various quota account statuses per quota check.
    pub out_of_quota: Option<f64>,
    /// Average QPS for pixel match requests from clients.
    pub pixel_match_requests: Option<f64>,
    /// Average QPS for pixel match responses from clients.
    pub pixel_match_responses: Option<f64>,
    /// The configured quota limits for this account.
    pub quota_configured_limit: Option<f64>,
    /// The throttled quota limits for this account.
    pub quota_throttled_limit: Option<f64>,
    /// The trading location of this data.
    pub region: Option<String>,
    /// The number of properly formed bid responses received by our servers within the deadline.
    pub successful_request_rate: Option<f64>,
    /// The unix timestamp of the starting time of this performance data.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub timestamp: Option<i64>,
    /// The number of bid responses that were unsuccessful due to timeouts, incorrect formatting, etc.
    pub unsuccessful_request_rate: Option<f64>,
}
