pub mod get;
pub mod list;

/// The billing information for an account.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct BillingInfo {
    /// Account id.
    pub account_id: Option<i32>,
    /// Account name.
    pub account_name: Option<String>,
    /// A list of adgroup IDs associated with this particular account.
    /// These IDs may show up as part of a realtime bidding BidRequest, which indicates a bid request for this account.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub billing_id: Vec<String>,
    /// Resource type.
    pub kind: Option<String>,
}
