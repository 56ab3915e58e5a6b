pub mod get;
pub mod patch;

/// The configuration data for Ad Exchange RTB - Budget API.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// The id of the account. This is required for get and update requests.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub account_id: Option<i64>,
    /// The billing id to determine which adgroup to provide budget information for. This is required for get and update requests.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub billing_id: Option<i64>,
    /// The daily budget amount in unit amount of the account currency to apply for the billingId provided.
    /// This is required for update requests.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub budget_amount: Option<i64>,
    /// The currency code for the buyer. This cannot be altered here.
    pub currency_code: Option<String>,
    /// The unique id that describes this item.
    pub id: Option<String>,
    /// The kind of the resource, i.e. "adexchangebuyer#budget".
    pub kind: Option<String>,
}
