//! Associations between a creative and the deals it may serve on.
use google_cloud_gax::Escape;
use reqwest::header::CONTENT_LENGTH;
use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

/// Identifies a creative and one of its deals.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreativeDealRequest {
    /// The id for the account that will serve this creative.
    pub account_id: i32,
    /// The buyer-specific id for this creative.
    pub buyer_creative_id: String,
    /// The id of the deal id to associate with this creative.
    pub deal_id: i64,
}

/// The external deal ids associated with a creative.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreativeDealIds {
    /// A list of external deal ids and ARC approval status.
    #[serde(default)]
    pub deal_statuses: Vec<DealStatus>,
    /// Resource type.
    pub kind: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DealStatus {
    /// ARC approval status.
    pub arc_status: Option<String>,
    /// External deal ID.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub deal_id: Option<i64>,
    /// Publisher ID.
    pub web_property_id: Option<i32>,
}

fn creative_url(base_url: &str, account_id: i32, buyer_creative_id: &str) -> String {
    format!("{}/creatives/{}/{}", base_url, account_id, buyer_creative_id.escape())
}

pub(crate) fn build_add(base_url: &str, client: &Client, req: &CreativeDealRequest) -> RequestBuilder {
    let url = format!(
        "{}/addDeal/{}",
        creative_url(base_url, req.account_id, &req.buyer_creative_id),
        req.deal_id
    );
    client.post(url).header(CONTENT_LENGTH, 0)
}

pub(crate) fn build_remove(base_url: &str, client: &Client, req: &CreativeDealRequest) -> RequestBuilder {
    let url = format!(
        "{}/removeDeal/{}",
        creative_url(base_url, req.account_id, &req.buyer_creative_id),
        req.deal_id
    );
    client.post(url).header(CONTENT_LENGTH, 0)
}

pub(crate) fn build_list(base_url: &str, client: &Client, account_id: i32, buyer_creative_id: &str) -> RequestBuilder {
    let url = format!("{}/listDeals", creative_url(base_url, account_id, buyer_creative_id));
    client.get(url)
}
