use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::creatives::Creative;

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum CreativeStatusFilter {
    Approved,
    ConditionallyApproved,
    Disapproved,
    NotChecked,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListCreativesRequest {
    /// When specified, only creatives for the given account ids are returned.
    #[serde(skip_serializing)]
    pub account_id: Vec<i32>,
    /// When specified, only creatives for the given buyer creative ids are returned.
    #[serde(skip_serializing)]
    pub buyer_creative_id: Vec<String>,
    /// When specified, only creatives having the given deals status are returned.
    pub deals_status_filter: Option<CreativeStatusFilter>,
    /// Maximum number of entries returned on one result page. Acceptable values are 1 to 1000, inclusive.
    pub max_results: Option<u32>,
    /// When specified, only creatives having the given open auction status are returned.
    pub open_auction_status_filter: Option<CreativeStatusFilter>,
    /// A continuation token, used to page through ad clients. To retrieve the next page, set this parameter to the value of "nextPageToken" from the previous response.
    pub page_token: Option<String>,
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreativesList {
    /// A list of creatives.
    #[serde(default)]
    pub items: Vec<Creative>,
    /// Resource type.
    pub kind: Option<String>,
    /// Continuation token used to page through creatives. To retrieve the next page of results, set the next request's "pageToken" value to this.
    pub next_page_token: Option<String>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &ListCreativesRequest) -> RequestBuilder {
    let url = format!("{base_url}/creatives");
    let mut builder = client.get(url).query(req);
    for account_id in &req.account_id {
        builder = builder.query(&[("accountId", account_id)]);
    }
    for buyer_creative_id in &req.buyer_creative_id {
        builder = builder.query(&[("buyerCreativeId", buyer_creative_id)]);
    }
    builder
}
