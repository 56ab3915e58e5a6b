use google_cloud_gax::Escape;
use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::marketplace_deals::MarketplaceDeal;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetOrderDealsResponse {
    /// List of deals for the proposal
    #[serde(default)]
    pub deals: Vec<MarketplaceDeal>,
}

pub(crate) fn build(base_url: &str, client: &Client, proposal_id: &str, pql_query: Option<&str>) -> RequestBuilder {
    let url = format!("{}/proposals/{}/deals", base_url, proposal_id.escape());
    let builder = client.get(url);
    match pql_query {
        Some(query) => builder.query(&[("pqlQuery", query)]),
        None => builder,
    }
}
