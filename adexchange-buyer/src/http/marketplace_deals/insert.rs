use google_cloud_gax::Escape;
use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::marketplace_deals::{MarketplaceDeal, ProposalRevision};

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AddOrderDealsRequest {
    /// proposalId for which deals need to be added.
    #[serde(skip_serializing)]
    pub proposal_id: String,
    /// The list of deals to add
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deals: Vec<MarketplaceDeal>,
    #[serde(flatten)]
    pub revision: ProposalRevision,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &AddOrderDealsRequest) -> RequestBuilder {
    let url = format!("{}/proposals/{}/deals/insert", base_url, req.proposal_id.escape());
    client.post(url).json(req)
}
