use google_cloud_gax::Escape;
use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::marketplace_deals::ProposalRevision;

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOrderDealsRequest {
    /// The proposalId to delete deals from.
    #[serde(skip_serializing)]
    pub proposal_id: String,
    /// List of deals to delete for a given proposal
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deal_ids: Vec<String>,
    #[serde(flatten)]
    pub revision: ProposalRevision,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &DeleteOrderDealsRequest) -> RequestBuilder {
    let url = format!("{}/proposals/{}/deals/delete", base_url, req.proposal_id.escape());
    client.post(url).json(req)
}
