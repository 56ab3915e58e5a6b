use google_cloud_gax::Escape;
use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::marketplace_deals::{MarketplaceDeal, ProposalRevision};
use crate::http::proposals::Proposal;

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct EditAllOrderDealsRequest {
    /// The proposalId to edit deals on.
    #[serde(skip_serializing)]
    pub proposal_id: String,
    /// List of deals to edit. Service may perform 3 different operations based on comparison of deals in this list vs deals already persisted in database:
    /// 1. Add new deal to proposal If a deal in this list does not exist in the proposal, the service will create a new deal and add it to the proposal.
    /// Validation will follow AddOrderDealsRequest.
    /// 2. Update existing deal in the proposal If a deal in this list already exist in the proposal, the service will update that existing deal to this new deal in the request.
    /// Validation will follow UpdateOrderDealsRequest.
    /// 3. Delete deals from the proposal (just need the id) If a existing deal in the proposal is not present in this list, the service will delete that deal from the proposal.
    /// Validation will follow DeleteOrderDealsRequest.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deals: Vec<MarketplaceDeal>,
    /// If specified, also updates the proposal in the batch transaction.
    /// This is useful when the proposal and the deals need to be updated in one transaction.
    pub proposal: Option<Proposal>,
    #[serde(flatten)]
    pub revision: ProposalRevision,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct EditAllOrderDealsResponse {
    /// List of all deals in the proposal after edit.
    #[serde(default)]
    pub deals: Vec<MarketplaceDeal>,
    /// The latest revision number after the update has been applied.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub order_revision_number: Option<i64>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &EditAllOrderDealsRequest) -> RequestBuilder {
    let url = format!("{}/proposals/{}/deals/update", base_url, req.proposal_id.escape());
    client.post(url).json(req)
}
