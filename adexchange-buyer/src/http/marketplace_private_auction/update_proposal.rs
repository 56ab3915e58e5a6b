use google_cloud_gax::Escape;
use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::marketplace_notes::MarketplaceNote;
use crate::http::types::UpdateAction;

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePrivateAuctionProposalRequest {
    /// The private auction id to be updated.
    #[serde(skip_serializing)]
    pub private_auction_id: String,
    /// The externalDealId of the deal to be updated.
    pub external_deal_id: Option<String>,
    /// Optional note to be added.
    pub note: Option<MarketplaceNote>,
    /// The current revision number of the proposal to be updated.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub proposal_revision_number: Option<i64>,
    /// The proposed action on the private auction proposal.
    pub update_action: Option<UpdateAction>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &UpdatePrivateAuctionProposalRequest) -> RequestBuilder {
    let url = format!(
        "{}/privateauction/{}/updateproposal",
        base_url,
        req.private_auction_id.escape()
    );
    client.post(url).json(req)
}
