use google_cloud_gax::Escape;
use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::proposals::Proposal;
use crate::http::types::UpdateAction;

/// Shared by `patch` and `update`.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProposalRequest {
    /// The proposal id to update.
    pub proposal_id: String,
    /// The last known revision number to update.
    /// If the head revision in the marketplace database has since changed, an error will be thrown.
    /// The caller should then fetch the latest proposal at head revision and retry the update at that revision.
    pub revision_number: i64,
    /// The proposed action to take on the proposal.
    /// This field is required and it must be set when updating a proposal.
    pub update_action: UpdateAction,
    pub proposal: Proposal,
}

fn url(base_url: &str, req: &UpdateProposalRequest) -> String {
    format!(
        "{}/proposals/{}/{}/{}",
        base_url,
        req.proposal_id.escape(),
        req.revision_number,
        req.update_action.as_str()
    )
}

pub(crate) fn build(base_url: &str, client: &Client, req: &UpdateProposalRequest) -> RequestBuilder {
    client.patch(url(base_url, req)).json(&req.proposal)
}

pub(crate) fn build_update(base_url: &str, client: &Client, req: &UpdateProposalRequest) -> RequestBuilder {
    client.put(url(base_url, req)).json(&req.proposal)
}
