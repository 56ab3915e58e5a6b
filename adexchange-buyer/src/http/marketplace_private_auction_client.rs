use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::marketplace_private_auction;
use crate::http::marketplace_private_auction::update_proposal::UpdatePrivateAuctionProposalRequest;

#[derive(Clone, Debug)]
pub struct MarketplacePrivateAuctionClient {
    inner: Arc<HttpClient>,
}

impl MarketplacePrivateAuctionClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Update a given private auction proposal
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn update_proposal(&self, req: &UpdatePrivateAuctionProposalRequest) -> Result<(), Error> {
        let builder =
            marketplace_private_auction::update_proposal::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send_get_empty(builder).await
    }
}

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::http::marketplace_notes::MarketplaceNote;
    use crate::http::marketplace_private_auction::update_proposal::UpdatePrivateAuctionProposalRequest;
    use crate::http::test::create_client;
    use crate::http::types::UpdateAction;

    #[tokio::test]
    async fn test_update_proposal() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/adexchangebuyer/v1.4/privateauction/pa-1/updateproposal")
                    .json_body(json!({
                        "externalDealId": "ext-1",
                        "note": {"note": "accepted"},
                        "proposalRevisionNumber": "7",
                        "updateAction": "accept"
                    }));
                then.status(204);
            })
            .await;

        create_client(&server)
            .marketplace_private_auction()
            .update_proposal(&UpdatePrivateAuctionProposalRequest {
                private_auction_id: "pa-1".to_string(),
                external_deal_id: Some("ext-1".to_string()),
                note: Some(MarketplaceNote {
                    note: Some("accepted".to_string()),
                    ..Default::default()
                }),
                proposal_revision_number: Some(7),
                update_action: Some(UpdateAction::Accept),
            })
            .await
            .unwrap();
        mock.assert_async().await;
    }
}
