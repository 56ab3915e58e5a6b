use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::marketplace_deals;
use crate::http::marketplace_deals::delete::DeleteOrderDealsRequest;
use crate::http::marketplace_deals::insert::AddOrderDealsRequest;
use crate::http::marketplace_deals::list::GetOrderDealsResponse;
use crate::http::marketplace_deals::update::{EditAllOrderDealsRequest, EditAllOrderDealsResponse};
use crate::http::marketplace_deals::OrderDealsResponse;

#[derive(Clone, Debug)]
pub struct MarketplaceDealsClient {
    inner: Arc<HttpClient>,
}

impl MarketplaceDealsClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Delete the specified deals from the proposal
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn delete(&self, req: &DeleteOrderDealsRequest) -> Result<OrderDealsResponse, Error> {
        let builder = marketplace_deals::delete::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Add new deals for the specified proposal
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn insert(&self, req: &AddOrderDealsRequest) -> Result<OrderDealsResponse, Error> {
        let builder = marketplace_deals::insert::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// List all the deals for a given proposal
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, proposal_id: &str, pql_query: Option<&str>) -> Result<GetOrderDealsResponse, Error> {
        let builder = marketplace_deals::list::build(self.inner.endpoint(), self.inner.http(), proposal_id, pql_query);
        self.inner.send(builder).await
    }

    /// Replaces all the deals in the proposal with the passed in deals
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn update(&self, req: &EditAllOrderDealsRequest) -> Result<EditAllOrderDealsResponse, Error> {
        let builder = marketplace_deals::update::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::http::marketplace_deals::delete::DeleteOrderDealsRequest;
    use crate::http::marketplace_deals::insert::AddOrderDealsRequest;
    use crate::http::marketplace_deals::update::EditAllOrderDealsRequest;
    use crate::http::marketplace_deals::{MarketplaceDeal, ProposalRevision};
    use crate::http::test::create_client;
    use crate::http::types::UpdateAction;

    #[tokio::test]
    async fn test_insert_and_delete() {
        let server = MockServer::start_async().await;
        let insert = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/adexchangebuyer/v1.4/proposals/pr-1/deals/insert")
                    .json_body(json!({
                        "deals": [{"name": "deal one", "flightStartTimeMs": "1700000000000"}],
                        "proposalRevisionNumber": "2",
                        "updateAction": "propose"
                    }));
                then.status(200).json_body(json!({
                    "deals": [{"dealId": "d-1", "name": "deal one"}],
                    "proposalRevisionNumber": "3"
                }));
            })
            .await;
        let delete = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/adexchangebuyer/v1.4/proposals/pr-1/deals/delete")
                    .json_body(json!({"dealIds": ["d-1"], "proposalRevisionNumber": "3"}));
                then.status(200).json_body(json!({"proposalRevisionNumber": "4"}));
            })
            .await;

        let client = create_client(&server);
        let added = client
            .marketplace_deals()
            .insert(&AddOrderDealsRequest {
                proposal_id: "pr-1".to_string(),
                deals: vec![MarketplaceDeal {
                    name: Some("deal one".to_string()),
                    flight_start_time_ms: Some(1700000000000),
                    ..Default::default()
                }],
                revision: ProposalRevision {
                    proposal_revision_number: Some(2),
                    update_action: Some(UpdateAction::Propose),
                },
            })
            .await
            .unwrap();
        assert_eq!(added.proposal_revision_number, Some(3));
        assert_eq!(added.deals[0].deal_id.as_deref(), Some("d-1"));

        let deleted = client
            .marketplace_deals()
            .delete(&DeleteOrderDealsRequest {
                proposal_id: "pr-1".to_string(),
                deal_ids: vec!["d-1".to_string()],
                revision: ProposalRevision {
                    proposal_revision_number: Some(3),
                    update_action: None,
                },
            })
            .await
            .unwrap();
        assert!(deleted.deals.is_empty());
        assert_eq!(deleted.proposal_revision_number, Some(4));
        insert.assert_async().await;
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_and_update() {
        let server = MockServer::start_async().await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/adexchangebuyer/v1.4/proposals/pr-1/deals")
                    .query_param("pqlQuery", "WHERE isSetupComplete = false");
                then.status(200).json_body(json!({
                    "deals": [{
                        "dealId": "d-1",
                        "dealServingMetadata": {"dealPauseStatus": {"hasBuyerPaused": true, "firstPausedBy": "BUYER"}}
                    }]
                }));
            })
            .await;
        let update = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/adexchangebuyer/v1.4/proposals/pr-1/deals/update")
                    .json_body(json!({
                        "deals": [{"dealId": "d-1", "name": "renamed"}],
                        "proposalRevisionNumber": "4",
                        "updateAction": "updateNonTerms"
                    }));
                then.status(200).json_body(json!({"deals": [{"dealId": "d-1"}], "orderRevisionNumber": "5"}));
            })
            .await;

        let client = create_client(&server);
        let response = client
            .marketplace_deals()
            .list("pr-1", Some("WHERE isSetupComplete = false"))
            .await
            .unwrap();
        let pause = response.deals[0]
            .deal_serving_metadata
            .as_ref()
            .and_then(|m| m.deal_pause_status.as_ref())
            .unwrap();
        assert_eq!(pause.has_buyer_paused, Some(true));

        let edited = client
            .marketplace_deals()
            .update(&EditAllOrderDealsRequest {
                proposal_id: "pr-1".to_string(),
                deals: vec![MarketplaceDeal {
                    deal_id: Some("d-1".to_string()),
                    name: Some("renamed".to_string()),
                    ..Default::default()
                }],
                proposal: None,
                revision: ProposalRevision {
                    proposal_revision_number: Some(4),
                    update_action: Some(UpdateAction::UpdateNonTerms),
                },
            })
            .await
            .unwrap();
        assert_eq!(edited.order_revision_number, Some(5));
        list.assert_async().await;
        update.assert_async().await;
    }
}
