use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::proposals;
use crate::http::proposals::insert::CreateOrdersRequest;
use crate::http::proposals::patch::UpdateProposalRequest;
use crate::http::proposals::{Proposal, ProposalList};

#[derive(Clone, Debug)]
pub struct ProposalsClient {
    inner: Arc<HttpClient>,
}

impl ProposalsClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Get a proposal given its id
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(&self, proposal_id: &str) -> Result<Proposal, Error> {
        let builder = proposals::get::build(self.inner.endpoint(), self.inner.http(), proposal_id);
        self.inner.send(builder).await
    }

    /// Create the given list of proposals
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn insert(&self, req: &CreateOrdersRequest) -> Result<ProposalList, Error> {
        let builder = proposals::insert::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Update the given proposal. This method supports patch semantics.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn patch(&self, req: &UpdateProposalRequest) -> Result<Proposal, Error> {
        let builder = proposals::patch::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Search for proposals using pql query
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn search(&self, pql_query: Option<&str>) -> Result<ProposalList, Error> {
        let builder = proposals::search::build(self.inner.endpoint(), self.inner.http(), pql_query);
        self.inner.send(builder).await
    }

    /// Update the given proposal to indicate that setup has been completed.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn setup_complete(&self, proposal_id: &str) -> Result<(), Error> {
        let builder = proposals::setup_complete::build(self.inner.endpoint(), self.inner.http(), proposal_id);
        self.inner.send_get_empty(builder).await
    }

    /// Update the given proposal
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn update(&self, req: &UpdateProposalRequest) -> Result<Proposal, Error> {
        let builder = proposals::patch::build_update(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use httpmock::Method::PATCH;
    use serde_json::json;

    use crate::http::proposals::insert::CreateOrdersRequest;
    use crate::http::proposals::patch::UpdateProposalRequest;
    use crate::http::proposals::Proposal;
    use crate::http::test::create_client;
    use crate::http::types::{Buyer, UpdateAction};

    #[tokio::test]
    async fn test_insert_and_get() {
        let server = MockServer::start_async().await;
        let insert = server
            .mock_async(|when, then| {
                when.method(POST).path("/adexchangebuyer/v1.4/proposals/insert").json_body(json!({
                    "proposals": [{"name": "spring campaign", "buyer": {"accountId": "1234"}}],
                    "webPropertyCode": "wp-1"
                }));
                then.status(200).json_body(json!({
                    "proposals": [{"proposalId": "pr-1", "revisionNumber": "1", "proposalState": "CREATED"}]
                }));
            })
            .await;
        let get = server
            .mock_async(|when, then| {
                when.method(GET).path("/adexchangebuyer/v1.4/proposals/pr-1");
                then.status(200).json_body(json!({
                    "proposalId": "pr-1",
                    "revisionNumber": "2",
                    "revisionTimeMs": "1700000000000",
                    "labels": [{"label": "priority", "createTimeMs": "1700000000001"}],
                    "buyerPrivateData": {"referenceId": "r1", "referencePayload": "aGVsbG8="}
                }));
            })
            .await;

        let client = create_client(&server);
        let created = client
            .proposals()
            .insert(&CreateOrdersRequest {
                proposals: vec![Proposal {
                    name: Some("spring campaign".to_string()),
                    buyer: Some(Buyer {
                        account_id: Some("1234".to_string()),
                    }),
                    ..Default::default()
                }],
                web_property_code: Some("wp-1".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(created.proposals[0].revision_number, Some(1));

        let proposal = client.proposals().get("pr-1").await.unwrap();
        assert_eq!(proposal.revision_time_ms, Some(1700000000000));
        assert_eq!(proposal.labels[0].create_time_ms, Some(1700000000001));
        let private = proposal.buyer_private_data.as_ref().unwrap();
        assert_eq!(private.reference_payload.as_deref(), Some(b"hello".as_slice()));
        insert.assert_async().await;
        get.assert_async().await;
    }

    #[tokio::test]
    async fn test_patch_and_update_put_action_in_path() {
        let server = MockServer::start_async().await;
        let patch = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/adexchangebuyer/v1.4/proposals/pr-1/2/proposeAndAccept")
                    .json_body(json!({"name": "renamed"}));
                then.status(200).json_body(json!({"proposalId": "pr-1", "revisionNumber": "3"}));
            })
            .await;
        let update = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/adexchangebuyer/v1.4/proposals/pr-1/3/updateNonTerms")
                    .json_body(json!({"proposalId": "pr-1", "name": "renamed"}));
                then.status(200).json_body(json!({"proposalId": "pr-1", "revisionNumber": "4"}));
            })
            .await;

        let client = create_client(&server);
        let proposal = client
            .proposals()
            .patch(&UpdateProposalRequest {
                proposal_id: "pr-1".to_string(),
                revision_number: 2,
                update_action: UpdateAction::ProposeAndAccept,
                proposal: Proposal {
                    name: Some("renamed".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(proposal.revision_number, Some(3));

        let proposal = client
            .proposals()
            .update(&UpdateProposalRequest {
                proposal_id: "pr-1".to_string(),
                revision_number: 3,
                update_action: UpdateAction::UpdateNonTerms,
                proposal: Proposal {
                    proposal_id: Some("pr-1".to_string()),
                    name: Some("renamed".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(proposal.revision_number, Some(4));
        patch.assert_async().await;
        update.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_and_setup_complete() {
        let server = MockServer::start_async().await;
        let search = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/adexchangebuyer/v1.4/proposals/search")
                    .query_param("pqlQuery", "WHERE proposalState = 'FINALIZED'");
                then.status(200).json_body(json!({"proposals": [{"proposalId": "pr-1"}]}));
            })
            .await;
        let setup = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/adexchangebuyer/v1.4/proposals/pr-1/setupcomplete")
                    .header("content-length", "0");
                then.status(204);
            })
            .await;

        let client = create_client(&server);
        let found = client
            .proposals()
            .search(Some("WHERE proposalState = 'FINALIZED'"))
            .await
            .unwrap();
        let proposal_id = found.proposals[0].proposal_id.clone().unwrap();
        client.proposals().setup_complete(&proposal_id).await.unwrap();
        search.assert_async().await;
        setup.assert_async().await;
    }
}
