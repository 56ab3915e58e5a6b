use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::marketplace_notes;
use crate::http::marketplace_notes::MarketplaceNotes;

#[derive(Clone, Debug)]
pub struct MarketplaceNotesClient {
    inner: Arc<HttpClient>,
}

impl MarketplaceNotesClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Add notes to the proposal
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn insert(&self, proposal_id: &str, notes: &MarketplaceNotes) -> Result<MarketplaceNotes, Error> {
        let builder = marketplace_notes::insert::build(self.inner.endpoint(), self.inner.http(), proposal_id, notes);
        self.inner.send(builder).await
    }

    /// Get all the notes associated with a proposal.
    /// `pql_query` filters the notes, for example "WHERE dealId = 'deal-1'".
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, proposal_id: &str, pql_query: Option<&str>) -> Result<MarketplaceNotes, Error> {
        let builder = marketplace_notes::list::build(self.inner.endpoint(), self.inner.http(), proposal_id, pql_query);
        self.inner.send(builder).await
    }
}

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::http::marketplace_notes::{MarketplaceNote, MarketplaceNotes};
    use crate::http::test::create_client;

    #[tokio::test]
    async fn test_insert_and_list() {
        let server = MockServer::start_async().await;
        let insert = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/adexchangebuyer/v1.4/proposals/pr-1/notes/insert")
                    .json_body(json!({"notes": [{"note": "please lower the floor", "proposalRevisionNumber": "2"}]}));
                then.status(200).json_body(json!({
                    "notes": [{"noteId": "n-1", "note": "please lower the floor", "timestampMs": "1700000000000"}]
                }));
            })
            .await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET).path("/adexchangebuyer/v1.4/proposals/pr-1/notes");
                then.status(200).json_body(json!({
                    "notes": [{"noteId": "n-1", "creatorRole": "BUYER"}, {"noteId": "n-2", "creatorRole": "SELLER"}]
                }));
            })
            .await;

        let client = create_client(&server);
        let created = client
            .marketplace_notes()
            .insert(
                "pr-1",
                &MarketplaceNotes {
                    notes: vec![MarketplaceNote {
                        note: Some("please lower the floor".to_string()),
                        proposal_revision_number: Some(2),
                        ..Default::default()
                    }],
                },
            )
            .await
            .unwrap();
        assert_eq!(created.notes[0].timestamp_ms, Some(1700000000000));

        let notes = client.marketplace_notes().list("pr-1", None).await.unwrap();
        assert_eq!(notes.notes.len(), 2);
        assert_eq!(notes.notes[1].creator_role.as_deref(), Some("SELLER"));
        insert.assert_async().await;
        list.assert_async().await;
    }
}
