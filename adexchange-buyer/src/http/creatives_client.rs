use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::creatives;
use crate::http::creatives::deals::{CreativeDealIds, CreativeDealRequest};
use crate::http::creatives::list::{CreativesList, ListCreativesRequest};
use crate::http::creatives::Creative;

#[derive(Clone, Debug)]
pub struct CreativesClient {
    inner: Arc<HttpClient>,
}

impl CreativesClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Add a deal id association for the creative.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn add_deal(&self, req: &CreativeDealRequest) -> Result<(), Error> {
        let builder = creatives::deals::build_add(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send_get_empty(builder).await
    }

    /// Gets the status for a single creative.
    /// A creative will be available 30-40 minutes after submission.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(&self, account_id: i32, buyer_creative_id: &str) -> Result<Creative, Error> {
        let builder = creatives::get::build(self.inner.endpoint(), self.inner.http(), account_id, buyer_creative_id);
        self.inner.send(builder).await
    }

    /// Submit a new creative.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn insert(&self, creative: &Creative) -> Result<Creative, Error> {
        let builder = creatives::insert::build(self.inner.endpoint(), self.inner.http(), creative);
        self.inner.send(builder).await
    }

    /// Retrieves a list of the authenticated user's active creatives.
    /// A creative will be available 30-40 minutes after submission.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, req: &ListCreativesRequest) -> Result<CreativesList, Error> {
        let builder = creatives::list::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Lists the external deal ids associated with the creative.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list_deals(&self, account_id: i32, buyer_creative_id: &str) -> Result<CreativeDealIds, Error> {
        let builder =
            creatives::deals::build_list(self.inner.endpoint(), self.inner.http(), account_id, buyer_creative_id);
        self.inner.send(builder).await
    }

    /// Remove a deal id associated with the creative.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn remove_deal(&self, req: &CreativeDealRequest) -> Result<(), Error> {
        let builder = creatives::deals::build_remove(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send_get_empty(builder).await
    }
}

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::http::creatives::deals::CreativeDealRequest;
    use crate::http::creatives::list::{CreativeStatusFilter, ListCreativesRequest};
    use crate::http::creatives::Creative;
    use crate::http::test::create_client;

    #[tokio::test]
    async fn test_insert_and_get() {
        let server = MockServer::start_async().await;
        let insert = server
            .mock_async(|when, then| {
                when.method(POST).path("/adexchangebuyer/v1.4/creatives").json_body(json!({
                    "HTMLSnippet": "<div>ad</div>",
                    "accountId": 1234,
                    "buyerCreativeId": "c1",
                    "clickThroughUrl": ["https://example.com"],
                    "height": 250,
                    "width": 300
                }));
                then.status(200)
                    .json_body(json!({"accountId": 1234, "buyerCreativeId": "c1", "openAuctionStatus": "not_checked"}));
            })
            .await;
        let get = server
            .mock_async(|when, then| {
                when.method(GET).path("/adexchangebuyer/v1.4/creatives/1234/c1");
                then.status(200).json_body(json!({
                    "accountId": 1234,
                    "buyerCreativeId": "c1",
                    "dealsStatus": "approved",
                    "servingRestrictions": [{
                        "reason": "DISAPPROVAL",
                        "contexts": [{"contextType": "LOCATION", "geoCriteriaId": [2840]}],
                        "disapprovalReasons": [{"reason": "LENGTH_OF_IMAGE_ANIMATION", "details": ["too long"]}]
                    }]
                }));
            })
            .await;

        let client = create_client(&server);
        let created = client
            .creatives()
            .insert(&Creative {
                html_snippet: Some("<div>ad</div>".to_string()),
                account_id: Some(1234),
                buyer_creative_id: Some("c1".to_string()),
                click_through_url: vec!["https://example.com".to_string()],
                height: Some(250),
                width: Some(300),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(created.open_auction_status.as_deref(), Some("not_checked"));

        let creative = client.creatives().get(1234, "c1").await.unwrap();
        assert_eq!(creative.deals_status.as_deref(), Some("approved"));
        let restriction = &creative.serving_restrictions[0];
        assert_eq!(restriction.contexts[0].geo_criteria_id, vec![2840]);
        assert_eq!(restriction.disapproval_reasons[0].details, vec!["too long".to_string()]);
        insert.assert_async().await;
        get.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_repeats_filters() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/adexchangebuyer/v1.4/creatives")
                    .query_param("accountId", "1")
                    .query_param("accountId", "2")
                    .query_param("buyerCreativeId", "c1")
                    .query_param("dealsStatusFilter", "approved")
                    .query_param("openAuctionStatusFilter", "conditionally_approved")
                    .query_param("maxResults", "10");
                then.status(200).json_body(json!({
                    "kind": "adexchangebuyer#creativesList",
                    "items": [{"buyerCreativeId": "c1"}],
                    "nextPageToken": "next"
                }));
            })
            .await;

        let list = create_client(&server)
            .creatives()
            .list(&ListCreativesRequest {
                account_id: vec![1, 2],
                buyer_creative_id: vec!["c1".to_string()],
                deals_status_filter: Some(CreativeStatusFilter::Approved),
                open_auction_status_filter: Some(CreativeStatusFilter::ConditionallyApproved),
                max_results: Some(10),
                page_token: None,
            })
            .await
            .unwrap();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.next_page_token.as_deref(), Some("next"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_deal_associations() {
        let server = MockServer::start_async().await;
        let add = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/adexchangebuyer/v1.4/creatives/1234/c1/addDeal/9007199254740993")
                    .header("content-length", "0");
                then.status(204);
            })
            .await;
        let remove = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/adexchangebuyer/v1.4/creatives/1234/c1/removeDeal/9007199254740993")
                    .header("content-length", "0");
                then.status(204);
            })
            .await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET).path("/adexchangebuyer/v1.4/creatives/1234/c1/listDeals");
                then.status(200).json_body(json!({
                    "kind": "adexchangebuyer#creativeDealIds",
                    "dealStatuses": [{"dealId": "9007199254740993", "arcStatus": "APPROVED", "webPropertyId": 7}]
                }));
            })
            .await;

        let client = create_client(&server);
        let req = CreativeDealRequest {
            account_id: 1234,
            buyer_creative_id: "c1".to_string(),
            deal_id: 9007199254740993,
        };
        client.creatives().add_deal(&req).await.unwrap();
        let ids = client.creatives().list_deals(1234, "c1").await.unwrap();
        assert_eq!(ids.deal_statuses[0].deal_id, Some(9007199254740993));
        client.creatives().remove_deal(&req).await.unwrap();
        add.assert_async().await;
        list.assert_async().await;
        remove.assert_async().await;
    }
}
