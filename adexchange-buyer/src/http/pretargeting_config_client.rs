use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::pretargeting_config;
use crate::http::pretargeting_config::list::PretargetingConfigList;
use crate::http::pretargeting_config::{PretargetingConfig, PretargetingConfigRequest};

#[derive(Clone, Debug)]
pub struct PretargetingConfigClient {
    inner: Arc<HttpClient>,
}

impl PretargetingConfigClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Deletes an existing pretargeting config.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn delete(&self, account_id: i64, config_id: i64) -> Result<(), Error> {
        let builder =
            pretargeting_config::delete::build(self.inner.endpoint(), self.inner.http(), account_id, config_id);
        self.inner.send_get_empty(builder).await
    }

    /// Gets a specific pretargeting configuration
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(&self, account_id: i64, config_id: i64) -> Result<PretargetingConfig, Error> {
        let builder = pretargeting_config::get::build(self.inner.endpoint(), self.inner.http(), account_id, config_id);
        self.inner.send(builder).await
    }

    /// Inserts a new pretargeting configuration.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn insert(&self, req: &PretargetingConfigRequest) -> Result<PretargetingConfig, Error> {
        let builder = pretargeting_config::insert::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Retrieves a list of the authenticated user's pretargeting configurations.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, account_id: i64) -> Result<PretargetingConfigList, Error> {
        let builder = pretargeting_config::list::build(self.inner.endpoint(), self.inner.http(), account_id);
        self.inner.send(builder).await
    }

    /// Updates an existing pretargeting config. This method supports patch semantics.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn patch(&self, req: &PretargetingConfigRequest) -> Result<PretargetingConfig, Error> {
        let builder = pretargeting_config::patch::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Updates an existing pretargeting config.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn update(&self, req: &PretargetingConfigRequest) -> Result<PretargetingConfig, Error> {
        let builder = pretargeting_config::patch::build_update(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use httpmock::Method::PATCH;
    use serde_json::json;

    use crate::http::pretargeting_config::{
        PretargetingConfig, PretargetingConfigDimension, PretargetingConfigPlacement, PretargetingConfigRequest,
    };
    use crate::http::test::create_client;

    #[tokio::test]
    async fn test_insert_encodes_int64_lists() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/adexchangebuyer/v1.4/pretargetingconfigs/1234")
                    .json_body(json!({
                        "configName": "desktop",
                        "isActive": true,
                        "creativeType": ["PRETARGETING_CREATIVE_TYPE_HTML"],
                        "dimensions": [{"width": "300", "height": "250"}],
                        "geoCriteriaIds": ["2840", "2392"],
                        "excludedPlacements": [{"token": "example.com", "type": "PRETARGETING_PLACEMENT_TYPE_URL"}]
                    }));
                then.status(200).json_body(json!({
                    "configId": "55",
                    "billingId": "9876543210",
                    "configName": "desktop",
                    "geoCriteriaIds": ["2840", "2392"]
                }));
            })
            .await;

        let config = create_client(&server)
            .pretargeting_config()
            .insert(&PretargetingConfigRequest {
                account_id: 1234,
                config_id: 0,
                config: PretargetingConfig {
                    config_name: Some("desktop".to_string()),
                    is_active: Some(true),
                    creative_type: vec!["PRETARGETING_CREATIVE_TYPE_HTML".to_string()],
                    dimensions: vec![PretargetingConfigDimension {
                        width: Some(300),
                        height: Some(250),
                    }],
                    geo_criteria_ids: vec![2840, 2392],
                    excluded_placements: vec![PretargetingConfigPlacement {
                        token: Some("example.com".to_string()),
                        placement_type: Some("PRETARGETING_PLACEMENT_TYPE_URL".to_string()),
                    }],
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(config.config_id, Some(55));
        assert_eq!(config.billing_id, Some(9876543210));
        assert_eq!(config.geo_criteria_ids, vec![2840, 2392]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_list_patch_update_delete() {
        let server = MockServer::start_async().await;
        let get = server
            .mock_async(|when, then| {
                when.method(GET).path("/adexchangebuyer/v1.4/pretargetingconfigs/1234/55");
                then.status(200).json_body(json!({"configId": "55", "userLists": ["100"]}));
            })
            .await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET).path("/adexchangebuyer/v1.4/pretargetingconfigs/1234");
                then.status(200).json_body(json!({"items": [{"configId": "55"}, {"configId": "56"}]}));
            })
            .await;
        let patch = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/adexchangebuyer/v1.4/pretargetingconfigs/1234/55")
                    .json_body(json!({"isActive": false}));
                then.status(200).json_body(json!({"configId": "55", "isActive": false}));
            })
            .await;
        let update = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/adexchangebuyer/v1.4/pretargetingconfigs/1234/55")
                    .json_body(json!({"configName": "desktop", "isActive": true}));
                then.status(200).json_body(json!({"configId": "55", "isActive": true}));
            })
            .await;
        let delete = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/adexchangebuyer/v1.4/pretargetingconfigs/1234/55");
                then.status(204);
            })
            .await;

        let client = create_client(&server).pretargeting_config().clone();
        let config = client.get(1234, 55).await.unwrap();
        assert_eq!(config.user_lists, vec![100]);
        assert_eq!(client.list(1234).await.unwrap().items.len(), 2);

        let patched = client
            .patch(&PretargetingConfigRequest {
                account_id: 1234,
                config_id: 55,
                config: PretargetingConfig {
                    is_active: Some(false),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(patched.is_active, Some(false));
        let updated = client
            .update(&PretargetingConfigRequest {
                account_id: 1234,
                config_id: 55,
                config: PretargetingConfig {
                    config_name: Some("desktop".to_string()),
                    is_active: Some(true),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(updated.is_active, Some(true));
        client.delete(1234, 55).await.unwrap();

        get.assert_async().await;
        list.assert_async().await;
        patch.assert_async().await;
        update.assert_async().await;
        delete.assert_async().await;
    }
}
