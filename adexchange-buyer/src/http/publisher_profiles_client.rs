use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::publisher_profiles;
use crate::http::publisher_profiles::list::GetPublisherProfilesByAccountIdResponse;

#[derive(Clone, Debug)]
pub struct PublisherProfilesClient {
    inner: Arc<HttpClient>,
}

impl PublisherProfilesClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Gets the requested publisher profile(s) by publisher accountId.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, account_id: i32) -> Result<GetPublisherProfilesByAccountIdResponse, Error> {
        let builder = publisher_profiles::list::build(self.inner.endpoint(), self.inner.http(), account_id);
        self.inner.send(builder).await
    }
}

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::http::test::create_client;

    #[tokio::test]
    async fn test_list() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/adexchangebuyer/v1.4/publisher/77/profiles");
                then.status(200).json_body(json!({
                    "profiles": [{
                        "profileId": 3,
                        "name": "news",
                        "isParent": true,
                        "seller": {"accountId": "77"},
                        "publisherProvidedForecast": {"weeklyUniques": "250000"}
                    }]
                }));
            })
            .await;

        let response = create_client(&server).publisher_profiles().list(77).await.unwrap();
        let profile = &response.profiles[0];
        assert_eq!(profile.profile_id, Some(3));
        assert_eq!(profile.is_parent, Some(true));
        assert_eq!(
            profile.publisher_provided_forecast.as_ref().unwrap().weekly_uniques,
            Some(250000)
        );
        mock.assert_async().await;
    }
}
