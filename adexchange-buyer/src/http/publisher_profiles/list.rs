use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::publisher_profiles::PublisherProfile;

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetPublisherProfilesByAccountIdResponse {
    /// Profiles for the requested publisher
    #[serde(default)]
    pub profiles: Vec<PublisherProfile>,
}

pub(crate) fn build(base_url: &str, client: &Client, account_id: i32) -> RequestBuilder {
    let url = format!("{base_url}/publisher/{account_id}/profiles");
    client.get(url)
}
