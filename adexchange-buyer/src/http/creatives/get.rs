use google_cloud_gax::Escape;
use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

pub(crate) fn build(base_url: &str, client: &Client, account_id: i32, buyer_creative_id: &str) -> RequestBuilder {
    let url = format!("{}/creatives/{}/{}", base_url, account_id, buyer_creative_id.escape());
    client.get(url)
}
