use google_cloud_gax::Escape;
use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

pub(crate) fn build(base_url: &str, client: &Client, proposal_id: &str) -> RequestBuilder {
    let url = format!("{}/proposals/{}", base_url, proposal_id.escape());
    client.get(url)
}
