use google_cloud_gax::Escape;
use reqwest::header::CONTENT_LENGTH;
use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

pub(crate) fn build(base_url: &str, client: &Client, proposal_id: &str) -> RequestBuilder {
    let url = format!("{}/proposals/{}/setupcomplete", base_url, proposal_id.escape());
    client.post(url).header(CONTENT_LENGTH, 0)
}
