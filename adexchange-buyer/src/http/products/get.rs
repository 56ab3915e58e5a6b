use google_cloud_gax::Escape;
use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

pub(crate) fn build(base_url: &str, client: &Client, product_id: &str) -> RequestBuilder {
    let url = format!("{}/products/{}", base_url, product_id.escape());
    client.get(url)
}
