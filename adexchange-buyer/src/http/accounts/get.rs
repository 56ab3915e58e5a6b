use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

pub(crate) fn build(base_url: &str, client: &Client, id: i32) -> RequestBuilder {
    let url = format!("{base_url}/accounts/{id}");
    client.get(url)
}
