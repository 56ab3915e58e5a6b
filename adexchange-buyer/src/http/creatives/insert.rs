use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::creatives::Creative;

pub(crate) fn build(base_url: &str, client: &Client, creative: &Creative) -> RequestBuilder {
    let url = format!("{base_url}/creatives");
    client.post(url).json(creative)
}
