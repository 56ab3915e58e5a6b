use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::project_url;

pub(crate) fn build(base_url: &str, client: &Client, project_id: &str) -> RequestBuilder {
    let url = format!("{}/settings", project_url(base_url, project_id));
    client.get(url)
}
