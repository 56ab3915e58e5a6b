use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::history_url;

pub(crate) fn build(base_url: &str, client: &Client, project_id: &str, history_id: &str) -> RequestBuilder {
    client.get(history_url(base_url, project_id, history_id))
}
