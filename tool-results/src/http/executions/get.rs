use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::execution_url;

pub(crate) fn build(
    base_url: &str,
    client: &Client,
    project_id: &str,
    history_id: &str,
    execution_id: &str,
) -> RequestBuilder {
    client.get(execution_url(base_url, project_id, history_id, execution_id))
}
