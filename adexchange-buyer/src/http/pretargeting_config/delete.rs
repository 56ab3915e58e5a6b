use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::pretargeting_config::config_url;

pub(crate) fn build(base_url: &str, client: &Client, account_id: i64, config_id: i64) -> RequestBuilder {
    client.delete(config_url(base_url, account_id, config_id))
}
