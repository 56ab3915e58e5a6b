use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::pretargeting_config::{config_url, PretargetingConfigRequest};

pub(crate) fn build(base_url: &str, client: &Client, req: &PretargetingConfigRequest) -> RequestBuilder {
    client
        .patch(config_url(base_url, req.account_id, req.config_id))
        .json(&req.config)
}

pub(crate) fn build_update(base_url: &str, client: &Client, req: &PretargetingConfigRequest) -> RequestBuilder {
    client
        .put(config_url(base_url, req.account_id, req.config_id))
        .json(&req.config)
}
