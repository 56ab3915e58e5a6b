use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::pretargeting_config::{account_url, PretargetingConfigRequest};

pub(crate) fn build(base_url: &str, client: &Client, req: &PretargetingConfigRequest) -> RequestBuilder {
    client.post(account_url(base_url, req.account_id)).json(&req.config)
}
