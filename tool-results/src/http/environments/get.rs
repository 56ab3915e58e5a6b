use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use google_cloud_gax::Escape;

use crate::http::execution_url;

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct GetEnvironmentRequest {
    pub project_id: String,
    pub history_id: String,
    pub execution_id: String,
    pub environment_id: String,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &GetEnvironmentRequest) -> RequestBuilder {
    let url = format!(
        "{}/environments/{}",
        execution_url(base_url, &req.project_id, &req.history_id, &req.execution_id),
        req.environment_id.escape()
    );
    client.get(url)
}
