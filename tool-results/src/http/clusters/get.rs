use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use google_cloud_gax::Escape;

use crate::http::execution_url;

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct GetClusterRequest {
    pub project_id: String,
    pub history_id: String,
    pub execution_id: String,
    pub cluster_id: String,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &GetClusterRequest) -> RequestBuilder {
    let url = format!(
        "{}/clusters/{}",
        execution_url(base_url, &req.project_id, &req.history_id, &req.execution_id),
        req.cluster_id.escape()
    );
    client.get(url)
}
