use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::clusters::ScreenshotCluster;
use crate::http::execution_url;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListScreenshotClustersResponse {
    /// The set of clusters associated with an execution. Always set
    #[serde(default)]
    pub clusters: Vec<ScreenshotCluster>,
}

pub(crate) fn build(
    base_url: &str,
    client: &Client,
    project_id: &str,
    history_id: &str,
    execution_id: &str,
) -> RequestBuilder {
    let url = format!("{}/clusters", execution_url(base_url, project_id, history_id, execution_id));
    client.get(url)
}
