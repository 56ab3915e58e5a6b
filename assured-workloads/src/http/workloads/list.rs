use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::workloads::Workload;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListWorkloadsRequest {
    /// Required. Parent Resource to list workloads from.
    /// Must be of the form `organizations/{org_id}/locations/{location}`.
    #[serde(skip_serializing)]
    pub parent: String,
    /// A custom filter for filtering by properties of a workload.
    /// At this time, only filtering by labels is supported.
    pub filter: Option<String>,
    /// Page size.
    pub page_size: Option<i32>,
    /// Page token returned from previous request.
    /// Page token contains context from previous request.
    /// Page token needs to be passed in the second and following requests.
    pub page_token: Option<String>,
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListWorkloadsResponse {
    /// List of Workloads under a given parent.
    #[serde(default)]
    pub workloads: Vec<Workload>,
    /// The next page token. Return empty if reached the last page.
    pub next_page_token: Option<String>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &ListWorkloadsRequest) -> RequestBuilder {
    let url = format!("{}/{}/workloads", base_url, req.parent);
    client.get(url).query(req)
}
