use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeleteWorkloadRequest {
    /// Required. The `name` field is used to identify the workload.
    /// Format: organizations/{org_id}/locations/{location_id}/workloads/{workload_id}
    #[serde(skip_serializing)]
    pub name: String,
    /// Optional. The etag of the workload.
    /// If this is provided, it must match the server's etag.
    pub etag: Option<String>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &DeleteWorkloadRequest) -> RequestBuilder {
    let url = format!("{}/{}", base_url, req.name);
    client.delete(url).query(req)
}
