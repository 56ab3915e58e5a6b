use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::workloads::Workload;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchWorkloadRequest {
    /// Optional. The resource name of the workload.
    /// Format: `organizations/{organization}/locations/{location}/workloads/{workload}`
    #[serde(skip_serializing)]
    pub name: String,
    /// Required. The list of fields to be updated.
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        with = "google_cloud_gax::conversion::field_mask"
    )]
    pub update_mask: Vec<String>,
    /// Required. The workload to update. The workload's `name` field is used to identify the workload to be updated.
    #[serde(skip_serializing)]
    pub workload: Workload,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &PatchWorkloadRequest) -> RequestBuilder {
    let url = format!("{}/{}", base_url, req.name);
    client.patch(url).query(req).json(&req.workload)
}
