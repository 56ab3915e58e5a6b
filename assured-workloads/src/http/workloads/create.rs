use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::workloads::Workload;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkloadRequest {
    /// Required. The resource name of the new Workload's parent.
    /// Must be of the form `organizations/{org_id}/locations/{location_id}`.
    #[serde(skip_serializing)]
    pub parent: String,
    /// Optional. A identifier associated with the workload and underlying projects which allows for the break down of billing costs for a workload.
    /// The value provided for the identifier will add a label to the workload and contained projects with the identifier as the value.
    pub external_id: Option<String>,
    /// Required. Assured Workload to create
    #[serde(skip_serializing)]
    pub workload: Workload,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &CreateWorkloadRequest) -> RequestBuilder {
    let url = format!("{}/{}/workloads", base_url, req.parent);
    client.post(url).query(req).json(&req.workload)
}
