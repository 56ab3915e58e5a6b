use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::workloads::PartnerPermissions;

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MutatePartnerPermissionsRequest {
    /// Required. The `name` field is used to identify the workload.
    /// Format: organizations/{org_id}/locations/{location_id}/workloads/{workload_id}
    #[serde(skip_serializing)]
    pub name: String,
    /// Required. The partner permissions to be updated.
    pub partner_permissions: Option<PartnerPermissions>,
    /// Required. The list of fields to be updated. E.g. update_mask { paths: "partner_permissions.data_logs_viewer"}
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        with = "google_cloud_gax::conversion::field_mask"
    )]
    pub update_mask: Vec<String>,
    /// Optional. The etag of the workload.
    /// If this is provided, it must match the server's etag.
    pub etag: Option<String>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &MutatePartnerPermissionsRequest) -> RequestBuilder {
    let url = format!("{}/{}:mutatePartnerPermissions", base_url, req.name);
    client.patch(url).json(req)
}
