use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::cases::Case;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchCaseRequest {
    /// The resource name for the case.
    #[serde(skip_serializing)]
    pub name: String,
    /// A list of attributes of the case that should be updated.
    /// Supported values are `priority`, `display_name`, and `subscriber_email_addresses`.
    /// If no fields are specified, all supported fields are updated.
    /// Be careful - if you do not provide a field mask, then you might accidentally clear some fields.
    /// For example, if you leave the field mask empty and do not provide a value for `subscriber_email_addresses`, then `subscriber_email_addresses` is updated to empty.
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        with = "google_cloud_gax::conversion::field_mask"
    )]
    pub update_mask: Vec<String>,
    /// The case to update.
    #[serde(skip_serializing)]
    pub case: Case,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &PatchCaseRequest) -> RequestBuilder {
    let url = format!("{}/{}", base_url, req.name);
    client.patch(url).query(req).json(&req.case)
}
