use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

/// The type of restriction.
#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RestrictionType {
    /// Allow the use all of all gcp products, irrespective of the compliance posture.
    /// This effectively removes gcp.restrictServiceUsage OrgPolicy on the AssuredWorkloads Folder.
    AllowAllGcpResources,
    /// Based on Workload's compliance regime, allowed list changes.
    /// See - https://cloud.google.com/assured-workloads/docs/supported-products for the list of supported resources.
    AllowCompliantResources,
    /// Similar to ALLOW_COMPLIANT_RESOURCES but adds the list of compliant resources to the existing list of compliant resources.
    /// Effective org-policy of the Folder is considered to ensure there is no disruption to the existing customers using the APIs.
    AppendCompliantResources,
    /// Unknown restriction type.
    #[default]
    #[serde(other)]
    RestrictionTypeUnspecified,
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RestrictAllowedResourcesRequest {
    /// Required. The resource name of the Workload.
    /// This is the workloads's relative path in the API, formatted as
    /// "organizations/{organization_id}/locations/{location_id}/workloads/{workload_id}".
    #[serde(skip_serializing)]
    pub name: String,
    /// Required. The type of restriction for using gcp products in the Workload environment.
    pub restriction_type: RestrictionType,
}

/// Response for restricting the list of allowed resources.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub struct RestrictAllowedResourcesResponse {}

pub(crate) fn build(base_url: &str, client: &Client, req: &RestrictAllowedResourcesRequest) -> RequestBuilder {
    let url = format!("{}/{}:restrictAllowedResources", base_url, req.name);
    client.post(url).json(req)
}
