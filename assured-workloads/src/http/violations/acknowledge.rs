use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

/// Acknowledgement type for Violation
#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AcknowledgeType {
    /// Acknowledge only the specific violation.
    SingleViolation,
    /// Acknowledge specified orgPolicy violation and also associated resource violations.
    ExistingChildResourceViolations,
    /// Acknowledge type unspecified.
    #[default]
    #[serde(other)]
    AcknowledgeTypeUnspecified,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AcknowledgeViolationRequest {
    /// Required. The resource name of the Violation to acknowledge.
    /// Format: organizations/{organization}/locations/{location}/workloads/{workload}/violations/{violation}
    #[serde(skip_serializing)]
    pub name: String,
    /// Required. Business justification explaining the need for violation acknowledgement
    pub comment: String,
    /// Optional. This field is deprecated and will be removed in future version of the API.
    /// Name of the OrgPolicy which was modified with non-compliant change and resulted in this violation.
    pub non_compliant_org_policy: Option<String>,
    /// Optional. Acknowledge type of specified violation.
    pub acknowledge_type: Option<AcknowledgeType>,
}

/// Response for violation acknowledgement
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub struct AcknowledgeViolationResponse {}

pub(crate) fn build(base_url: &str, client: &Client, req: &AcknowledgeViolationRequest) -> RequestBuilder {
    let url = format!("{}/{}:acknowledge", base_url, req.name);
    client.post(url).json(req)
}
