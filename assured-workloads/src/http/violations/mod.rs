use time::OffsetDateTime;

pub mod acknowledge;
pub mod get;
pub mod list;

/// Workload monitoring Violation.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Output only. Immutable. Name of the Violation.
    /// Format: organizations/{organization}/locations/{location}/workloads/{workload_id}/violations/{violations_id}
    pub name: Option<String>,
    /// Output only. Description for the Violation. e.g. OrgPolicy gcp.resourceLocations has non compliant value.
    pub description: Option<String>,
    /// Output only. Time of the event which triggered the Violation.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub begin_time: Option<OffsetDateTime>,
    /// Output only. The last time when the Violation record was updated.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub update_time: Option<OffsetDateTime>,
    /// Output only. Time of the event which fixed the Violation.
    /// If the violation is ACTIVE this will be empty.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub resolve_time: Option<OffsetDateTime>,
    /// Output only. Category under which this violation is mapped. e.g. Location, Service Usage, Access, Encryption, etc.
    pub category: Option<String>,
    /// Output only. State of the violation
    pub state: Option<State>,
    /// Output only. Immutable. The org-policy-constraint that was incorrectly changed, which resulted in this violation.
    pub org_policy_constraint: Option<String>,
    /// Output only. Immutable. Audit Log Link for violated resource
    /// Format: https://console.cloud.google.com/logs/query;query={logName}{protoPayload.resourceName}{timeRange}{folder}
    pub audit_log_link: Option<String>,
    /// Output only. Immutable. Name of the OrgPolicy which was modified with non-compliant change and resulted this violation.
    /// Format: projects/{project_number}/policies/{constraint_name} folders/{folder_id}/policies/{constraint_name} organizations/{organization_id}/policies/{constraint_name}
    pub non_compliant_org_policy: Option<String>,
    /// Output only. Compliance violation remediation
    pub remediation: Option<Remediation>,
    /// Output only. A boolean that indicates if the violation is acknowledged
    pub acknowledged: Option<bool>,
    /// Optional. Timestamp when this violation was acknowledged first.
    /// Check exception_contexts to find the last time the violation was acknowledged when there are more than one violations.
    /// This field will be absent when acknowledged field is marked as false.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub acknowledgement_time: Option<OffsetDateTime>,
    /// Output only. Immutable. Audit Log link to find business justification provided for violation exception.
    pub exception_audit_log_link: Option<String>,
    /// Output only. List of all the exception detail added for the violation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exception_contexts: Vec<ExceptionContext>,
    /// Output only. Type of the violation
    pub violation_type: Option<ViolationType>,
    /// Optional. Output only. Violation Id of the org-policy violation due to which the resource violation is caused.
    /// Empty for org-policy violations.
    pub associated_org_policy_violation_id: Option<String>,
    /// Optional. Output only. Parent project number where resource is present. Empty for org-policy violations.
    pub parent_project_number: Option<String>,
    /// Optional. Output only. Name of the resource like //storage.googleapis.com/myprojectxyz-testbucket.
    /// Empty for org-policy violations.
    pub resource_name: Option<String>,
    /// Optional. Output only. Type of the resource like compute.googleapis.com/Disk, etc.
    /// Empty for org-policy violations.
    pub resource_type: Option<String>,
}

/// Violation State Values
#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum State {
    /// Violation is resolved.
    Resolved,
    /// Violation is Unresolved
    Unresolved,
    /// Violation is Exception
    Exception,
    /// Unspecified state.
    #[default]
    #[serde(other)]
    StateUnspecified,
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationType {
    /// Org Policy Violation.
    OrgPolicy,
    /// Resource Violation.
    Resource,
    /// Unspecified type.
    #[default]
    #[serde(other)]
    ViolationTypeUnspecified,
}

/// Represents remediation guidance to resolve compliance violation for AssuredWorkload
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Remediation {
    /// Required. Remediation instructions to resolve violations
    #[serde(default)]
    pub instructions: Instructions,
    /// Values that can resolve the violation For example: for list org policy violations, this will either be the list of allowed or denied values
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compliant_values: Vec<String>,
    /// Output only. Reemediation type based on the type of org policy values violated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation_type: Option<RemediationType>,
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemediationType {
    /// Remediation type for boolean org policy
    RemediationBooleanOrgPolicyViolation,
    /// Remediation type for list org policy which have allowed values in the monitoring rule
    RemediationListAllowedValuesOrgPolicyViolation,
    /// Remediation type for list org policy which have denied values in the monitoring rule
    RemediationListDeniedValuesOrgPolicyViolation,
    /// Remediation type for gcp.restrictCmekCryptoKeyProjects
    RemediationRestrictCmekCryptoKeyProjectsOrgPolicyViolation,
    /// Remediation type for resource violation.
    RemediationResourceViolation,
    /// Remediation type for resource violation due to gcp.restrictNonCmekServices
    RemediationResourceViolationNonCmekServices,
    /// Unspecified remediation type
    #[default]
    #[serde(other)]
    RemediationTypeUnspecified,
}

/// Instructions to remediate violation
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Instructions {
    /// Remediation instructions to resolve violation via gcloud cli
    pub gcloud_instructions: Option<Gcloud>,
    /// Remediation instructions to resolve violation via cloud console
    pub console_instructions: Option<Console>,
}

/// Remediation instructions to resolve violation via gcloud cli
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Gcloud {
    /// Gcloud command to resolve violation
    #[serde(default)]
    pub gcloud_commands: Vec<String>,
    /// Steps to resolve violation via gcloud cli
    #[serde(default)]
    pub steps: Vec<String>,
    /// Additional urls for more information about steps
    #[serde(default)]
    pub additional_links: Vec<String>,
}

/// Remediation instructions to resolve violation via cloud console
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Console {
    /// Link to console page where violations can be resolved
    #[serde(default)]
    pub console_uris: Vec<String>,
    /// Steps to resolve violation via cloud console
    #[serde(default)]
    pub steps: Vec<String>,
    /// Additional urls for more information about steps
    #[serde(default)]
    pub additional_links: Vec<String>,
}

/// Violation exception detail.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionContext {
    /// Timestamp when the violation was acknowledged.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub acknowledgement_time: Option<OffsetDateTime>,
    /// Name of the user (or service account) who acknowledged the violation.
    pub user_name: Option<String>,
    /// Business justification provided towards the acknowledgement of the violation.
    pub comment: Option<String>,
}
