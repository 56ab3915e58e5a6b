use std::collections::HashMap;

use time::OffsetDateTime;

pub mod analyze_workload_move;
pub mod create;
pub mod delete;
pub mod enable_resource_monitoring;
pub mod get;
pub mod list;
pub mod mutate_partner_permissions;
pub mod patch;
pub mod restrict_allowed_resources;

/// A Workload object for managing highly regulated workloads of cloud customers.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Workload {
    /// Optional. The resource name of the workload.
    /// Format: `organizations/{organization}/locations/{location}/workloads/{workload}`
    /// Read-only.
    pub name: Option<String>,
    /// Required. The user-assigned display name of the Workload.
    /// When present it must be between 4 to 30 characters.
    #[serde(default)]
    pub display_name: String,
    /// Output only. The resources associated with this workload.
    /// These resources will be created when creating the workload.
    /// If any of the projects already exist, the workload creation will fail.
    /// Always read only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceInfo>,
    /// Required. Immutable. Compliance Regime associated with this workload.
    pub compliance_regime: Option<ComplianceRegime>,
    /// Output only. Immutable. The Workload creation timestamp.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub create_time: Option<OffsetDateTime>,
    /// Optional. The billing account used for the resources which are direct children of workload.
    /// This billing account is initially associated with the resources created as part of Workload creation.
    /// After the initial creation of these resources, the customer can change the assigned billing account.
    /// The resource name has the form `billingAccounts/{billing_account_id}`.
    pub billing_account: Option<String>,
    /// Optional. ETag of the workload, it is calculated on the basis of the Workload contents.
    /// It will be used in Update & Delete operations.
    pub etag: Option<String>,
    /// Optional. Labels applied to the workload.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
    /// Input only. The parent resource for the resources managed by this Assured Workload.
    /// May be either empty or a folder resource which is a child of the Workload parent.
    pub provisioned_resources_parent: Option<String>,
    /// Input only. Settings used to create a CMEK crypto key.
    /// When set, a project with a KMS CMEK key is provisioned.
    /// This field is deprecated as of Feb 28, 2022. In order to create a Keyring,
    /// callers should specify, ENCRYPTION_KEYS_PROJECT or KEYRING in ResourceSettings.resource_type field.
    pub kms_settings: Option<KmsSettings>,
    /// Input only. Resource properties that are used to customize workload resources.
    /// These properties (such as custom project id) will be used to create workload resources if possible.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_settings: Vec<ResourceSettings>,
    /// Output only. Represents the KAJ enrollment state of the given workload.
    pub kaj_enrollment_state: Option<KajEnrollmentState>,
    /// Optional. Indicates the sovereignty status of the given workload.
    /// Currently meant to be used by Europe/Canada customers.
    pub enable_sovereign_controls: Option<bool>,
    /// Output only. Represents the SAA enrollment response of the given workload.
    /// SAA enrollment response is queried during GetWorkload call.
    /// In failure cases, user friendly error message is shown in SAA details page.
    pub saa_enrollment_response: Option<SaaEnrollmentResponse>,
    /// Output only. Count of active Violations in the Workload.
    pub compliance_status: Option<ComplianceStatus>,
    /// Output only. Urls for services which are compliant for this Assured Workload,
    /// but which are currently disallowed by the ResourceUsageRestriction org policy.
    /// Invoke RestrictAllowedResources endpoint to allow your project developers to use these services in their environment.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compliant_but_disallowed_services: Vec<String>,
    /// Optional. Partner regime associated with this workload.
    pub partner: Option<Partner>,
    /// Optional. Permissions granted to the AW Partner SA account for the customer workload.
    pub partner_permissions: Option<PartnerPermissions>,
    /// Output only. Represents the Ekm Provisioning State of the given workload.
    pub ekm_provisioning_response: Option<EkmProvisioningResponse>,
    /// Optional. Options to be set for the given created workload.
    pub workload_options: Option<WorkloadOptions>,
    /// Output only. Indicates whether resource monitoring is enabled for workload or not.
    /// It is true when Resource feed is subscribed to AWM topic and AWM Service Agent Role is binded to AW Service Account for resource Assured workload.
    pub resource_monitoring_enabled: Option<bool>,
    /// Optional. Indicates whether the e-mail notification for a violation is enabled for a workload.
    /// This value will be by default True, and if not present will be considered as true.
    /// This should only be updated via updateWorkload call.
    /// Any Changes to this field during the createWorkload call will not be honored.
    /// This will always be true while creating the workload.
    pub violation_notifications_enabled: Option<bool>,
    /// Optional. Billing account necessary for purchasing services from Sovereign Partners.
    /// This field is required for creating SIA/PSN/CNTXT partner workloads.
    /// The caller should have 'billing.resourceAssociations.create' IAM permission on this billing-account.
    /// The format of this string is billingAccounts/AAAAAA-BBBBBB-CCCCCC
    pub partner_services_billing_account: Option<String>,
}

/// Supported Compliance Regimes.
#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceRegime {
    /// Information protection as per DoD IL4 requirements.
    Il4,
    /// Criminal Justice Information Services (CJIS) Security policies.
    Cjis,
    /// FedRAMP High data protection controls
    FedrampHigh,
    /// FedRAMP Moderate data protection controls
    FedrampModerate,
    /// Assured Workloads For US Regions data protection controls
    UsRegionalAccess,
    /// Health Insurance Portability and Accountability Act controls
    Hipaa,
    /// Health Information Trust Alliance controls
    Hitrust,
    /// Assured Workloads For EU Regions and Support controls
    EuRegionsAndSupport,
    /// Assured Workloads For Canada Regions and Support controls
    CaRegionsAndSupport,
    /// International Traffic in Arms Regulations
    Itar,
    /// Assured Workloads for Australia Regions and Support controls
    AuRegionsAndUsSupport,
    /// Assured Workloads for Partners;
    AssuredWorkloadsForPartners,
    /// Assured Workloads for Israel Regions
    IsrRegions,
    /// Assured Workloads for Israel Regions
    IsrRegionsAndSupport,
    /// Assured Workloads for Canada Protected B regime
    CaProtectedB,
    /// Information protection as per DoD IL5 requirements.
    Il5,
    /// Information protection as per DoD IL2 requirements.
    Il2,
    /// Assured Workloads for Japan Regions
    JpRegionsAndSupport,
    /// Assured Workloads Sovereign Controls KSA
    KsaRegionsAndSupportWithSovereigntyControls,
    /// Assured Workloads for Regional Controls
    RegionalControls,
    /// Healthcare and Life Science Controls
    HealthcareAndLifeSciencesControls,
    /// Healthcare and Life Science Controls with US Support
    HealthcareAndLifeSciencesControlsUsSupport,
    /// Internal Revenue Service 1075 controls
    #[serde(rename = "IRS_1075")]
    Irs1075,
    /// Unknown compliance regime.
    #[default]
    #[serde(other)]
    ComplianceRegimeUnspecified,
}

/// Represent the resources that are children of this Workload.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResourceInfo {
    /// Resource identifier. For a project this represents project_number.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub resource_id: Option<i64>,
    /// Indicates the type of resource.
    pub resource_type: Option<ResourceType>,
}

/// The type of resource.
#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    /// Consumer project.
    /// AssuredWorkloads Projects are no longer supported. This field will be ignored only in CreateWorkload requests.
    /// ListWorkloads and GetWorkload will continue to provide projects information.
    /// Use CONSUMER_FOLDER instead.
    ConsumerProject,
    /// Consumer Folder.
    ConsumerFolder,
    /// Consumer project containing encryption keys.
    EncryptionKeysProject,
    /// Keyring resource that hosts encryption keys.
    Keyring,
    /// Unknown resource type.
    #[default]
    #[serde(other)]
    ResourceTypeUnspecified,
}

/// Settings specific to the Key Management Service.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct KmsSettings {
    /// Required. Input only. Immutable. The time at which the Key Management Service will automatically create a new version of the crypto key and mark it as the primary.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub next_rotation_time: Option<OffsetDateTime>,
    /// Required. Input only. Immutable. will be advanced by this period when the Key Management Service automatically rotates a key.
    /// Must be at least 24 hours and at most 876,000 hours.
    #[serde(default, with = "google_cloud_gax::conversion::duration::option")]
    pub rotation_period: Option<std::time::Duration>,
}

/// Represent the custom settings for the resources to be created.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSettings {
    /// Resource identifier. For a project this represents project_id.
    /// If the project is already taken, the workload creation will fail.
    /// For KeyRing, this represents the keyring_id.
    /// For a folder, don't set this value as folder_id is assigned by Google.
    pub resource_id: Option<String>,
    /// Indicates the type of resource. This field should be specified to correspond the id to the right resource type (CONSUMER_FOLDER or ENCRYPTION_KEYS_PROJECT)
    pub resource_type: Option<ResourceType>,
    /// User-assigned resource display name. If not empty it will be used to create a resource with the specified name.
    pub display_name: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KajEnrollmentState {
    /// Pending State for KAJ Enrollment.
    KajEnrollmentStatePending,
    /// Complete State for KAJ Enrollment.
    KajEnrollmentStateComplete,
    /// Default State for KAJ Enrollment.
    #[default]
    #[serde(other)]
    KajEnrollmentStateUnspecified,
}

/// Signed Access Approvals (SAA) enrollment response.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SaaEnrollmentResponse {
    /// Indicates SAA enrollment status of a given workload.
    pub setup_status: Option<SetupState>,
    /// Indicates SAA enrollment setup error if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub setup_errors: Vec<SetupError>,
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SetupState {
    /// SAA enrollment pending.
    StatusPending,
    /// SAA enrollment comopleted.
    StatusComplete,
    /// Unspecified.
    #[default]
    #[serde(other)]
    SetupStateUnspecified,
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SetupError {
    /// Invalid states for all customers, to be redirected to AA UI for additional details.
    ErrorInvalidBaseSetup,
    /// Returned when there is not an EKM key configured.
    ErrorMissingExternalSigningKey,
    /// Returned when there are no enrolled services or the customer is enrolled in CAA only for a subset of services.
    ErrorNotAllServicesEnrolled,
    /// Returned when exception was encountered during evaluation of other criteria.
    ErrorSetupCheckFailed,
    /// Unspecified.
    #[default]
    #[serde(other)]
    SetupErrorUnspecified,
}

/// Represents the Compliance Status of this workload
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceStatus {
    /// Number of current orgPolicy violations which are not acknowledged.
    pub active_violation_count: Option<i32>,
    /// Number of current orgPolicy violations which are acknowledged.
    pub acknowledged_violation_count: Option<i32>,
    /// Number of current resource violations which are not acknowledged.
    pub active_resource_violation_count: Option<i32>,
    /// Number of current resource violations which are acknowledged.
    pub acknowledged_resource_violation_count: Option<i32>,
}

/// Supported Assured Workloads Partners.
#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Partner {
    /// Enum representing S3NS (Thales) partner.
    LocalControlsByS3ns,
    /// Enum representing T_SYSTEM (TSI) partner.
    SovereignControlsByTSystems,
    /// Enum representing SIA_MINSAIT (Indra) partner.
    SovereignControlsBySiaMinsait,
    /// Enum representing PSN (TIM) partner.
    SovereignControlsByPsn,
    /// Enum representing CNTXT (Kingdom of Saudi Arabia) partner.
    SovereignControlsByCntxt,
    /// Enum representing CNTXT (Kingdom of Saudi Arabia) partner offering without EKM.
    SovereignControlsByCntxtNoEkm,
    #[default]
    #[serde(other)]
    PartnerUnspecified,
}

/// Permissions granted to the AW Partner SA account for the customer workload
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartnerPermissions {
    /// Allow partner to view data and logs
    pub data_logs_viewer: Option<bool>,
    /// Optional. Allow partner to view violation alerts.
    pub assured_workloads_monitoring: Option<bool>,
    /// Optional. Allow partner to view access approval logs.
    pub access_transparency_logs_support_case_viewer: Option<bool>,
    /// Optional. Allow partner to view support case details for an AXT log
    pub service_access_approver: Option<bool>,
}

/// External key management systems(EKM) Provisioning response
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct EkmProvisioningResponse {
    /// Indicates Ekm enrollment Provisioning of a given workload.
    /// One of `EKM_PROVISIONING_STATE_UNSPECIFIED`, `EKM_PROVISIONING_STATE_PENDING`,
    /// `EKM_PROVISIONING_STATE_FAILED` or `EKM_PROVISIONING_STATE_COMPLETED`.
    pub ekm_provisioning_state: Option<String>,
    /// Indicates Ekm provisioning error if any.
    pub ekm_provisioning_error_domain: Option<String>,
    /// Detailed error message if Ekm provisioning fails
    pub ekm_provisioning_error_mapping: Option<String>,
}

/// Options to be set for the given created workload.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadOptions {
    /// Optional. Specifies type of KAJ Enrollment if provided.
    /// One of `KAJ_ENROLLMENT_TYPE_UNSPECIFIED` or `KEY_ACCESS_TRANSPARENCY_OFF`.
    pub kaj_enrollment_type: Option<String>,
}

/// Operation metadata to give request details of CreateWorkload.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkloadOperationMetadata {
    /// Optional. Time when the operation was created.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub create_time: Option<OffsetDateTime>,
    /// Optional. The display name of the workload.
    pub display_name: Option<String>,
    /// Optional. The parent of the workload.
    pub parent: Option<String>,
    /// Optional. Compliance controls that should be applied to the resources managed by the workload.
    pub compliance_regime: Option<ComplianceRegime>,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use time::macros::datetime;

    use crate::http::workloads::{ComplianceRegime, KmsSettings, Partner, ResourceInfo, ResourceType, Workload};

    #[test]
    fn test_workload_wire_format() {
        let workload = Workload {
            display_name: "regulated".to_string(),
            compliance_regime: Some(ComplianceRegime::Irs1075),
            resources: vec![ResourceInfo {
                resource_id: Some(9_007_199_254_740_993),
                resource_type: Some(ResourceType::ConsumerFolder),
            }],
            kms_settings: Some(KmsSettings {
                next_rotation_time: Some(datetime!(2024-01-02 03:04:05 UTC)),
                rotation_period: Some(Duration::from_secs(86400)),
            }),
            partner: Some(Partner::LocalControlsByS3ns),
            ..Default::default()
        };
        let value = serde_json::to_value(&workload).unwrap();
        assert_eq!(
            value,
            json!({
                "displayName": "regulated",
                "resources": [{"resourceId": "9007199254740993", "resourceType": "CONSUMER_FOLDER"}],
                "complianceRegime": "IRS_1075",
                "kmsSettings": {
                    "nextRotationTime": "2024-01-02T03:04:05Z",
                    "rotationPeriod": "86400s"
                },
                "partner": "LOCAL_CONTROLS_BY_S3NS"
            })
        );
        let decoded: Workload = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, workload);
    }

    #[test]
    fn test_unknown_enum_value() {
        let workload: Workload = serde_json::from_value(json!({
            "displayName": "w",
            "complianceRegime": "NOT_YET_DEFINED",
            "partner": "SOVEREIGN_CONTROLS_BY_NEW_PARTNER",
            "complianceStatus": {"activeViolationCount": 1}
        }))
        .unwrap();
        assert_eq!(workload.display_name, "w");
        assert_eq!(workload.compliance_regime, Some(ComplianceRegime::ComplianceRegimeUnspecified));
        assert_eq!(workload.partner, Some(Partner::PartnerUnspecified));
        assert!(workload.compliance_status.is_some());
    }
}
