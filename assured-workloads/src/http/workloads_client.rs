use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;
use google_cloud_longrunning::longrunning::Operation;
use google_cloud_longrunning::model::Operation as InternalOperation;
use google_cloud_longrunning::operations_client::OperationsClient;

use crate::http::workloads;
use crate::http::workloads::analyze_workload_move::{AnalyzeWorkloadMoveRequest, AnalyzeWorkloadMoveResponse};
use crate::http::workloads::create::CreateWorkloadRequest;
use crate::http::workloads::delete::DeleteWorkloadRequest;
use crate::http::workloads::enable_resource_monitoring::EnableResourceMonitoringResponse;
use crate::http::workloads::list::{ListWorkloadsRequest, ListWorkloadsResponse};
use crate::http::workloads::mutate_partner_permissions::MutatePartnerPermissionsRequest;
use crate::http::workloads::patch::PatchWorkloadRequest;
use crate::http::workloads::restrict_allowed_resources::{
    RestrictAllowedResourcesRequest, RestrictAllowedResourcesResponse,
};
use crate::http::workloads::Workload;

#[derive(Clone, Debug)]
pub struct WorkloadsClient {
    inner: Arc<HttpClient>,
}

impl WorkloadsClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Creates Assured Workload.
    /// The returned operation resolves to the created [`Workload`].
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create(&self, req: &CreateWorkloadRequest) -> Result<Operation<Workload>, Error> {
        let builder = workloads::create::build(self.inner.endpoint(), self.inner.http(), req);
        let operation: InternalOperation = self.inner.send(builder).await?;
        Ok(Operation::new(OperationsClient::new(self.inner.clone()), operation))
    }

    /// Deletes the workload. Make sure that workload's direct children are already in a deleted state,
    /// otherwise the request will fail with a FAILED_PRECONDITION error.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn delete(&self, req: &DeleteWorkloadRequest) -> Result<(), Error> {
        let builder = workloads::delete::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send_get_empty(builder).await
    }

    /// Gets Assured Workload associated with a CRM Node
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(&self, name: &str) -> Result<Workload, Error> {
        let builder = workloads::get::build(self.inner.endpoint(), self.inner.http(), name);
        self.inner.send(builder).await
    }

    /// Lists Assured Workloads under a CRM Node.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, req: &ListWorkloadsRequest) -> Result<ListWorkloadsResponse, Error> {
        let builder = workloads::list::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Updates an existing workload. Currently allows updating of workload display_name and labels.
    /// For force updates don't set etag field in the Workload. Only one update operation per workload can be in progress.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn patch(&self, req: &PatchWorkloadRequest) -> Result<Workload, Error> {
        let builder = workloads::patch::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Restrict the list of resources allowed in the Workload environment.
    /// The current list of allowed products can be found at https://cloud.google.com/assured-workloads/docs/supported-products
    /// In addition to assuredworkloads.workload.update permission, the user should also have orgpolicy.policy.set permission on the folder resource to use this functionality.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn restrict_allowed_resources(
        &self,
        req: &RestrictAllowedResourcesRequest,
    ) -> Result<RestrictAllowedResourcesResponse, Error> {
        let builder = workloads::restrict_allowed_resources::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Update the permissions settings for an existing partner workload.
    /// For force updates don't set etag field in the Workload. Only one update operation per workload can be in progress.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn mutate_partner_permissions(&self, req: &MutatePartnerPermissionsRequest) -> Result<Workload, Error> {
        let builder = workloads::mutate_partner_permissions::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Analyzes a hypothetical move of a source resource to a target workload to surface compliance risks.
    /// The analysis is best effort and is not guaranteed to be exhaustive.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn analyze_workload_move(
        &self,
        req: &AnalyzeWorkloadMoveRequest,
    ) -> Result<AnalyzeWorkloadMoveResponse, Error> {
        let builder = workloads::analyze_workload_move::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Enable resource violation monitoring for a workload.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn enable_resource_monitoring(&self, name: &str) -> Result<EnableResourceMonitoringResponse, Error> {
        let builder = workloads::enable_resource_monitoring::build(self.inner.endpoint(), self.inner.http(), name);
        self.inner.send(builder).await
    }
}

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use httpmock::Method::PATCH;
    use serde_json::json;

    use google_cloud_gax::status::Code;

    use crate::http::test::create_client;
    use crate::http::workloads::analyze_workload_move::AnalyzeWorkloadMoveRequest;
    use crate::http::workloads::create::CreateWorkloadRequest;
    use crate::http::workloads::delete::DeleteWorkloadRequest;
    use crate::http::workloads::list::ListWorkloadsRequest;
    use crate::http::workloads::mutate_partner_permissions::MutatePartnerPermissionsRequest;
    use crate::http::workloads::patch::PatchWorkloadRequest;
    use crate::http::workloads::restrict_allowed_resources::{RestrictAllowedResourcesRequest, RestrictionType};
    use crate::http::workloads::{ComplianceRegime, CreateWorkloadOperationMetadata, PartnerPermissions, Workload};

    const PARENT: &str = "organizations/123/locations/us-central1";
    const NAME: &str = "organizations/123/locations/us-central1/workloads/w1";

    #[tokio::test]
    async fn test_create() {
        let server = MockServer::start_async().await;
        let create = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(format!("/v1/{PARENT}/workloads"))
                    .query_param("externalId", "billing-1")
                    .json_body(json!({
                        "displayName": "workload",
                        "complianceRegime": "FEDRAMP_MODERATE",
                        "billingAccount": "billingAccounts/000000-000000-000000"
                    }));
                then.status(200).json_body(json!({
                    "name": "organizations/123/locations/us-central1/operations/op1",
                    "metadata": {
                        "@type": "type.googleapis.com/google.cloud.assuredworkloads.v1.CreateWorkloadOperationMetadata",
                        "displayName": "workload",
                        "parent": PARENT,
                        "complianceRegime": "FEDRAMP_MODERATE"
                    }
                }));
            })
            .await;
        let poll = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/organizations/123/locations/us-central1/operations/op1");
                then.status(200).json_body(json!({
                    "name": "organizations/123/locations/us-central1/operations/op1",
                    "done": true,
                    "response": {
                        "@type": "type.googleapis.com/google.cloud.assuredworkloads.v1.Workload",
                        "name": NAME,
                        "displayName": "workload",
                        "complianceRegime": "FEDRAMP_MODERATE",
                        "resources": [{"resourceId": "1234567890123", "resourceType": "CONSUMER_FOLDER"}]
                    }
                }));
            })
            .await;

        let client = create_client(&server);
        let mut operation = client
            .workloads()
            .create(&CreateWorkloadRequest {
                parent: PARENT.to_string(),
                external_id: Some("billing-1".to_string()),
                workload: Workload {
                    display_name: "workload".to_string(),
                    compliance_regime: Some(ComplianceRegime::FedrampModerate),
                    billing_account: Some("billingAccounts/000000-000000-000000".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        create.assert_async().await;
        assert!(!operation.done());
        let metadata = operation.metadata::<CreateWorkloadOperationMetadata>().unwrap().unwrap();
        assert_eq!(metadata.parent.as_deref(), Some(PARENT));

        let workload = operation.poll().await.unwrap().unwrap();
        poll.assert_async().await;
        assert_eq!(workload.name.as_deref(), Some(NAME));
        assert_eq!(workload.resources[0].resource_id, Some(1234567890123));
    }

    #[tokio::test]
    async fn test_get_list_delete() {
        let server = MockServer::start_async().await;
        let get = server
            .mock_async(|when, then| {
                when.method(GET).path(format!("/v1/{NAME}"));
                then.status(200).json_body(json!({
                    "name": NAME,
                    "displayName": "workload",
                    "createTime": "2023-05-01T10:00:00.123Z",
                    "etag": "etag-1",
                    "labels": {"env": "prod"},
                    "complianceStatus": {"activeViolationCount": 2}
                }));
            })
            .await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(format!("/v1/{PARENT}/workloads"))
                    .query_param("filter", "labels.env=prod")
                    .query_param("pageSize", "10")
                    .query_param("pageToken", "token");
                then.status(200)
                    .json_body(json!({"workloads": [{"name": NAME, "displayName": "workload"}]}));
            })
            .await;
        let delete = server
            .mock_async(|when, then| {
                when.method(DELETE).path(format!("/v1/{NAME}")).query_param("etag", "etag-1");
                then.status(200).json_body(json!({}));
            })
            .await;

        let client = create_client(&server);
        let workload = client.workloads().get(NAME).await.unwrap();
        assert_eq!(workload.labels.get("env").map(String::as_str), Some("prod"));
        assert_eq!(workload.compliance_status.unwrap().active_violation_count, Some(2));
        assert_eq!(workload.create_time.unwrap().millisecond(), 123);

        let response = client
            .workloads()
            .list(&ListWorkloadsRequest {
                parent: PARENT.to_string(),
                filter: Some("labels.env=prod".to_string()),
                page_size: Some(10),
                page_token: Some("token".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(response.workloads.len(), 1);
        assert_eq!(response.next_page_token, None);

        client
            .workloads()
            .delete(&DeleteWorkloadRequest {
                name: NAME.to_string(),
                etag: workload.etag,
            })
            .await
            .unwrap();
        get.assert_async().await;
        list.assert_async().await;
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn test_patch_and_mutate_partner_permissions() {
        let server = MockServer::start_async().await;
        let patch = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path(format!("/v1/{NAME}"))
                    .query_param("updateMask", "displayName,labels")
                    .json_body(json!({"name": NAME, "displayName": "renamed"}));
                then.status(200).json_body(json!({"name": NAME, "displayName": "renamed"}));
            })
            .await;
        let mutate = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path(format!("/v1/{NAME}:mutatePartnerPermissions"))
                    .json_body(json!({
                        "partnerPermissions": {"dataLogsViewer": true},
                        "updateMask": "partnerPermissions.dataLogsViewer",
                        "etag": "etag-2"
                    }));
                then.status(200).json_body(json!({
                    "name": NAME,
                    "displayName": "renamed",
                    "partnerPermissions": {"dataLogsViewer": true}
                }));
            })
            .await;

        let client = create_client(&server);
        let workload = client
            .workloads()
            .patch(&PatchWorkloadRequest {
                name: NAME.to_string(),
                update_mask: vec!["displayName".to_string(), "labels".to_string()],
                workload: Workload {
                    name: Some(NAME.to_string()),
                    display_name: "renamed".to_string(),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(workload.display_name, "renamed");

        let workload = client
            .workloads()
            .mutate_partner_permissions(&MutatePartnerPermissionsRequest {
                name: NAME.to_string(),
                partner_permissions: Some(PartnerPermissions {
                    data_logs_viewer: Some(true),
                    ..Default::default()
                }),
                update_mask: vec!["partnerPermissions.dataLogsViewer".to_string()],
                etag: Some("etag-2".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(workload.partner_permissions.unwrap().data_logs_viewer, Some(true));
        patch.assert_async().await;
        mutate.assert_async().await;
    }

    #[tokio::test]
    async fn test_restrict_and_enable_monitoring() {
        let server = MockServer::start_async().await;
        let restrict = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(format!("/v1/{NAME}:restrictAllowedResources"))
                    .json_body(json!({"restrictionType": "ALLOW_COMPLIANT_RESOURCES"}));
                then.status(200).json_body(json!({}));
            })
            .await;
        let monitoring = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(format!("/v1/{NAME}:enableResourceMonitoring"))
                    .header("content-length", "0");
                then.status(200).json_body(json!({}));
            })
            .await;

        let client = create_client(&server);
        client
            .workloads()
            .restrict_allowed_resources(&RestrictAllowedResourcesRequest {
                name: NAME.to_string(),
                restriction_type: RestrictionType::AllowCompliantResources,
            })
            .await
            .unwrap();
        client.workloads().enable_resource_monitoring(NAME).await.unwrap();
        restrict.assert_async().await;
        monitoring.assert_async().await;
    }

    #[tokio::test]
    async fn test_analyze_workload_move() {
        let server = MockServer::start_async().await;
        let analyze = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(format!("/v1/{NAME}:analyzeWorkloadMove"))
                    .query_param("project", "projects/source")
                    .query_param("assetTypes", "compute.googleapis.com/Instance")
                    .query_param("assetTypes", "storage.googleapis.com/Bucket");
                then.status(200).json_body(json!({
                    "assetMoveAnalyses": [{
                        "asset": "//cloudresourcemanager.googleapis.com/projects/source",
                        "assetType": "cloudresourcemanager.googleapis.com/Project",
                        "analysisGroups": [
                            {"displayName": "Data residency", "analysisResult": {"blockers": [{"detail": "region"}]}},
                            {"displayName": "Org policy", "error": {"code": 7, "message": "denied"}}
                        ]
                    }],
                    "nextPageToken": "next"
                }));
            })
            .await;

        let client = create_client(&server);
        let response = client
            .workloads()
            .analyze_workload_move(&AnalyzeWorkloadMoveRequest {
                target: NAME.to_string(),
                project: Some("projects/source".to_string()),
                asset_types: vec![
                    "compute.googleapis.com/Instance".to_string(),
                    "storage.googleapis.com/Bucket".to_string(),
                ],
                ..Default::default()
            })
            .await
            .unwrap();
        analyze.assert_async().await;
        let groups = &response.asset_move_analyses[0].analysis_groups;
        assert_eq!(groups[0].analysis_result.as_ref().unwrap().blockers[0].detail, "region");
        assert_eq!(groups[1].error.as_ref().unwrap().code(), Code::PermissionDenied);
        assert_eq!(response.next_page_token.as_deref(), Some("next"));
    }

    #[tokio::test]
    async fn test_error_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(format!("/v1/{NAME}"));
                then.status(403).json_body(json!({
                    "error": {
                        "code": 403,
                        "message": "Permission 'assuredworkloads.workload.get' denied",
                        "status": "PERMISSION_DENIED"
                    }
                }));
            })
            .await;
        let client = create_client(&server);
        let err = client.workloads().get(NAME).await.unwrap_err();
        assert_eq!(err.status(), Some(Code::PermissionDenied));
    }
}
