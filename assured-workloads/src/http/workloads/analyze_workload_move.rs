use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use google_cloud_longrunning::model::Status;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeWorkloadMoveRequest {
    /// Required. The resource ID of the folder-based destination workload.
    /// This workload is where the source resource will hypothetically be moved to.
    /// Specify the workload's relative resource name, formatted as:
    /// "organizations/{ORGANIZATION_ID}/locations/{LOCATION_ID}/workloads/{WORKLOAD_ID}"
    #[serde(skip_serializing)]
    pub target: String,
    /// Optional. List of asset types to be analyzed, including and under the source resource.
    /// If empty, all assets are analyzed.
    #[serde(skip_serializing)]
    pub asset_types: Vec<String>,
    /// Optional. Page size. If a value is not specified, the default value of 10 is used.
    pub page_size: Option<i32>,
    /// Optional. The page token from the previous response.
    /// It needs to be passed in the second and following requests.
    pub page_token: Option<String>,
    /// The source type is a project. Specify the project's relative resource name, formatted as either a project number or a project ID:
    /// "projects/{PROJECT_NUMBER}" or "projects/{PROJECT_ID}"
    pub project: Option<String>,
}

/// A response that includes the analysis of the hypothetical resource move.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeWorkloadMoveResponse {
    /// List of analysis results for each asset in scope.
    #[serde(default)]
    pub asset_move_analyses: Vec<AssetMoveAnalysis>,
    /// The next page token. Is empty if the last page is reached.
    pub next_page_token: Option<String>,
}

/// Represents move analysis results for an asset.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetMoveAnalysis {
    /// The full resource name of the asset being analyzed.
    #[serde(default)]
    pub asset: String,
    /// Type of the asset being analyzed.
    #[serde(default)]
    pub asset_type: String,
    /// List of eligible analyses performed for the asset.
    #[serde(default)]
    pub analysis_groups: Vec<MoveAnalysisGroup>,
}

/// Represents a logical group of checks performed for an asset.
/// If successful, the group contains the analysis result, otherwise it contains an error with the failure reason.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MoveAnalysisGroup {
    /// Name of the analysis group.
    #[serde(default)]
    pub display_name: String,
    /// Result of a successful analysis.
    pub analysis_result: Option<MoveAnalysisResult>,
    /// Error details for a failed analysis.
    pub error: Option<Status>,
}

/// Represents the successful move analysis results for a group.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MoveAnalysisResult {
    /// List of blockers. If not resolved, these will result in compliance violations in the target.
    #[serde(default)]
    pub blockers: Vec<MoveImpact>,
    /// List of warnings. These are risks that may or may not result in compliance violations.
    #[serde(default)]
    pub warnings: Vec<MoveImpact>,
}

/// Represents the impact of moving the asset to the target.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MoveImpact {
    /// Explanation of the impact.
    #[serde(default)]
    pub detail: String,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &AnalyzeWorkloadMoveRequest) -> RequestBuilder {
    let url = format!("{}/{}:analyzeWorkloadMove", base_url, req.target);
    let mut builder = client.get(url).query(req);
    for asset_type in &req.asset_types {
        builder = builder.query(&[("assetTypes", asset_type)]);
    }
    builder
}
