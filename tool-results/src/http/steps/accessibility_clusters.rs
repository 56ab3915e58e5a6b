use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::steps::SuggestionCluster;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListStepAccessibilityClustersRequest {
    /// A full resource name of the step.
    /// For example, `projects/my-project/histories/bh.1234567890abcdef/executions/1234567890123456789/steps/bs.1234567890abcdef`
    #[serde(skip_serializing)]
    pub name: String,
    /// The accepted format is the canonical Unicode format with hyphen as a delimiter.
    /// Language must be lowercase, Language Script - Capitalized, Region - UPPERCASE.
    /// See http://www.unicode.org/reports/tr35/#Unicode_locale_identifier for details.
    pub locale: Option<String>,
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListStepAccessibilityClustersResponse {
    /// A sequence of accessibility suggestions, grouped into clusters.
    /// Within the sequence, clusters that belong to the same SuggestionCategory should be adjacent.
    #[serde(default)]
    pub clusters: Vec<SuggestionCluster>,
    /// A full resource name of the step.
    pub name: Option<String>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &ListStepAccessibilityClustersRequest) -> RequestBuilder {
    let url = format!("{}/{}:accessibilityClusters", base_url, req.name);
    client.get(url).query(req)
}
