use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::cases::CaseClassification;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchCaseClassificationsRequest {
    /// An expression used to filter case classifications.
    /// If it's an empty string, then no filtering happens. Otherwise, case classifications will be returned that match the filter.
    pub query: Option<String>,
    /// The maximum number of classifications fetched with each request.
    pub page_size: Option<i32>,
    /// A token identifying the page of results to return. If unspecified, the first page is retrieved.
    pub page_token: Option<String>,
}

/// The response message for SearchCaseClassifications endpoint.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchCaseClassificationsResponse {
    /// The classifications retrieved.
    #[serde(default)]
    pub case_classifications: Vec<CaseClassification>,
    /// A token to retrieve the next page of results.
    /// Set this in the `page_token` field of subsequent `caseClassifications.list` requests.
    /// If unspecified, there are no more results to retrieve.
    pub next_page_token: Option<String>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &SearchCaseClassificationsRequest) -> RequestBuilder {
    let url = format!("{base_url}/caseClassifications:search");
    client.get(url).query(req)
}
