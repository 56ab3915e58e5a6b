use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::performance_report::PerformanceReport;

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListPerformanceReportRequest {
    /// The account id to get the reports.
    #[serde(with = "google_cloud_gax::conversion::string")]
    pub account_id: i64,
    /// The end time of the report in ISO 8601 timestamp format using UTC.
    pub end_date_time: String,
    /// Maximum number of entries returned on one result page.
    /// If not set, the default is 100.
    pub max_results: Option<u32>,
    /// A continuation token, used to page through performance reports.
    /// To retrieve the next page, set this parameter to the value of "nextPageToken" from the previous response.
    pub page_token: Option<String>,
    /// The start time of the report in ISO 8601 timestamp format using UTC.
    pub start_date_time: String,
}

/// The configuration data for an Ad Exchange performance report list.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReportList {
    /// Resource type.
    pub kind: Option<String>,
    /// A list of performance reports relevant for the account.
    #[serde(default)]
    pub performance_report: Vec<PerformanceReport>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &ListPerformanceReportRequest) -> RequestBuilder {
    let url = format!("{base_url}/performancereport");
    client.get(url).query(req)
}
