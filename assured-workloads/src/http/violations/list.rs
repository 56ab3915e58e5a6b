use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};
use time::OffsetDateTime;

use crate::http::violations::Violation;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListViolationsRequest {
    /// Required. The Workload name.
    /// Format `organizations/{org_id}/locations/{location}/workloads/{workload}`.
    /// Use `-` as the workload id to list violations of every workload in the location.
    #[serde(skip_serializing)]
    pub parent: String,
    /// Optional. A custom filter for filtering by the Violations properties.
    pub filter: Option<String>,
    /// The start of the time window.
    #[serde(rename = "interval.startTime", default, with = "time::serde::rfc3339::option")]
    pub interval_start_time: Option<OffsetDateTime>,
    /// The end of the time window.
    #[serde(rename = "interval.endTime", default, with = "time::serde::rfc3339::option")]
    pub interval_end_time: Option<OffsetDateTime>,
    /// Optional. Page size.
    pub page_size: Option<i32>,
    /// Optional. Page token returned from previous request.
    pub page_token: Option<String>,
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListViolationsResponse {
    /// List of Violations under a Workload.
    #[serde(default)]
    pub violations: Vec<Violation>,
    /// The next page token. Returns empty if reached the last page.
    pub next_page_token: Option<String>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &ListViolationsRequest) -> RequestBuilder {
    let url = format!("{}/{}/violations", base_url, req.parent);
    client.get(url).query(req)
}
