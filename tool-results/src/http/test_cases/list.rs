use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::steps::StepReference;
use crate::http::test_cases::TestCase;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListTestCasesRequest {
    #[serde(skip)]
    pub step: StepReference,
    /// The maximum number of TestCases to fetch. Default value: 100.
    /// The server will use this default if the field is not set or has a value of 0.
    pub page_size: Option<i32>,
    /// A continuation token to resume the query at the next item.
    pub page_token: Option<String>,
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListTestCasesResponse {
    pub next_page_token: Option<String>,
    /// List of test cases.
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &ListTestCasesRequest) -> RequestBuilder {
    let url = format!("{}/testCases", req.step.url(base_url));
    client.get(url).query(req)
}
