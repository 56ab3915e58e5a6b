use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use google_cloud_gax::Escape;

use crate::http::steps::StepReference;

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct GetTestCaseRequest {
    /// The step the test case belongs to.
    pub step: StepReference,
    pub test_case_id: String,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &GetTestCaseRequest) -> RequestBuilder {
    let url = format!("{}/testCases/{}", req.step.url(base_url), req.test_case_id.escape());
    client.get(url)
}
