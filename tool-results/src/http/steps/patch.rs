use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::steps::{Step, StepReference};

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchStepRequest {
    /// The step to update.
    #[serde(skip)]
    pub name: StepReference,
    /// A unique request ID for server to detect duplicated requests.
    pub request_id: Option<String>,
    #[serde(skip_serializing)]
    pub step: Step,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &PatchStepRequest) -> RequestBuilder {
    client.patch(req.name.url(base_url)).query(req).json(&req.step)
}
