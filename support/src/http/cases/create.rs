use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::cases::Case;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseRequest {
    /// Required. The name of the parent under which the case should be created.
    /// `projects/{project}` or `organizations/{organization}`.
    #[serde(skip_serializing)]
    pub parent: String,
    /// The case to be created.
    #[serde(skip_serializing)]
    pub case: Case,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &CreateCaseRequest) -> RequestBuilder {
    let url = format!("{}/{}/cases", base_url, req.parent);
    client.post(url).json(&req.case)
}
