use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::cases::Escalation;

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct EscalateCaseRequest {
    /// Required. The name of the case to be escalated.
    #[serde(skip_serializing)]
    pub name: String,
    /// The escalation information to be sent with the escalation request.
    pub escalation: Option<Escalation>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &EscalateCaseRequest) -> RequestBuilder {
    let url = format!("{}/{}:escalate", base_url, req.name);
    client.post(url).json(req)
}
