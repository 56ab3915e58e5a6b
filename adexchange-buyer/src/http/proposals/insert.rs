use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::proposals::Proposal;

#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrdersRequest {
    /// The list of proposals to create.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proposals: Vec<Proposal>,
    /// Web property id of the seller creating these orders
    pub web_property_code: Option<String>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &CreateOrdersRequest) -> RequestBuilder {
    let url = format!("{base_url}/proposals/insert");
    client.post(url).json(req)
}
