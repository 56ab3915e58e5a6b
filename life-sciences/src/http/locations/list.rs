use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::locations::Location;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListLocationsRequest {
    /// The resource that owns the locations collection, if applicable.
    #[serde(skip_serializing)]
    pub name: String,
    /// A filter to narrow down results to a preferred subset.
    /// The filtering language accepts strings like `"displayName=tokyo"`, and is documented in more detail in [AIP-160](https://google.aip.dev/160).
    pub filter: Option<String>,
    /// The maximum number of results to return. If not set, the service selects a default.
    pub page_size: Option<i32>,
    /// A page token received from the `next_page_token` field in the response.
    /// Send that page token to receive the subsequent page.
    pub page_token: Option<String>,
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListLocationsResponse {
    /// A list of locations that matches the specified filter in the request.
    #[serde(default)]
    pub locations: Vec<Location>,
    /// The standard List next-page token.
    pub next_page_token: Option<String>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &ListLocationsRequest) -> RequestBuilder {
    let url = format!("{}/{}/locations", base_url, req.name);
    client.get(url).query(req)
}
