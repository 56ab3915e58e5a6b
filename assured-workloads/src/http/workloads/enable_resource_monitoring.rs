use reqwest::header::CONTENT_LENGTH;
use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

/// Response for EnableResourceMonitoring endpoint.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub struct EnableResourceMonitoringResponse {}

pub(crate) fn build(base_url: &str, client: &Client, name: &str) -> RequestBuilder {
    let url = format!("{base_url}/{name}:enableResourceMonitoring");
    client.post(url).header(CONTENT_LENGTH, 0)
}
