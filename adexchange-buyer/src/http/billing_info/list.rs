use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::billing_info::BillingInfo;

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct BillingInfoList {
    /// A list of billing info relevant for your account.
    #[serde(default)]
    pub items: Vec<BillingInfo>,
    /// Resource type.
    pub kind: Option<String>,
}

pub(crate) fn build(base_url: &str, client: &Client) -> RequestBuilder {
    let url = format!("{base_url}/billinginfo");
    client.get(url)
}
