use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::accounts::Account;

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccountsList {
    /// A list of accounts.
    #[serde(default)]
    pub items: Vec<Account>,
    /// Resource type.
    pub kind: Option<String>,
}

pub(crate) fn build(base_url: &str, client: &Client) -> RequestBuilder {
    let url = format!("{base_url}/accounts");
    client.get(url)
}
