use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::accounts::Account;

/// Shared by `patch` and `update`, which differ only in the HTTP method.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    /// The account id
    #[serde(skip_serializing)]
    pub id: i32,
    /// Confirmation for erasing bidder and cookie matching urls.
    pub confirm_unsafe_account_change: Option<bool>,
    #[serde(skip_serializing)]
    pub account: Account,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &UpdateAccountRequest) -> RequestBuilder {
    let url = format!("{}/accounts/{}", base_url, req.id);
    client.patch(url).query(req).json(&req.account)
}

pub(crate) fn build_update(base_url: &str, client: &Client, req: &UpdateAccountRequest) -> RequestBuilder {
    let url = format!("{}/accounts/{}", base_url, req.id);
    client.put(url).query(req).json(&req.account)
}
