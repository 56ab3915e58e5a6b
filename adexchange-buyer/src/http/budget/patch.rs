use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::budget::Budget;

/// Shared by `patch` and `update`.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBudgetRequest {
    /// The account id associated with the budget being updated.
    pub account_id: i64,
    /// The billing id associated with the budget being updated.
    pub billing_id: i64,
    pub budget: Budget,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &UpdateBudgetRequest) -> RequestBuilder {
    let url = format!("{}/billinginfo/{}/{}", base_url, req.account_id, req.billing_id);
    client.patch(url).json(&req.budget)
}

pub(crate) fn build_update(base_url: &str, client: &Client, req: &UpdateBudgetRequest) -> RequestBuilder {
    let url = format!("{}/billinginfo/{}/{}", base_url, req.account_id, req.billing_id);
    client.put(url).json(&req.budget)
}
