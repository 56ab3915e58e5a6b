use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::budget;
use crate::http::budget::patch::UpdateBudgetRequest;
use crate::http::budget::Budget;

#[derive(Clone, Debug)]
pub struct BudgetClient {
    inner: Arc<HttpClient>,
}

impl BudgetClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Returns the budget information for the adgroup specified by the accountId and billingId.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(&self, account_id: i64, billing_id: i64) -> Result<Budget, Error> {
        let builder = budget::get::build(self.inner.endpoint(), self.inner.http(), account_id, billing_id);
        self.inner.send(builder).await
    }

    /// Updates the budget amount for the budget of the adgroup specified by the accountId and billingId,
    /// with the budget amount in the request. This method supports patch semantics.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn patch(&self, req: &UpdateBudgetRequest) -> Result<Budget, Error> {
        let builder = budget::patch::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Updates the budget amount for the budget of the adgroup specified by the accountId and billingId,
    /// with the budget amount in the request.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn update(&self, req: &UpdateBudgetRequest) -> Result<Budget, Error> {
        let builder = budget::patch::build_update(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use httpmock::Method::PATCH;
    use serde_json::json;

    use crate::http::budget::patch::UpdateBudgetRequest;
    use crate::http::budget::Budget;
    use crate::http::test::create_client;

    #[tokio::test]
    async fn test_get_decodes_int64_strings() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/adexchangebuyer/v1.4/billinginfo/1234/9876543210");
                then.status(200).json_body(json!({
                    "kind": "adexchangebuyer#budget",
                    "accountId": "1234",
                    "billingId": "9876543210",
                    "budgetAmount": "5000000",
                    "currencyCode": "USD"
                }));
            })
            .await;

        let budget = create_client(&server).budget().get(1234, 9876543210).await.unwrap();
        assert_eq!(budget.billing_id, Some(9876543210));
        assert_eq!(budget.budget_amount, Some(5000000));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_patch_and_update() {
        let server = MockServer::start_async().await;
        let patch = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/adexchangebuyer/v1.4/billinginfo/1234/42")
                    .json_body(json!({"budgetAmount": "100"}));
                then.status(200).json_body(json!({"budgetAmount": "100"}));
            })
            .await;
        let update = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/adexchangebuyer/v1.4/billinginfo/1234/42")
                    .json_body(json!({"accountId": "1234", "billingId": "42", "budgetAmount": "200"}));
                then.status(200).json_body(json!({"budgetAmount": "200"}));
            })
            .await;

        let client = create_client(&server);
        let budget = client
            .budget()
            .patch(&UpdateBudgetRequest {
                account_id: 1234,
                billing_id: 42,
                budget: Budget {
                    budget_amount: Some(100),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(budget.budget_amount, Some(100));
        let budget = client
            .budget()
            .update(&UpdateBudgetRequest {
                account_id: 1234,
                billing_id: 42,
                budget: Budget {
                    account_id: Some(1234),
                    billing_id: Some(42),
                    budget_amount: Some(200),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(budget.budget_amount, Some(200));
        patch.assert_async().await;
        update.assert_async().await;
    }
}
