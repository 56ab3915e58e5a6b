use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::accounts;
use crate::http::accounts::list::AccountsList;
use crate::http::accounts::patch::UpdateAccountRequest;
use crate::http::accounts::Account;

#[derive(Clone, Debug)]
pub struct AccountsClient {
    inner: Arc<HttpClient>,
}

impl AccountsClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Gets one account by ID.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(&self, id: i32) -> Result<Account, Error> {
        let builder = accounts::get::build(self.inner.endpoint(), self.inner.http(), id);
        self.inner.send(builder).await
    }

    /// Retrieves the authenticated user's list of accounts.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self) -> Result<AccountsList, Error> {
        let builder = accounts::list::build(self.inner.endpoint(), self.inner.http());
        self.inner.send(builder).await
    }

    /// Updates an existing account. This method supports patch semantics.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn patch(&self, req: &UpdateAccountRequest) -> Result<Account, Error> {
        let builder = accounts::patch::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Updates an existing account.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn update(&self, req: &UpdateAccountRequest) -> Result<Account, Error> {
        let builder = accounts::patch::build_update(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}
