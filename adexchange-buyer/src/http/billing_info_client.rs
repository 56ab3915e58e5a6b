use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::billing_info;
use crate::http::billing_info::list::BillingInfoList;
use crate::http::billing_info::BillingInfo;

#[derive(Clone, Debug)]
pub struct BillingInfoClient {
    inner: Arc<HttpClient>,
}

impl BillingInfoClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Returns the billing information for one account specified by account ID.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(&self, account_id: i32) -> Result<BillingInfo, Error> {
        let builder = billing_info::get::build(self.inner.endpoint(), self.inner.http(), account_id);
        self.inner.send(builder).await
    }

    /// Retrieves a list of billing information for all accounts of the authenticated user.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self) -> Result<BillingInfoList, Error> {
        let builder = billing_info::list::build(self.inner.endpoint(), self.inner.http());
        self.inner.send(builder).await
    }
}
