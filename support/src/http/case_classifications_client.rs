use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::case_classifications;
use crate::http::case_classifications::search::{
    SearchCaseClassificationsRequest, SearchCaseClassificationsResponse,
};

#[derive(Clone, Debug)]
pub struct CaseClassificationsClient {
    inner: Arc<HttpClient>,
}

impl CaseClassificationsClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Retrieve valid classifications to use when creating a support case.
    /// Classifications are hierarchical. Each classification is a string containing all levels of the hierarchy separated by `" > "`.
    /// For example, `"Technical Issue > Compute > Compute Engine"`.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn search(
        &self,
        req: &SearchCaseClassificationsRequest,
    ) -> Result<SearchCaseClassificationsResponse, Error> {
        let builder = case_classifications::search::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}
