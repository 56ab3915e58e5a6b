use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::products;
use crate::http::products::search::GetOffersResponse;
use crate::http::products::Product;

#[derive(Clone, Debug)]
pub struct ProductsClient {
    inner: Arc<HttpClient>,
}

impl ProductsClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Gets the requested product by id.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(&self, product_id: &str) -> Result<Product, Error> {
        let builder = products::get::build(self.inner.endpoint(), self.inner.http(), product_id);
        self.inner.send(builder).await
    }

    /// Gets the requested product.
    /// `pql_query` is the pql query used to query for products.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn search(&self, pql_query: Option<&str>) -> Result<GetOffersResponse, Error> {
        let builder = products::search::build(self.inner.endpoint(), self.inner.http(), pql_query);
        self.inner.send(builder).await
    }
}
