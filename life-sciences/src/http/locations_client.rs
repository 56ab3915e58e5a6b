use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::locations;
use crate::http::locations::list::{ListLocationsRequest, ListLocationsResponse};
use crate::http::locations::Location;

#[derive(Clone, Debug)]
pub struct LocationsClient {
    inner: Arc<HttpClient>,
}

impl LocationsClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Gets information about a location.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(&self, name: &str) -> Result<Location, Error> {
        let builder = locations::get::build(self.inner.endpoint(), self.inner.http(), name);
        self.inner.send(builder).await
    }

    /// Lists information about the supported locations for this service.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, req: &ListLocationsRequest) -> Result<ListLocationsResponse, Error> {
        let builder = locations::list::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}
