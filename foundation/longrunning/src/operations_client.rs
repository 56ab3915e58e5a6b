use std::sync::Arc;

use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::model::{ListOperationsRequest, ListOperationsResponse, Operation};

fn build_get(base_url: &str, client: &Client, name: &str) -> RequestBuilder {
    client.get(format!("{base_url}/{name}"))
}

fn build_list(base_url: &str, client: &Client, req: &ListOperationsRequest) -> RequestBuilder {
    client.get(format!("{}/{}/operations", base_url, req.name)).query(req)
}

fn build_cancel(base_url: &str, client: &Client, name: &str) -> RequestBuilder {
    client
        .post(format!("{base_url}/{name}:cancel"))
        .json(&serde_json::json!({}))
}

fn build_delete(base_url: &str, client: &Client, name: &str) -> RequestBuilder {
    client.delete(format!("{base_url}/{name}"))
}

/// Manages long-running operations with an API service.
#[derive(Clone, Debug)]
pub struct OperationsClient {
    inner: Arc<HttpClient>,
}

impl OperationsClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Gets the latest state of a long-running operation. Clients can use this
    /// method to poll the operation result at intervals as recommended by the API service.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(&self, name: &str) -> Result<Operation, Error> {
        let builder = build_get(self.inner.endpoint(), self.inner.http(), name);
        self.inner.send(builder).await
    }

    /// Lists operations that match the specified filter in the request.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, req: &ListOperationsRequest) -> Result<ListOperationsResponse, Error> {
        let builder = build_list(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Starts asynchronous cancellation on a long-running operation. The server
    /// makes a best effort to cancel the operation, but success is not guaranteed.
    /// On successful cancellation, the operation is not deleted; instead, it becomes an
    /// operation with an error value with a code of 1, corresponding to `Code::Cancelled`.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn cancel(&self, name: &str) -> Result<(), Error> {
        let builder = build_cancel(self.inner.endpoint(), self.inner.http(), name);
        self.inner.send_get_empty(builder).await
    }

    /// Deletes a long-running operation. This method indicates that the client is
    /// no longer interested in the operation result. It does not cancel the operation.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn delete(&self, name: &str) -> Result<(), Error> {
        let builder = build_delete(self.inner.endpoint(), self.inner.http(), name);
        self.inner.send_get_empty(builder).await
    }
}
