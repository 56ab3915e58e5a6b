use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::model::Operation as InternalOperation;
use crate::operations_client::OperationsClient;
use crate::Error;

/// A long-running operation whose successful response decodes into `T`.
pub struct Operation<T: DeserializeOwned> {
    inner: InternalOperation,
    client: OperationsClient,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> Operation<T> {
    pub fn new(client: OperationsClient, inner: InternalOperation) -> Self {
        Self {
            client,
            inner,
            _marker: PhantomData,
        }
    }

    /// Name returns the name of the long-running operation.
    /// The name is assigned by the server and is unique within the service
    /// from which the operation is created.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Done reports whether the long-running operation has completed.
    pub fn done(&self) -> bool {
        self.inner.done
    }

    /// Decodes the service-specific metadata of the last fetched state.
    pub fn metadata<M: DeserializeOwned>(&self) -> Result<Option<M>, Error> {
        self.inner.metadata()
    }

    pub fn raw(&self) -> &InternalOperation {
        &self.inner
    }

    pub fn into_raw(self) -> InternalOperation {
        self.inner
    }

    /// Poll fetches the latest state of a long-running operation.
    ///
    /// If Poll fails, the error is returned and op is unmodified.
    /// If Poll succeeds and the operation has completed with failure,
    /// the error is returned and done will return true.
    /// If Poll succeeds and the operation has completed successfully,
    /// done will return true and the decoded response is returned.
    pub async fn poll(&mut self) -> Result<Option<T>, Error> {
        if !self.done() {
            self.inner = self.client.get(self.name()).await?;
        }
        self.inner.result()
    }

    /// Cancel starts asynchronous cancellation on a long-running operation. The server
    /// makes a best effort to cancel the operation, but success is not guaranteed.
    pub async fn cancel(&self) -> Result<(), Error> {
        Ok(self.client.cancel(self.name()).await?)
    }

    /// Delete deletes a long-running operation. It does not cancel the operation.
    pub async fn delete(&self) -> Result<(), Error> {
        Ok(self.client.delete(self.name()).await?)
    }
}
