//! # google-cloud-longrunning
//!
//! REST client for `google.longrunning.Operations`, shared by every service that returns
//! long-running operations (for example Assured Workloads and Life Sciences).
//!
//! [`longrunning::Operation`] wraps a raw [`model::Operation`] together with the client needed to
//! refresh it. Waiting strategies are left to the caller: [`longrunning::Operation::poll`] performs
//! exactly one request.
use crate::model::Status;

pub mod longrunning;
pub mod model;
pub mod operations_client;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request to the operations endpoint failed.
    #[error(transparent)]
    Http(#[from] google_cloud_gax::error::Error),

    /// The operation completed with an error status.
    #[error("operation failed: {0}")]
    Operation(Status),

    /// The `response` or `metadata` payload did not match the expected type.
    #[error("unexpected operation payload: {0}")]
    Payload(#[from] serde_json::Error),
}
