use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use google_cloud_gax::status::Code;

use crate::Error;

/// This resource represents a long-running operation that is the result of a network API call.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// The server-assigned name, which is only unique within the same service that originally
    /// returns it.
    #[serde(default)]
    pub name: String,
    /// Service-specific metadata associated with the operation. It typically contains progress
    /// information and common metadata such as create time. Carries its type in `@type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    /// If the value is `false`, it means the operation is still in progress. If `true`, the
    /// operation is completed, and either `error` or `response` is available.
    #[serde(default)]
    pub done: bool,
    /// The error result of the operation in case of failure or cancellation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Status>,
    /// The normal, successful response of the operation. Carries its type in `@type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Map<String, Value>>,
}

impl Operation {
    /// Decodes the result of a finished operation.
    ///
    /// Returns `Ok(None)` while the operation is running, and [`Error::Operation`] when it
    /// finished with an error status.
    pub fn result<T: DeserializeOwned>(&self) -> Result<Option<T>, Error> {
        if let Some(status) = &self.error {
            return Err(Error::Operation(status.clone()));
        }
        if !self.done {
            return Ok(None);
        }
        let response = self.response.clone().unwrap_or_default();
        Ok(Some(serde_json::from_value(Value::Object(response))?))
    }

    /// Decodes the service-specific metadata, if present.
    pub fn metadata<M: DeserializeOwned>(&self) -> Result<Option<M>, Error> {
        match &self.metadata {
            Some(metadata) => Ok(Some(serde_json::from_value(Value::Object(metadata.clone()))?)),
            None => Ok(None),
        }
    }
}

/// The `Status` type defines a logical error model. It contains an error code, an error message
/// and error details.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    /// The status code, which should be an enum value of `google.rpc.Code`.
    #[serde(default)]
    pub code: i32,
    /// A developer-facing error message.
    #[serde(default)]
    pub message: String,
    /// A list of messages that carry the error details.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<Value>,
}

impl Status {
    pub fn code(&self) -> Code {
        Code::from(self.code)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code(), self.message)
    }
}

/// The request message for Operations.ListOperations.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListOperationsRequest {
    /// The name of the operation's parent resource.
    #[serde(skip_serializing)]
    pub name: String,
    /// The standard list filter.
    pub filter: Option<String>,
    /// The standard list page size.
    pub page_size: Option<i32>,
    /// The standard list page token.
    pub page_token: Option<String>,
}

/// The response message for Operations.ListOperations.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListOperationsResponse {
    /// A list of operations that matches the specified filter in the request.
    #[serde(default)]
    pub operations: Vec<Operation>,
    /// The standard List next-page token.
    pub next_page_token: Option<String>,
}
