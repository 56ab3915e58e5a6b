use std::fmt;

use crate::status::Code;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An error returned from the Google Cloud service.
    #[error(transparent)]
    Response(#[from] ErrorResponse),

    /// An error from the underlying HTTP client.
    #[error(transparent)]
    HttpClient(#[from] reqwest::Error),

    /// An error from one of the middleware used.
    #[error(transparent)]
    HttpMiddleware(anyhow::Error),

    /// An error from a token source.
    #[error("token source failed: {0}")]
    TokenSource(Box<dyn std::error::Error + Send + Sync>),

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// The request could not be built from the given arguments.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Middleware(err) => Error::HttpMiddleware(err),
            reqwest_middleware::Error::Reqwest(err) => Error::HttpClient(err),
        }
    }
}

impl Error {
    /// The canonical status of an error returned by the service, if any.
    pub fn status(&self) -> Option<Code> {
        match self {
            Error::Response(response) => response.status,
            _ => None,
        }
    }

    /// The HTTP status code of a failed response, if the request reached the service.
    pub fn http_status_code(&self) -> Option<u16> {
        match self {
            Error::Response(response) => Some(response.code),
            Error::HttpClient(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// An error response returned from a Google Cloud REST API.
///
/// See the [`API design guide`][1] for the format.
///
/// [1]: https://cloud.google.com/apis/design/errors#http_mapping
#[derive(Clone, PartialEq, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// An HTTP status value, without the textual description.
    ///
    /// Example values include: `400` (Bad Request), `401` (Unauthorized), and `404` (Not Found).
    pub code: u16,

    /// Description of the error.
    pub message: String,

    /// The canonical status name, for example `PERMISSION_DENIED`.
    #[serde(default)]
    pub status: Option<Code>,

    /// Legacy error items. Only some APIs populate them.
    #[serde(default)]
    pub errors: Vec<ErrorResponseItem>,

    /// Typed error details such as `google.rpc.ErrorInfo` or `google.rpc.BadRequest`.
    /// Each entry carries its type in the `@type` field.
    #[serde(default)]
    pub details: Vec<serde_json::Value>,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.status {
            Some(status) => write!(f, "{} {:?}: {}", self.code, status, self.message),
            None => write!(f, "{}: {}", self.code, self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}

#[derive(Clone, PartialEq, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponseItem {
    /// The scope of the error. Example values include: `global` and `usageLimits`.
    #[serde(default)]
    pub domain: String,

    /// The specific item within the `locationType` that caused the error.
    pub location: Option<String>,

    /// The location or part of the request that caused the error.
    pub location_type: Option<String>,

    /// Description of the error.
    #[serde(default)]
    pub message: String,

    /// Example values include `invalid`, `notFound`, and `required`.
    #[serde(default)]
    pub reason: String,
}

/// The error envelope contains an extra object level that is inconvenient to include in our error.
#[derive(serde::Deserialize)]
pub(crate) struct ErrorWrapper {
    pub(crate) error: ErrorResponse,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::error::{Error, ErrorWrapper};
    use crate::status::Code;

    #[test]
    fn test_parse_error_envelope() {
        let body = json!({
            "error": {
                "code": 403,
                "message": "The caller does not have permission",
                "status": "PERMISSION_DENIED",
                "details": [{
                    "@type": "type.googleapis.com/google.rpc.ErrorInfo",
                    "reason": "IAM_PERMISSION_DENIED"
                }]
            }
        });
        let wrapper: ErrorWrapper = serde_json::from_value(body).unwrap();
        let err = Error::Response(wrapper.error);
        assert_eq!(err.status(), Some(Code::PermissionDenied));
        assert_eq!(err.http_status_code(), Some(403));
        assert_eq!(err.to_string(), "403 PermissionDenied: The caller does not have permission");
    }

    #[test]
    fn test_parse_legacy_error_envelope() {
        let body = json!({
            "error": {
                "code": 404,
                "message": "Not Found",
                "errors": [{"domain": "global", "reason": "notFound", "message": "Not Found"}]
            }
        });
        let wrapper: ErrorWrapper = serde_json::from_value(body).unwrap();
        assert_eq!(wrapper.error.status, None);
        assert_eq!(wrapper.error.errors[0].reason, "notFound");
        assert!(wrapper.error.details.is_empty());
    }
}
