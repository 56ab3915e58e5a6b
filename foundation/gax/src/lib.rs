//! # google-cloud-gax
//!
//! Shared request plumbing for the Google Cloud REST client crates.
//!
//! * [`client::HttpClient`] attaches credentials, sends a request built by a service crate and
//!   decodes the JSON response or the `{"error": {...}}` envelope.
//! * [`conversion`] holds the serde codecs for the JSON wire formats used by Google APIs
//!   (int64 as decimal strings, base64 bytes, google-duration strings, field masks).
//! * [`status::Code`] is the canonical RPC status code carried by error responses.
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub mod client;
pub mod conversion;
pub mod error;
pub mod status;

/// Percent-encodes a value used as a single path segment.
///
/// Resource names such as `projects/p/locations/l` are inserted verbatim and must not be escaped.
pub trait Escape {
    fn escape(&self) -> String;
}

impl Escape for str {
    fn escape(&self) -> String {
        utf8_percent_encode(self, ENCODE_SET).to_string()
    }
}

impl Escape for String {
    fn escape(&self) -> String {
        self.as_str().escape()
    }
}

const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'*').remove(b'-').remove(b'.').remove(b'_');
