use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::attachments::Attachment;

const BOUNDARY_PREFIX: &str = "google_cloud_support_multipart_boundary";

/// The request message for the CreateAttachment endpoint.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttachmentRequest {
    /// Required. The name of the case or Cloud resource to which the attachment should be attached.
    #[serde(skip_serializing)]
    pub parent: String,
    /// Required. The attachment to be created.
    pub attachment: Attachment,
}

/// Resolves the media upload root for an API root such as `https://cloudsupport.googleapis.com/v2`.
pub(crate) fn upload_base_url(base_url: &str) -> Option<String> {
    base_url
        .strip_suffix("/v2")
        .map(|root| format!("{root}/upload/v2"))
}

/// Sends the attachment metadata only.
pub(crate) fn build(base_url: &str, client: &Client, req: &CreateAttachmentRequest) -> RequestBuilder {
    let url = format!("{}/{}/attachments", base_url, req.parent);
    client.post(url).json(req)
}

/// Sends the attachment metadata and its content as a `multipart/related` upload.
pub(crate) fn build_multipart(
    upload_base_url: &str,
    client: &Client,
    req: &CreateAttachmentRequest,
    mime_type: &str,
    data: &[u8],
) -> Result<RequestBuilder, serde_json::Error> {
    let url = format!("{}/{}/attachments", upload_base_url, req.parent);
    let metadata = serde_json::to_vec(req)?;
    let boundary = boundary_for(&[&metadata, data]);
    Ok(client
        .post(url)
        .query(&[("uploadType", "multipart")])
        .header(
            reqwest::header::CONTENT_TYPE,
            format!("multipart/related; boundary={boundary}"),
        )
        .body(multipart_related_body(&boundary, &metadata, mime_type, data)))
}

/// A media type is written into a part header verbatim, so it must stay on one line.
pub(crate) fn is_valid_mime_type(mime_type: &str) -> bool {
    !mime_type.is_empty() && !mime_type.contains(['\r', '\n'])
}

/// Returns a boundary that occurs in none of the parts.
fn boundary_for(parts: &[&[u8]]) -> String {
    let occurs_in = |boundary: &str| {
        parts
            .iter()
            .any(|part| part.windows(boundary.len()).any(|w| w == boundary.as_bytes()))
    };
    if !occurs_in(BOUNDARY_PREFIX) {
        return BOUNDARY_PREFIX.to_string();
    }
    (1u64..)
        .map(|n| format!("{BOUNDARY_PREFIX}_{n}"))
        .find(|boundary| !occurs_in(boundary))
        .unwrap_or_else(|| BOUNDARY_PREFIX.to_string())
}

fn multipart_related_body(boundary: &str, metadata: &[u8], mime_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(metadata.len() + data.len() + 256);
    body.extend_from_slice(format!("--{boundary}\r\nContent-Type: application/json; charset=UTF-8\r\n\r\n").as_bytes());
    body.extend_from_slice(metadata);
    body.extend_from_slice(format!("\r\n--{boundary}\r\nContent-Type: {mime_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

#[cfg(test)]
mod tests {
    use crate::http::media::upload::{boundary_for, is_valid_mime_type, multipart_related_body, upload_base_url};

    #[test]
    fn test_upload_base_url() {
        assert_eq!(
            upload_base_url("https://cloudsupport.googleapis.com/v2").as_deref(),
            Some("https://cloudsupport.googleapis.com/upload/v2")
        );
        assert_eq!(upload_base_url("https://cloudsupport.googleapis.com/v1"), None);
    }

    #[test]
    fn test_multipart_related_body() {
        let body = multipart_related_body(
            "google_cloud_support_multipart_boundary",
            br#"{"attachment":{}}"#,
            "text/plain",
            b"hello",
        );
        let expected = "--google_cloud_support_multipart_boundary\r\n\
            Content-Type: application/json; charset=UTF-8\r\n\r\n\
            {\"attachment\":{}}\r\n\
            --google_cloud_support_multipart_boundary\r\n\
            Content-Type: text/plain\r\n\r\n\
            hello\r\n\
            --google_cloud_support_multipart_boundary--\r\n";
        assert_eq!(String::from_utf8(body).unwrap(), expected);
    }

    #[test]
    fn test_boundary_avoids_payload() {
        let metadata = br#"{"attachment":{}}"#.as_slice();
        assert_eq!(boundary_for(&[metadata, b"hello"]), "google_cloud_support_multipart_boundary");

        let data = b"--google_cloud_support_multipart_boundary\r\n--google_cloud_support_multipart_boundary_1";
        let boundary = boundary_for(&[metadata, data]);
        assert_eq!(boundary, "google_cloud_support_multipart_boundary_2");

        let body = multipart_related_body(&boundary, metadata, "text/plain", data);
        let body = String::from_utf8(body).unwrap();
        let delimiter = format!("--{boundary}");
        assert_eq!(body.matches(delimiter.as_str()).count(), 3);
        assert!(body.ends_with(&format!("\r\n--{boundary}--\r\n")));
    }

    #[test]
    fn test_mime_type_on_one_line() {
        assert!(is_valid_mime_type("text/plain"));
        assert!(is_valid_mime_type("application/octet-stream"));
        assert!(!is_valid_mime_type(""));
        assert!(!is_valid_mime_type("text/plain\r\nX-Injected: 1"));
        assert!(!is_valid_mime_type("text/plain\n"));
    }
}
