use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::attachments::Attachment;
use crate::http::media;
use crate::http::media::upload::CreateAttachmentRequest;

#[derive(Clone, Debug)]
pub struct MediaClient {
    inner: Arc<HttpClient>,
}

impl MediaClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Download a file attached to a case.
    /// `name` is the resource name of the attachment, for example `projects/p/cases/c/attachments/a`.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn download(&self, name: &str) -> Result<Vec<u8>, Error> {
        let builder = media::download::build(self.inner.endpoint(), self.inner.http(), name);
        self.inner.send_get_bytes(builder).await
    }

    /// Create a file attachment on a case or Cloud resource from its metadata only.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn upload(&self, req: &CreateAttachmentRequest) -> Result<Attachment, Error> {
        let builder = media::upload::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }

    /// Create a file attachment on a case and upload its content in a single `multipart/related` request.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn upload_media(
        &self,
        parent: &str,
        filename: &str,
        mime_type: &str,
        data: Vec<u8>,
    ) -> Result<Attachment, Error> {
        let upload_base_url = media::upload::upload_base_url(self.inner.endpoint()).ok_or_else(|| {
            Error::InvalidArgument(format!("no media upload endpoint for {}", self.inner.endpoint()))
        })?;
        if !media::upload::is_valid_mime_type(mime_type) {
            return Err(Error::InvalidArgument(format!("invalid mime type: {mime_type:?}")));
        }
        let req = CreateAttachmentRequest {
            parent: parent.to_string(),
            attachment: Attachment {
                filename: Some(filename.to_string()),
                ..Default::default()
            },
        };
        let builder =
            media::upload::build_multipart(&upload_base_url, self.inner.http(), &req, mime_type, &data)?;
        self.inner.send(builder).await
    }
}
