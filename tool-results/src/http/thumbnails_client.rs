use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::thumbnails;
use crate::http::thumbnails::list::{ListThumbnailsRequest, ListThumbnailsResponse};

#[derive(Clone, Debug)]
pub struct ThumbnailsClient {
    inner: Arc<HttpClient>,
}

impl ThumbnailsClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Lists thumbnails of images attached to a step.
    /// May return any of the following canonical error codes:
    /// - PERMISSION_DENIED - if the user is not authorized to read from the project, or from any of the images
    /// - INVALID_ARGUMENT - if the request is malformed
    /// - NOT_FOUND - if the step does not exist, or if any of the images do not exist
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, req: &ListThumbnailsRequest) -> Result<ListThumbnailsResponse, Error> {
        let builder = thumbnails::list::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use serde_json::json;

    use google_cloud_gax::status::Code;

    use crate::http::steps::StepReference;
    use crate::http::test::create_client;
    use crate::http::thumbnails::list::ListThumbnailsRequest;

    #[tokio::test]
    async fn test_list() {
        let server = MockServer::start_async().await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/toolresults/v1beta3/projects/p1/histories/bh.1/executions/5/steps/s1/thumbnails")
                    .query_param("pageToken", "t");
                then.status(200).json_body(json!({
                    "thumbnails": [
                        {
                            "stepId": "s1",
                            "sourceImage": {"output": {"fileUri": "gs://bucket/shot.png"}},
                            "thumbnail": {"contentType": "image/png", "heightPx": 2, "widthPx": 2, "data": "iVBORw=="}
                        },
                        {
                            "stepId": "s1",
                            "error": {"code": 5, "message": "image not found"}
                        }
                    ]
                }));
            })
            .await;

        let client = create_client(&server);
        let response = client
            .thumbnails()
            .list(&ListThumbnailsRequest {
                step: StepReference {
                    project_id: "p1".to_string(),
                    history_id: "bh.1".to_string(),
                    execution_id: "5".to_string(),
                    step_id: "s1".to_string(),
                },
                page_size: None,
                page_token: Some("t".to_string()),
            })
            .await
            .unwrap();
        let thumbnail = response.thumbnails[0].thumbnail.as_ref().unwrap();
        assert_eq!(thumbnail.data, Some(vec![0x89, b'P', b'N', b'G']));
        assert_eq!(thumbnail.content_type.as_deref(), Some("image/png"));
        let error = response.thumbnails[1].error.as_ref().unwrap();
        assert_eq!(error.code(), Code::NotFound);
        list.assert_async().await;
    }
}
