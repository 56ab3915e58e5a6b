use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::steps::StepReference;
use crate::http::thumbnails::Image;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListThumbnailsRequest {
    #[serde(skip)]
    pub step: StepReference,
    /// The maximum number of thumbnails to fetch. Default value: 50.
    /// The server will use this default if the field is not set or has a value of 0.
    pub page_size: Option<i32>,
    /// A continuation token to resume the query at the next item.
    pub page_token: Option<String>,
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListThumbnailsResponse {
    /// A continuation token to resume the query at the next item.
    /// If set, indicates that there are more thumbnails to read, by calling list again with this value in the page_token field.
    pub next_page_token: Option<String>,
    /// A list of image data. Images are returned in a deterministic order; they are ordered by these factors, in order of importance:
    /// * First, by their associated test case. Images without a test case are considered greater than images with one.
    /// * Second, by their creation time. Images without a creation time are greater than images with one.
    /// * Third, by the order in which they were added to the step (by calls to CreateStep or UpdateStep).
    #[serde(default)]
    pub thumbnails: Vec<Image>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &ListThumbnailsRequest) -> RequestBuilder {
    let url = format!("{}/thumbnails", req.step.url(base_url));
    client.get(url).query(req)
}
