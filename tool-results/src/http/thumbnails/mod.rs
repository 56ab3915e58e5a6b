use crate::http::types::{Status, ToolOutputReference};

pub mod list;

/// An image, with a link to the main image and a thumbnail.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// An error explaining why the thumbnail could not be rendered.
    pub error: Option<Status>,
    /// A reference to the full-size, original image.
    /// This is the same as the tool_outputs entry for the image under its Step. Always set.
    pub source_image: Option<ToolOutputReference>,
    /// The step to which the image is attached. Always set.
    pub step_id: Option<String>,
    /// The thumbnail.
    pub thumbnail: Option<Thumbnail>,
}

/// A single thumbnail, with its size and format.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    /// The thumbnail's content type, i.e. "image/png". Always set.
    pub content_type: Option<String>,
    /// The thumbnail file itself. That is, the bytes here are precisely the bytes that make up the thumbnail file;
    /// they can be served as an image as-is (with the appropriate content type.) Always set.
    #[serde(default, with = "google_cloud_gax::conversion::base64::option")]
    pub data: Option<Vec<u8>>,
    /// The height of the thumbnail, in pixels. Always set.
    pub height_px: Option<i32>,
    /// The width of the thumbnail, in pixels. Always set.
    pub width_px: Option<i32>,
}
