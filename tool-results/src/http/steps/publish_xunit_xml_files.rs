use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::steps::StepReference;
use crate::http::types::FileReference;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PublishXunitXmlFilesRequest {
    /// The step the files are published to.
    #[serde(skip)]
    pub name: StepReference,
    /// URI of the Xunit XML files to publish. The maximum size of the file this reference is pointing to is 50MB. Required.
    #[serde(default)]
    pub xunit_xml_files: Vec<FileReference>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &PublishXunitXmlFilesRequest) -> RequestBuilder {
    let url = format!("{}:publishXunitXmlFiles", req.name.url(base_url));
    client.post(url).json(req)
}
