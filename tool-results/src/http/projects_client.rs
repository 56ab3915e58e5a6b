use std::sync::Arc;

use google_cloud_gax::client::HttpClient;
use google_cloud_gax::error::Error;

use crate::http::projects;
use crate::http::projects::ProjectSettings;

#[derive(Clone, Debug)]
pub struct ProjectsClient {
    inner: Arc<HttpClient>,
}

impl ProjectsClient {
    pub fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Gets the Tool Results settings for a project.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_settings(&self, project_id: &str) -> Result<ProjectSettings, Error> {
        let builder = projects::get_settings::build(self.inner.endpoint(), self.inner.http(), project_id);
        self.inner.send(builder).await
    }

    /// Creates resources for settings which have not yet been set.
    /// Currently, this creates a single resource: a Google Cloud Storage bucket, to be used as the default bucket for this project.
    /// The bucket is created in an FTL-own storage project.
    /// Except for in rare cases, calling this method in parallel from multiple clients will only create a single bucket.
    /// If there is already a default bucket set, or the user lacks permission to create one, this call fails.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn initialize_settings(&self, project_id: &str) -> Result<ProjectSettings, Error> {
        let builder = projects::initialize_settings::build(self.inner.endpoint(), self.inner.http(), project_id);
        self.inner.send(builder).await
    }
}

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::http::test::create_client;

    #[tokio::test]
    async fn test_settings() {
        let server = MockServer::start_async().await;
        let get = server
            .mock_async(|when, then| {
                when.method(GET).path("/toolresults/v1beta3/projects/p1/settings");
                then.status(200)
                    .json_body(json!({"name": "projects/p1/settings", "defaultBucket": "test-lab-abc"}));
            })
            .await;
        let init = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/toolresults/v1beta3/projects/p1:initializeSettings")
                    .header("content-length", "0");
                then.status(200).json_body(json!({"name": "projects/p1/settings"}));
            })
            .await;

        let client = create_client(&server);
        let settings = client.projects().get_settings("p1").await.unwrap();
        assert_eq!(settings.default_bucket.as_deref(), Some("test-lab-abc"));
        let settings = client.projects().initialize_settings("p1").await.unwrap();
        assert_eq!(settings.name.as_deref(), Some("projects/p1/settings"));
        assert_eq!(settings.default_bucket, None);
        get.assert_async().await;
        init.assert_async().await;
    }
}
