use std::sync::Arc;

use reqwest_middleware::ClientWithMiddleware;
use token_source::{NoopTokenSourceProvider, TokenSourceProvider};

use google_cloud_gax::client::HttpClient;

use crate::http::clusters_client::ClustersClient;
use crate::http::environments_client::EnvironmentsClient;
use crate::http::executions_client::ExecutionsClient;
use crate::http::histories_client::HistoriesClient;
use crate::http::perf_metrics_summary_client::PerfMetricsSummaryClient;
use crate::http::perf_sample_series_client::PerfSampleSeriesClient;
use crate::http::projects_client::ProjectsClient;
use crate::http::samples_client::SamplesClient;
use crate::http::steps_client::StepsClient;
use crate::http::test_cases_client::TestCasesClient;
use crate::http::thumbnails_client::ThumbnailsClient;
use crate::http::{ENDPOINT, SCOPES, USER_AGENT};

#[derive(Debug)]
pub struct ClientConfig {
    pub http: Option<ClientWithMiddleware>,
    pub endpoint: String,
    pub token_source_provider: Option<Box<dyn TokenSourceProvider>>,
    pub project_id: Option<String>,
    /// Logs every response body when enabled.
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            http: None,
            endpoint: ENDPOINT.to_string(),
            token_source_provider: Some(Box::new(NoopTokenSourceProvider {})),
            project_id: None,
            debug: false,
        }
    }
}

impl ClientConfig {
    pub fn anonymous(mut self) -> Self {
        self.token_source_provider = None;
        self
    }
}

#[cfg(feature = "auth")]
pub use google_cloud_auth;

#[cfg(feature = "auth")]
impl ClientConfig {
    pub async fn with_auth(self) -> Result<Self, google_cloud_auth::error::Error> {
        let ts = google_cloud_auth::token::DefaultTokenSourceProvider::new(Self::auth_config()).await?;
        Ok(self.with_token_source(ts))
    }

    pub async fn with_credentials(
        self,
        credentials: google_cloud_auth::credentials::CredentialsFile,
    ) -> Result<Self, google_cloud_auth::error::Error> {
        let ts = google_cloud_auth::token::DefaultTokenSourceProvider::new_with_credentials(
            Self::auth_config(),
            Box::new(credentials),
        )
        .await?;
        Ok(self.with_token_source(ts))
    }

    fn with_token_source(mut self, ts: google_cloud_auth::token::DefaultTokenSourceProvider) -> Self {
        self.project_id = ts.project_id.clone();
        self.token_source_provider = Some(Box::new(ts));
        self
    }

    fn auth_config() -> google_cloud_auth::project::Config<'static> {
        google_cloud_auth::project::Config::default().with_scopes(&SCOPES)
    }
}

#[derive(Clone, Debug)]
pub struct Client {
    projects_client: ProjectsClient,
    histories_client: HistoriesClient,
    executions_client: ExecutionsClient,
    clusters_client: ClustersClient,
    environments_client: EnvironmentsClient,
    steps_client: StepsClient,
    perf_metrics_summary_client: PerfMetricsSummaryClient,
    perf_sample_series_client: PerfSampleSeriesClient,
    samples_client: SamplesClient,
    test_cases_client: TestCasesClient,
    thumbnails_client: ThumbnailsClient,
    project_id: Option<String>,
}

impl Client {
    /// New client.
    ///
    /// The default `ClientConfig` carries a placeholder token source provider: call `with_auth()`,
    /// `with_credentials()` or `anonymous()` before creating the client.
    pub fn new(config: ClientConfig) -> Self {
        let ts = match config.token_source_provider {
            Some(tsp) => Some(tsp.token_source()),
            None => {
                tracing::trace!("Use anonymous access due to lack of token");
                None
            }
        };
        let http = config
            .http
            .unwrap_or_else(|| reqwest_middleware::ClientBuilder::new(reqwest::Client::default()).build());
        let inner = Arc::new(
            HttpClient::new(ts, config.endpoint.as_str(), http)
                .with_user_agent(USER_AGENT)
                .with_debug(config.debug),
        );
        Self {
            projects_client: ProjectsClient::new(inner.clone()),
            histories_client: HistoriesClient::new(inner.clone()),
            executions_client: ExecutionsClient::new(inner.clone()),
            clusters_client: ClustersClient::new(inner.clone()),
            environments_client: EnvironmentsClient::new(inner.clone()),
            steps_client: StepsClient::new(inner.clone()),
            perf_metrics_summary_client: PerfMetricsSummaryClient::new(inner.clone()),
            perf_sample_series_client: PerfSampleSeriesClient::new(inner.clone()),
            samples_client: SamplesClient::new(inner.clone()),
            test_cases_client: TestCasesClient::new(inner.clone()),
            thumbnails_client: ThumbnailsClient::new(inner),
            project_id: config.project_id,
        }
    }

    pub fn projects(&self) -> &ProjectsClient {
        &self.projects_client
    }

    pub fn histories(&self) -> &HistoriesClient {
        &self.histories_client
    }

    pub fn executions(&self) -> &ExecutionsClient {
        &self.executions_client
    }

    /// Screenshot clusters of an execution.
    pub fn clusters(&self) -> &ClustersClient {
        &self.clusters_client
    }

    pub fn environments(&self) -> &EnvironmentsClient {
        &self.environments_client
    }

    pub fn steps(&self) -> &StepsClient {
        &self.steps_client
    }

    pub fn perf_metrics_summary(&self) -> &PerfMetricsSummaryClient {
        &self.perf_metrics_summary_client
    }

    pub fn perf_sample_series(&self) -> &PerfSampleSeriesClient {
        &self.perf_sample_series_client
    }

    /// Samples of a perf sample series.
    pub fn samples(&self) -> &SamplesClient {
        &self.samples_client
    }

    pub fn test_cases(&self) -> &TestCasesClient {
        &self.test_cases_client
    }

    pub fn thumbnails(&self) -> &ThumbnailsClient {
        &self.thumbnails_client
    }

    /// The project id discovered from the credentials, if any.
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }
}
