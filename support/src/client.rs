use std::sync::Arc;

use reqwest_middleware::ClientWithMiddleware;
use token_source::{NoopTokenSourceProvider, TokenSourceProvider};

use google_cloud_gax::client::HttpClient;

use crate::http::attachments_client::AttachmentsClient;
use crate::http::case_classifications_client::CaseClassificationsClient;
use crate::http::cases_client::CasesClient;
use crate::http::comments_client::CommentsClient;
use crate::http::media_client::MediaClient;
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
    case_classifications_client: CaseClassificationsClient,
    cases_client: CasesClient,
    attachments_client: AttachmentsClient,
    comments_client: CommentsClient,
    media_client: MediaClient,
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
            case_classifications_client: CaseClassificationsClient::new(inner.clone()),
            cases_client: CasesClient::new(inner.clone()),
            attachments_client: AttachmentsClient::new(inner.clone()),
            comments_client: CommentsClient::new(inner.clone()),
            media_client: MediaClient::new(inner),
            project_id: config.project_id,
        }
    }

    pub fn case_classifications(&self) -> &CaseClassificationsClient {
        &self.case_classifications_client
    }

    pub fn cases(&self) -> &CasesClient {
        &self.cases_client
    }

    pub fn attachments(&self) -> &AttachmentsClient {
        &self.attachments_client
    }

    pub fn comments(&self) -> &CommentsClient {
        &self.comments_client
    }

    /// Attachment uploads and downloads.
    pub fn media(&self) -> &MediaClient {
        &self.media_client
    }

    /// The project id discovered from the credentials, if any.
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }
}
