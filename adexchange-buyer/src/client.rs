use std::sync::Arc;

use reqwest_middleware::ClientWithMiddleware;
use token_source::{NoopTokenSourceProvider, TokenSourceProvider};

use google_cloud_gax::client::HttpClient;

use crate::http::accounts_client::AccountsClient;
use crate::http::billing_info_client::BillingInfoClient;
use crate::http::budget_client::BudgetClient;
use crate::http::creatives_client::CreativesClient;
use crate::http::marketplace_deals_client::MarketplaceDealsClient;
use crate::http::marketplace_notes_client::MarketplaceNotesClient;
use crate::http::marketplace_private_auction_client::MarketplacePrivateAuctionClient;
use crate::http::performance_report_client::PerformanceReportClient;
use crate::http::pretargeting_config_client::PretargetingConfigClient;
use crate::http::products_client::ProductsClient;
use crate::http::proposals_client::ProposalsClient;
use crate::http::publisher_profiles_client::PublisherProfilesClient;
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
    accounts_client: AccountsClient,
    billing_info_client: BillingInfoClient,
    budget_client: BudgetClient,
    creatives_client: CreativesClient,
    marketplace_deals_client: MarketplaceDealsClient,
    marketplace_notes_client: MarketplaceNotesClient,
    marketplace_private_auction_client: MarketplacePrivateAuctionClient,
    performance_report_client: PerformanceReportClient,
    pretargeting_config_client: PretargetingConfigClient,
    products_client: ProductsClient,
    proposals_client: ProposalsClient,
    publisher_profiles_client: PublisherProfilesClient,
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
            accounts_client: AccountsClient::new(inner.clone()),
            billing_info_client: BillingInfoClient::new(inner.clone()),
            budget_client: BudgetClient::new(inner.clone()),
            creatives_client: CreativesClient::new(inner.clone()),
            marketplace_deals_client: MarketplaceDealsClient::new(inner.clone()),
            marketplace_notes_client: MarketplaceNotesClient::new(inner.clone()),
            marketplace_private_auction_client: MarketplacePrivateAuctionClient::new(inner.clone()),
            performance_report_client: PerformanceReportClient::new(inner.clone()),
            pretargeting_config_client: PretargetingConfigClient::new(inner.clone()),
            products_client: ProductsClient::new(inner.clone()),
            proposals_client: ProposalsClient::new(inner.clone()),
            publisher_profiles_client: PublisherProfilesClient::new(inner),
        }
    }

    pub fn accounts(&self) -> &AccountsClient {
        &self.accounts_client
    }

    pub fn billing_info(&self) -> &BillingInfoClient {
        &self.billing_info_client
    }

    pub fn budget(&self) -> &BudgetClient {
        &self.budget_client
    }

    pub fn creatives(&self) -> &CreativesClient {
        &self.creatives_client
    }

    pub fn marketplace_deals(&self) -> &MarketplaceDealsClient {
        &self.marketplace_deals_client
    }

    pub fn marketplace_notes(&self) -> &MarketplaceNotesClient {
        &self.marketplace_notes_client
    }

    pub fn marketplace_private_auction(&self) -> &MarketplacePrivateAuctionClient {
        &self.marketplace_private_auction_client
    }

    pub fn performance_report(&self) -> &PerformanceReportClient {
        &self.performance_report_client
    }

    pub fn pretargeting_config(&self) -> &PretargetingConfigClient {
        &self.pretargeting_config_client
    }

    pub fn products(&self) -> &ProductsClient {
        &self.products_client
    }

    pub fn proposals(&self) -> &ProposalsClient {
        &self.proposals_client
    }

    pub fn publisher_profiles(&self) -> &PublisherProfilesClient {
        &self.publisher_profiles_client
    }
}
