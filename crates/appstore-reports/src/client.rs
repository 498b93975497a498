use std::sync::Arc;

use tracing::debug;

use crate::auth::{AuthToken, TokenBuilder, TokenStore};
use crate::config::Config;
use crate::error::ClientError;
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::resource::{FinancesReportsResource, SalesReportsResource};
use crate::transport::{RequestBuilder, Transport};

/// Entry point: owns the configuration, the current token and the transport.
///
/// ```no_run
/// # async fn run() -> Result<(), appstore_reports::ClientError> {
/// use appstore_reports::{Client, Config, SalesReportsFilter};
///
/// let client = Client::new(Config::from_env()?)?;
/// client.init()?;
///
/// let filter = SalesReportsFilter::sales().sub_type_summary().daily().version_1_0();
/// let rows = client.sales_reports().get_sales_reports(&filter).await?.into_data()?;
/// # let _ = rows;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    config: Arc<Config>,
    tokens: Arc<TokenStore>,
    token_builder: TokenBuilder,
    transport: Transport,
}

impl Client {
    pub fn new(config: Config) -> Result<Self, ClientError> {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::default()))
    }

    pub fn with_http_client(config: Config, http: Arc<dyn HttpClient>) -> Result<Self, ClientError> {
        config.validate()?;

        let config = Arc::new(config);
        let tokens = Arc::new(TokenStore::default());
        let builder = RequestBuilder::new(Arc::clone(&config), Arc::clone(&tokens));

        Ok(Self {
            token_builder: TokenBuilder::new(Arc::clone(&config)),
            transport: Transport::new(http, builder),
            config,
            tokens,
        })
    }

    /// Signs a fresh token and swaps it in.
    pub fn init(&self) -> Result<(), ClientError> {
        let token = self
            .token_builder
            .build_auth_token()
            .map_err(|source| ClientError::Token {
                operation: "Client.init",
                source,
            })?;
        self.tokens.replace(token);
        Ok(())
    }

    /// Re-signs only when the current token is empty or expired.
    pub fn ensure_token(&self) -> Result<Arc<AuthToken>, ClientError> {
        let current = self.tokens.current();
        if current.is_valid() {
            return Ok(current);
        }
        debug!("token missing or expired, signing a new one");
        self.init()?;
        Ok(self.tokens.current())
    }

    pub fn token(&self) -> Arc<AuthToken> {
        self.tokens.current()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sales_reports(&self) -> SalesReportsResource {
        SalesReportsResource::new(self.transport.clone(), Arc::clone(&self.config))
    }

    pub fn finances_reports(&self) -> FinancesReportsResource {
        FinancesReportsResource::new(self.transport.clone(), Arc::clone(&self.config))
    }
}
