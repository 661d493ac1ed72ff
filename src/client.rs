//! Top-level client
//!
//! A [`Client`] owns one [`ClientConfig`]. The API key is checked once, at
//! construction, and every service handed out shares the same HTTP client
//! and configuration. Independent clients never share state, so several can
//! coexist in one process with different keys.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::services::{BalanceService, BaseService, PricingService, TransactionService};
use std::sync::Arc;
use tracing::info;

/// Entry point to the API
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
    base: BaseService,
    balances: BalanceService,
    transactions: TransactionService,
    pricing: PricingService,
}

impl Client {
    /// Create a client from a configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::from_shared(Arc::new(config))?;
        info!(
            "Client ready for {} (key valid: {})",
            http.config().base_url,
            http.authenticator().is_valid()
        );

        Ok(Self {
            base: BaseService::new(http.clone()),
            balances: BalanceService::new(http.clone()),
            transactions: TransactionService::new(http.clone()),
            pricing: PricingService::new(http.clone()),
            http,
        })
    }

    /// Create a client from `BLOCKDATA_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Chains and block heights
    pub fn base(&self) -> &BaseService {
        &self.base
    }

    /// Wallet transfers
    pub fn balances(&self) -> &BalanceService {
        &self.balances
    }

    /// Wallet transactions
    pub fn transactions(&self) -> &TransactionService {
        &self.transactions
    }

    /// Historical prices
    pub fn pricing(&self) -> &PricingService {
        &self.pricing
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    /// Underlying HTTP client, for endpoints without a bundled service
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Whether the configured API key has an accepted format
    pub fn is_key_valid(&self) -> bool {
        self.http.authenticator().is_valid()
    }
}
