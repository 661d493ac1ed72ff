//! Request executor
//!
//! Provides the HTTP client every endpoint goes through:
//! - Local API key check before any network call
//! - Single GET with bearer auth and the client header
//! - Hand-off to the retry policy on 429
//! - Envelope decoding, once per logical fetch

use super::backoff::{log_attempt, ExponentialBackoff};
use crate::auth::Authenticator;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::response::{CursorLinks, ListPayload, ResponseEnvelope};
use crate::types::{LinkDirection, QueryParams};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};
use url::Url;

/// HTTP client that performs one logical GET per call
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: Arc<ClientConfig>,
    auth: Authenticator,
}

impl HttpClient {
    /// Create a client that owns the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::from_shared(Arc::new(config))
    }

    /// Create a client from a configuration shared with other components
    pub fn from_shared(config: Arc<ClientConfig>) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        let auth = Authenticator::new(config.api_key.clone(), config.user_agent.clone());
        if !auth.is_valid() {
            warn!("API key does not match a known format; requests will be rejected locally");
        }

        Ok(Self {
            client,
            config,
            auth,
        })
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Authenticator built from the configured key
    pub fn authenticator(&self) -> &Authenticator {
        &self.auth
    }

    /// Retry policy with fresh state for one logical request
    pub fn backoff(&self) -> ExponentialBackoff {
        ExponentialBackoff::new(self.client.clone(), self.auth.clone(), &self.config)
    }

    /// Resolve a path or absolute URL and merge query parameters into it.
    ///
    /// Parameters replace any query pair of the same name already present.
    pub fn build_url(&self, url: &str, params: &QueryParams) -> Result<Url> {
        let full = if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            self.config.endpoint(url)
        };
        let mut parsed = Url::parse(&full)?;

        if !params.is_empty() {
            let kept: Vec<(String, String)> = parsed
                .query_pairs()
                .filter(|(k, _)| !params.contains_key(k.as_ref()))
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();

            let mut pairs = parsed.query_pairs_mut();
            pairs.clear();
            pairs.extend_pairs(kept);
            pairs.extend_pairs(params.iter());
        }

        Ok(parsed)
    }

    /// Fetch `url` with `params` and decode the envelope
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &QueryParams,
    ) -> Result<ResponseEnvelope<T>> {
        self.auth.ensure_valid()?;
        let url = self.build_url(url, params)?;
        self.execute(url).await
    }

    /// Fetch a complete server-supplied URL as-is
    pub async fn fetch_url<T: DeserializeOwned>(&self, url: &str) -> Result<ResponseEnvelope<T>> {
        self.auth.ensure_valid()?;
        let url = Url::parse(url)?;
        self.execute(url).await
    }

    /// Fetch and unwrap the envelope's payload
    pub async fn get_data<T: DeserializeOwned>(&self, url: &str, params: &QueryParams) -> Result<T> {
        self.fetch::<T>(url, params).await?.into_data()
    }

    /// Fetch the page behind one of a payload's links
    pub async fn follow_link<P: ListPayload>(
        &self,
        links: &CursorLinks,
        direction: LinkDirection,
    ) -> Result<P> {
        let link = links
            .get(direction)
            .ok_or(Error::MissingLink { direction })?;
        self.fetch_url::<P>(link).await?.into_data()
    }

    async fn execute<T: DeserializeOwned>(&self, url: Url) -> Result<ResponseEnvelope<T>> {
        let started = self.config.debug.then(Instant::now);
        let response = self.auth.apply(self.client.get(url.clone())).send().await?;
        log_attempt(url.as_str(), response.status(), started);

        let response = if response.status() == StatusCode::TOO_MANY_REQUESTS {
            debug!("Rate limited (429), handing {} to backoff", url);
            let mut backoff = self.backoff();
            backoff.execute(url.as_str()).await?
        } else {
            response
        };

        decode_envelope(response).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("key_valid", &self.auth.is_valid())
            .finish_non_exhaustive()
    }
}

/// Read the body and decode it into an envelope
async fn decode_envelope<T: DeserializeOwned>(response: Response) -> Result<ResponseEnvelope<T>> {
    let status = response.status();
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| {
        Error::decode(format!(
            "HTTP {} body is not a valid envelope: {e}",
            status.as_u16()
        ))
    })
}
