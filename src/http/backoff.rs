//! Exponential backoff for rate-limited requests
//!
//! The policy re-issues a GET until the server answers with a 2xx status or
//! the retry budget is spent. Any non-2xx status is treated as retryable, not
//! only 429. Transport failures are returned immediately.

use crate::auth::Authenticator;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use reqwest::{Client, Response, StatusCode};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Retry bookkeeping for one logical request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryState {
    /// Current attempt counter, starting at 1
    pub retry_count: u32,
    /// Attempt counter at which the policy gives up
    pub max_retries: u32,
    /// Delay unit multiplied by `2^retry_count`
    pub base_delay: Duration,
}

impl RetryState {
    /// Create fresh state for a new request
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            retry_count: 1,
            max_retries,
            base_delay,
        }
    }

    /// Whether another attempt is allowed
    pub fn can_retry(&self) -> bool {
        self.retry_count < self.max_retries
    }

    /// Delay to wait before the next attempt
    pub fn delay(&self) -> Duration {
        let factor = 2u32.saturating_pow(self.retry_count);
        self.base_delay.saturating_mul(factor)
    }

    /// Move to the next attempt
    pub fn advance(&mut self) {
        self.retry_count += 1;
    }
}

/// Retry policy that re-issues a GET with exponential delays
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    client: Client,
    auth: Authenticator,
    debug: bool,
    state: RetryState,
}

impl ExponentialBackoff {
    /// Create a policy with fresh retry state from the client config
    pub fn new(client: Client, auth: Authenticator, config: &ClientConfig) -> Self {
        Self {
            client,
            auth,
            debug: config.debug,
            state: RetryState::new(config.max_retries, config.base_delay()),
        }
    }

    /// Current attempt counter
    pub fn retry_count(&self) -> u32 {
        self.state.retry_count
    }

    /// Override the attempt counter
    pub fn set_retry_count(&mut self, retry_count: u32) {
        self.state.retry_count = retry_count;
    }

    /// Retry state snapshot
    pub fn state(&self) -> RetryState {
        self.state
    }

    /// Issue the request until it succeeds or the budget is exhausted
    pub async fn execute(&mut self, url: &str) -> Result<Response> {
        loop {
            let started = self.debug.then(Instant::now);
            let response = self.auth.apply(self.client.get(url)).send().await?;
            let status = response.status();
            log_attempt(url, status, started);

            if status == StatusCode::TOO_MANY_REQUESTS || !status.is_success() {
                if !self.state.can_retry() {
                    return Err(Error::RateLimitExhausted {
                        status: status.as_u16(),
                        retries: self.state.max_retries,
                    });
                }

                let delay = self.state.delay();
                warn!(
                    "Request failed with {}, attempt {}/{}, retrying in {:?}",
                    status.as_u16(),
                    self.state.retry_count,
                    self.state.max_retries,
                    delay
                );
                tokio::time::sleep(delay).await;
                self.state.advance();
                continue;
            }

            return Ok(response);
        }
    }
}

/// Per-attempt debug line; a no-op unless timing was started
pub(crate) fn log_attempt(url: &str, status: StatusCode, started: Option<Instant>) {
    let Some(started) = started else {
        return;
    };
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    debug!(
        url,
        status = status.as_u16(),
        elapsed_ms,
        "request completed"
    );
}
