//! Authenticator implementation
//!
//! Validates API keys locally and applies authentication headers to requests.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;
use std::fmt;

/// Message returned whenever a request is attempted with a bad key
pub const INVALID_API_KEY_MESSAGE: &str =
    "invalid or missing API key (sign up at covalenthq.com/platform)";

/// Header identifying the SDK to the server
pub(crate) const CLIENT_HEADER: &str = "X-Requested-With";

static API_KEY_V1: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ckey_([a-f0-9]{27})$").expect("valid v1 key pattern"));

static API_KEY_V2: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^cqt_(wF|rQ)([bcdfghjkmpqrtvwxyBCDFGHJKMPQRTVWXY346789]{26})$")
        .expect("valid v2 key pattern")
});

/// Check whether a key matches either accepted format
pub fn is_valid_api_key(key: &str) -> bool {
    API_KEY_V1.is_match(key) || API_KEY_V2.is_match(key)
}

/// Authenticator applies the API key to HTTP requests
#[derive(Clone)]
pub struct Authenticator {
    /// Raw API key
    api_key: String,
    /// Result of the format check done at construction
    valid: bool,
    /// Value for the client-identifying header
    user_agent: String,
}

impl Authenticator {
    /// Create a new authenticator, validating the key format once
    pub fn new(api_key: impl Into<String>, user_agent: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let valid = is_valid_api_key(&api_key);
        Self {
            api_key,
            valid,
            user_agent: user_agent.into(),
        }
    }

    /// Whether the key passed the format check
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Fail with an auth error if the key is unusable
    pub fn ensure_valid(&self) -> Result<()> {
        if self.valid {
            Ok(())
        } else {
            Err(Error::auth(INVALID_API_KEY_MESSAGE))
        }
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CLIENT_HEADER, self.user_agent.as_str())
    }
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authenticator")
            .field("valid", &self.valid)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}
