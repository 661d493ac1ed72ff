//! Error types for the blockdata SDK
//!
//! This module defines the error hierarchy for the entire SDK.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use crate::types::LinkDirection;
use thiserror::Error;

/// Message substituted when the API flags an error without explaining it
pub const DEFAULT_ERROR_MESSAGE: &str = "default error message";

/// The main error type for the blockdata SDK
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error("An error occurred 401: {message}")]
    Auth { message: String },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("max retries exceeded: {retries} (last status {status})")]
    RateLimitExhausted { status: u16, retries: u32 },

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("An error occurred {}: {message}", code.map_or_else(|| "unknown".to_string(), |c| c.to_string()))]
    Api { code: Option<i64>, message: String },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid URL: {direction} link cannot be null")]
    MissingLink { direction: LinkDirection },

    #[error("Invalid value for parameter '{name}': {message}")]
    InvalidParam { name: String, message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an API error, substituting the default message when absent
    pub fn api(code: Option<i64>, message: Option<String>) -> Self {
        Self::Api {
            code,
            message: message.unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParam {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// HTTP status associated with this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Auth { .. } => Some(401),
            Error::RateLimitExhausted { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            Error::Api { code, .. } => code.and_then(|c| u16::try_from(c).ok()),
            _ => None,
        }
    }

    /// Whether the error came from the client side before reaching the network
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Error::Auth { .. }
                | Error::InvalidUrl(_)
                | Error::MissingLink { .. }
                | Error::InvalidParam { .. }
                | Error::Config { .. }
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::decode(e.to_string())
    }
}

/// Result type alias for the blockdata SDK
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::auth("invalid key");
        assert_eq!(err.to_string(), "An error occurred 401: invalid key");

        let err = Error::RateLimitExhausted {
            status: 429,
            retries: 5,
        };
        assert_eq!(
            err.to_string(),
            "max retries exceeded: 5 (last status 429)"
        );

        let err = Error::api(Some(404), Some("Not found".to_string()));
        assert_eq!(err.to_string(), "An error occurred 404: Not found");
    }

    #[test]
    fn test_api_error_default_message() {
        let err = Error::api(None, None);
        match &err {
            Error::Api { code, message } => {
                assert!(code.is_none());
                assert_eq!(message, DEFAULT_ERROR_MESSAGE);
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            format!("An error occurred unknown: {DEFAULT_ERROR_MESSAGE}")
        );
    }

    #[test]
    fn test_missing_link_display() {
        let err = Error::MissingLink {
            direction: LinkDirection::Next,
        };
        assert_eq!(err.to_string(), "Invalid URL: next link cannot be null");
    }

    #[test]
    fn test_status() {
        assert_eq!(Error::auth("x").status(), Some(401));
        assert_eq!(
            Error::RateLimitExhausted {
                status: 503,
                retries: 3
            }
            .status(),
            Some(503)
        );
        assert_eq!(Error::api(Some(400), None).status(), Some(400));
        assert_eq!(Error::decode("bad").status(), None);
    }

    #[test]
    fn test_is_local() {
        assert!(Error::auth("x").is_local());
        assert!(Error::invalid_param("page-number", "not a number").is_local());
        assert!(!Error::decode("bad").is_local());
        assert!(!Error::api(Some(500), None).is_local());
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Decode { .. }));
    }
}
