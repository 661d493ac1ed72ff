//! Common types used throughout the blockdata SDK
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Query parameters for a request, kept sorted so URLs are deterministic
pub type QueryParams = BTreeMap<String, String>;

// ============================================================================
// Well-known query parameter names
// ============================================================================

/// 0-indexed page number parameter
pub const PAGE_NUMBER_PARAM: &str = "page-number";

/// Page size parameter
pub const PAGE_SIZE_PARAM: &str = "page-size";

/// Quote currency parameter
pub const QUOTE_CURRENCY_PARAM: &str = "quote-currency";

/// Page size the API applies when none is requested
pub const DEFAULT_PAGE_SIZE: u32 = 100;

// ============================================================================
// Link Direction
// ============================================================================

/// Which server-supplied link a cursor walk follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkDirection {
    /// Follow `links.next`
    #[default]
    Next,
    /// Follow `links.prev`
    Prev,
}

impl fmt::Display for LinkDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkDirection::Next => f.write_str("next"),
            LinkDirection::Prev => f.write_str("prev"),
        }
    }
}

// ============================================================================
// Quote Currency
// ============================================================================

/// Fiat currency used to quote token values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Quote {
    #[default]
    Usd,
    Cad,
    Eur,
    Sgd,
    Inr,
    Jpy,
    Vnd,
    Cny,
    Krw,
    Rub,
    Try,
    Ngn,
    Ars,
    Aud,
    Chf,
    Gbp,
}

impl Quote {
    /// Currency code as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Quote::Usd => "USD",
            Quote::Cad => "CAD",
            Quote::Eur => "EUR",
            Quote::Sgd => "SGD",
            Quote::Inr => "INR",
            Quote::Jpy => "JPY",
            Quote::Vnd => "VND",
            Quote::Cny => "CNY",
            Quote::Krw => "KRW",
            Quote::Rub => "RUB",
            Quote::Try => "TRY",
            Quote::Ngn => "NGN",
            Quote::Ars => "ARS",
            Quote::Aud => "AUD",
            Quote::Chf => "CHF",
            Quote::Gbp => "GBP",
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Quote {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let quote = match s.to_ascii_uppercase().as_str() {
            "USD" => Quote::Usd,
            "CAD" => Quote::Cad,
            "EUR" => Quote::Eur,
            "SGD" => Quote::Sgd,
            "INR" => Quote::Inr,
            "JPY" => Quote::Jpy,
            "VND" => Quote::Vnd,
            "CNY" => Quote::Cny,
            "KRW" => Quote::Krw,
            "RUB" => Quote::Rub,
            "TRY" => Quote::Try,
            "NGN" => Quote::Ngn,
            "ARS" => Quote::Ars,
            "AUD" => Quote::Aud,
            "CHF" => Quote::Chf,
            "GBP" => Quote::Gbp,
            other => {
                return Err(crate::error::Error::invalid_param(
                    QUOTE_CURRENCY_PARAM,
                    format!("unsupported quote currency '{other}'"),
                ))
            }
        };
        Ok(quote)
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for building query parameters from optional values
pub trait QueryParamsExt {
    /// Insert `key=value` only when the value is present
    fn insert_opt<V: ToString>(&mut self, key: &str, value: Option<V>);
}

impl QueryParamsExt for QueryParams {
    fn insert_opt<V: ToString>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key.to_string(), value.to_string());
        }
    }
}
