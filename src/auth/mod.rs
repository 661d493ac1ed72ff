//! Authentication module
//!
//! Supports: bearer API keys in the two formats the API issues
//!
//! The `Authenticator` validates the key once when a client is built and
//! stamps every outgoing request with the bearer token and the
//! client-identifying header.

mod authenticator;

pub use authenticator::{is_valid_api_key, Authenticator, INVALID_API_KEY_MESSAGE};

#[cfg(test)]
mod tests;
