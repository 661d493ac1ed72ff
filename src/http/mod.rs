//! HTTP client module
//!
//! Provides the request executor and the retry policy behind it.
//!
//! # Features
//!
//! - **Local Auth Check**: Invalid API keys fail before any network call
//! - **Exponential Backoff**: Rate-limited calls are retried with `2^n * base` delays
//! - **Envelope Decoding**: Every body is decoded exactly once into a `ResponseEnvelope`
//! - **Debug Timing**: Optional per-attempt log line with URL, status and latency

mod backoff;
mod client;

pub use backoff::{ExponentialBackoff, RetryState};
pub use client::HttpClient;
