// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Blockdata SDK
//!
//! Typed async client for a blockchain data REST API, built around a
//! resilient paginated-fetch layer.
//!
//! ## Features
//!
//! - **Local Key Check**: Malformed API keys fail before any network call
//! - **Exponential Backoff**: Rate-limited requests are retried with `2^n * base` delays
//! - **Two Pagination Styles**: Page-number and prev/next link walks behind one trait
//! - **Streaming**: Every record of a paginated endpoint, one at a time, cancellable
//! - **Exact Values**: Wei amounts as signed `BigInt` over `U256`, price dates as `NaiveDate`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use blockdata_sdk::{Client, ClientConfig, Result};
//! use blockdata_sdk::services::Erc20TransfersOptions;
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new(ClientConfig::new("cqt_..."))?;
//!
//!     // One page
//!     let chains = client.base().all_chains().await?;
//!
//!     // Every page, streamed
//!     let mut transfers = client.balances().erc20_transfers(
//!         "eth-mainnet",
//!         "0x...",
//!         &Erc20TransfersOptions::default(),
//!     );
//!     while let Some(record) = transfers.next().await {
//!         let transfer = record?;
//!         // Process transfer
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Client / Services                         │
//! │  base()   balances()   transactions()   pricing()               │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴───────────┬──────────────────────┐
//! │    Stream    │         Paginate          │       Decode         │
//! ├──────────────┼───────────────────────────┼──────────────────────┤
//! │ produce()    │ Page Number (has_more)    │ Envelope             │
//! │ RecordStream │ Prev/Next Link            │ BigInt / NaiveDate   │
//! └──────────────┴───────────────┬───────────┴──────────────────────┘
//!                                │
//! ┌──────────────────────────────┴──────────────────────────────────┐
//! │  HttpClient: key check → GET → 429? → ExponentialBackoff → JSON │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document model fields before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the SDK
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// API key validation and request authentication
pub mod auth;

/// Response envelope and list payloads
pub mod response;

/// Value decoders (big integers, dates)
pub mod decode;

/// HTTP client with exponential backoff
pub mod http;

/// Pagination strategies
pub mod pagination;

/// Streaming producer
pub mod stream;

/// Item schemas
pub mod models;

/// Endpoint groups
pub mod services;

/// Top-level client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use pagination::{LinkPaginator, PageNumberPaginator, Paginator};
pub use response::{CursorLinks, ItemsPage, PaginationMetadata, ResponseEnvelope};
pub use stream::{produce, RecordStream, StreamRecord};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
