//! Response envelope module
//!
//! Every endpoint wraps its payload in the same `{data, error, error_code,
//! error_message}` envelope. List-shaped payloads additionally carry either
//! page-number metadata or prev/next links, which drive the paginators.

mod types;

pub use types::{CursorLinks, ItemsPage, ListPayload, PaginationMetadata, ResponseEnvelope};

#[cfg(test)]
mod tests;
