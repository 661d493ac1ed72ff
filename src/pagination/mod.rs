//! Pagination module
//!
//! Supports: Page Number, Prev/Next Link
//!
//! # Overview
//!
//! Both strategies implement the [`Paginator`] trait, so the streaming
//! producer and single-page callers depend on one contract. Each call to
//! [`Paginator::next_page`] performs exactly one logical fetch through the
//! HTTP client; retries happen below this layer, never here.

mod strategies;
mod types;

pub use strategies::{LinkPaginator, PageNumberPaginator};
pub use types::{PaginationState, Paginator};
