//! Pagination types and traits
//!
//! Defines the core pagination abstraction shared by both strategies.

use crate::error::{Error, Result};
use crate::types::PAGE_NUMBER_PARAM;
use async_trait::async_trait;

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Page number sent with the next request (page-number strategy only)
    pub page: u32,
    /// Pages fetched so far
    pub pages_fetched: u64,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state with a starting page
    pub fn with_page(page: u32) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Increment page number; fails once the counter would wrap
    pub fn next_page(&mut self) -> Result<()> {
        self.page = self.page.checked_add(1).ok_or_else(|| {
            Error::invalid_param(
                PAGE_NUMBER_PARAM,
                format!("page number overflow after page {}", self.page),
            )
        })?;
        Ok(())
    }

    /// Account for one fetched page
    pub fn record_page(&mut self, records: usize) {
        self.pages_fetched += 1;
        self.total_fetched += records as u64;
    }
}

/// A walk over a paginated endpoint, one page per call
///
/// Both the streaming producer and single-page callers drive pages through
/// this trait, regardless of whether the endpoint pages by number or by link.
#[async_trait]
pub trait Paginator: Send {
    /// One record of a page
    type Item: Send + 'static;

    /// Fetch the next page.
    ///
    /// Returns `Ok(None)` once the walk is complete. An error also completes
    /// the walk; errors are never retried at this level.
    async fn next_page(&mut self) -> Result<Option<Vec<Self::Item>>>;

    /// Current pagination state
    fn state(&self) -> &PaginationState;

    /// Whether no further pages will be fetched
    fn is_done(&self) -> bool {
        self.state().done
    }

    /// Drain every remaining page into one vector
    async fn collect_all(&mut self) -> Result<Vec<Self::Item>> {
        let mut all = Vec::new();
        while let Some(items) = self.next_page().await? {
            all.extend(items);
        }
        Ok(all)
    }
}
