//! Pagination strategy implementations
//!
//! Each strategy handles one of the two paging styles the API uses.

use super::types::{PaginationState, Paginator};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::response::{ListPayload, ResponseEnvelope};
use crate::types::{LinkDirection, QueryParams, PAGE_NUMBER_PARAM};
use async_trait::async_trait;
use std::marker::PhantomData;
use tracing::debug;

// ============================================================================
// Page Number Pagination
// ============================================================================

/// Page number pagination
///
/// Sends `page-number=N` with every request, starting from the value already
/// present in the caller's parameters (0 if absent), and keeps going while
/// the payload's `pagination.has_more` is true.
pub struct PageNumberPaginator<P> {
    client: HttpClient,
    url: String,
    params: QueryParams,
    state: PaginationState,
    // Reported on the call after the page that hit it
    deferred: Option<Error>,
    _payload: PhantomData<fn() -> P>,
}

impl<P: ListPayload> PageNumberPaginator<P> {
    /// Create a paginator seeded from `params["page-number"]`
    pub fn new(client: HttpClient, url: impl Into<String>, params: QueryParams) -> Result<Self> {
        let start_page = match params.get(PAGE_NUMBER_PARAM) {
            Some(raw) => raw.parse::<u32>().map_err(|_| {
                Error::invalid_param(
                    PAGE_NUMBER_PARAM,
                    format!("expected a non-negative integer, got '{raw}'"),
                )
            })?,
            None => 0,
        };

        Ok(Self {
            client,
            url: url.into(),
            params,
            state: PaginationState::with_page(start_page),
            deferred: None,
            _payload: PhantomData,
        })
    }

    /// Page number the next request will carry
    pub fn current_page(&self) -> u32 {
        self.state.page
    }
}

#[async_trait]
impl<P: ListPayload> Paginator for PageNumberPaginator<P> {
    type Item = P::Item;

    async fn next_page(&mut self) -> Result<Option<Vec<P::Item>>> {
        if let Some(e) = self.deferred.take() {
            self.state.mark_done();
            return Err(e);
        }
        if self.state.done {
            return Ok(None);
        }

        self.params
            .insert(PAGE_NUMBER_PARAM.to_string(), self.state.page.to_string());

        let payload = match self.client.get_data::<P>(&self.url, &self.params).await {
            Ok(payload) => payload,
            Err(e) => {
                self.state.mark_done();
                return Err(e);
            }
        };

        let has_more = payload.pagination().is_some_and(|meta| meta.has_more);
        let items = payload.into_items();
        self.state.record_page(items.len());

        debug!(
            "Fetched page {} of {} ({} records, has_more={})",
            self.state.page,
            self.url,
            items.len(),
            has_more
        );

        if has_more {
            if let Err(e) = self.state.next_page() {
                self.deferred = Some(e);
            }
        } else {
            self.state.mark_done();
        }

        Ok(Some(items))
    }

    fn state(&self) -> &PaginationState {
        &self.state
    }
}

impl<P> std::fmt::Debug for PageNumberPaginator<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageNumberPaginator")
            .field("url", &self.url)
            .field("params", &self.params)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Link Pagination
// ============================================================================

/// Prev/next link pagination
///
/// The first request uses the caller's URL and parameters. Every later
/// request fetches the server-supplied link verbatim, without reapplying the
/// original parameters, until the payload carries no link in the chosen
/// direction.
pub struct LinkPaginator<P> {
    client: HttpClient,
    url: String,
    params: QueryParams,
    direction: LinkDirection,
    pending_link: Option<String>,
    state: PaginationState,
    _payload: PhantomData<fn() -> P>,
}

impl<P: ListPayload> LinkPaginator<P> {
    /// Create a paginator that follows links in `direction`
    pub fn new(
        client: HttpClient,
        url: impl Into<String>,
        params: QueryParams,
        direction: LinkDirection,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            params,
            direction,
            pending_link: None,
            state: PaginationState::new(),
            _payload: PhantomData,
        }
    }

    /// Direction this walk follows
    pub fn direction(&self) -> LinkDirection {
        self.direction
    }

    async fn fetch(&mut self) -> Result<P> {
        match self.pending_link.take() {
            Some(link) => self
                .client
                .fetch_url::<P>(&link)
                .await
                .and_then(ResponseEnvelope::into_data),
            None => self.client.get_data::<P>(&self.url, &self.params).await,
        }
    }
}

#[async_trait]
impl<P: ListPayload> Paginator for LinkPaginator<P> {
    type Item = P::Item;

    async fn next_page(&mut self) -> Result<Option<Vec<P::Item>>> {
        if self.state.done {
            return Ok(None);
        }

        let payload = match self.fetch().await {
            Ok(payload) => payload,
            Err(e) => {
                self.state.mark_done();
                return Err(e);
            }
        };

        let link = payload
            .links()
            .and_then(|links| links.get(self.direction))
            .map(str::to_string);
        let items = payload.into_items();
        self.state.record_page(items.len());

        match link {
            Some(link) => {
                debug!("Following {} link to {}", self.direction, link);
                self.pending_link = Some(link);
            }
            None => self.state.mark_done(),
        }

        Ok(Some(items))
    }

    fn state(&self) -> &PaginationState {
        &self.state
    }
}

impl<P> std::fmt::Debug for LinkPaginator<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkPaginator")
            .field("url", &self.url)
            .field("direction", &self.direction)
            .field("pending_link", &self.pending_link)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
