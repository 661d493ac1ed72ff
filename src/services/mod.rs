//! Endpoint groups
//!
//! Each service owns a clone of the client's [`HttpClient`] and maps typed
//! arguments onto an endpoint path plus query parameters. Paginated endpoints
//! come in two forms: a streaming method that walks every page on a background
//! task, and a `_by_page` method that returns one page.
//!
//! Streaming methods spawn onto the current tokio runtime.

mod balances;
mod base;
mod pricing;
mod transactions;

pub use balances::{BalanceService, Erc20TransfersOptions};
pub use base::{BaseService, BlockHeightsOptions};
pub use pricing::{PricingService, TokenPricesOptions};
pub use transactions::{TransactionOptions, TransactionService};

use crate::http::HttpClient;
use crate::pagination::{LinkPaginator, PageNumberPaginator};
use crate::response::ListPayload;
use crate::stream::{produce, RecordStream};
use crate::types::{LinkDirection, QueryParams};

/// Stream every record of a page-number endpoint
fn page_number_stream<P: ListPayload>(
    http: &HttpClient,
    path: String,
    params: QueryParams,
) -> RecordStream<P::Item> {
    match PageNumberPaginator::<P>::new(http.clone(), path, params) {
        Ok(paginator) => produce(paginator),
        Err(e) => RecordStream::failed(e),
    }
}

/// Stream every record of a link-paginated endpoint
fn link_stream<P: ListPayload>(
    http: &HttpClient,
    path: String,
    params: QueryParams,
    direction: LinkDirection,
) -> RecordStream<P::Item> {
    produce(LinkPaginator::<P>::new(http.clone(), path, params, direction))
}

#[cfg(test)]
mod tests;
