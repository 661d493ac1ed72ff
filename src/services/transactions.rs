//! Transactions for an address
//!
//! The `transactions_v3` endpoints page by link. The bare endpoint returns the
//! most recent page, and its `prev` link leads to older pages, so the full
//! walk follows `prev`.

use super::link_stream;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::models::{Transaction, TransactionsPage};
use crate::stream::RecordStream;
use crate::types::{LinkDirection, QueryParams, QueryParamsExt, Quote, QUOTE_CURRENCY_PARAM};

/// Query options shared by the `transactions_v3` endpoints
#[derive(Debug, Clone, Default)]
pub struct TransactionOptions {
    pub quote_currency: Option<Quote>,
    /// Omit decoded event logs
    pub no_logs: Option<bool>,
    /// Oldest transactions first
    pub block_signed_at_asc: Option<bool>,
    /// Include safe (multisig) details
    pub with_safe: Option<bool>,
}

impl TransactionOptions {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert_opt(QUOTE_CURRENCY_PARAM, self.quote_currency);
        params.insert_opt("no-logs", self.no_logs);
        params.insert_opt("block-signed-at-asc", self.block_signed_at_asc);
        params.insert_opt("with-safe", self.with_safe);
        params
    }
}

/// Transaction endpoints
#[derive(Debug, Clone)]
pub struct TransactionService {
    http: HttpClient,
}

impl TransactionService {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Stream every transaction of a wallet, newest page first
    pub fn all_transactions_for_address(
        &self,
        chain: &str,
        address: &str,
        opts: &TransactionOptions,
    ) -> RecordStream<Transaction> {
        link_stream::<TransactionsPage>(
            &self.http,
            recent_path(chain, address),
            opts.to_params(),
            LinkDirection::Prev,
        )
    }

    /// Fetch the most recent page of a wallet's transactions
    pub async fn all_transactions_for_address_by_page(
        &self,
        chain: &str,
        address: &str,
        opts: &TransactionOptions,
    ) -> Result<TransactionsPage> {
        self.http
            .get_data(&recent_path(chain, address), &opts.to_params())
            .await
    }

    /// Fetch a specific 0-indexed page of a wallet's transactions
    pub async fn transactions_for_address_v3(
        &self,
        chain: &str,
        address: &str,
        page: u32,
        opts: &TransactionOptions,
    ) -> Result<TransactionsPage> {
        let path = format!("{chain}/address/{address}/transactions_v3/page/{page}/");
        self.http.get_data(&path, &opts.to_params()).await
    }

    /// Fetch the page behind `page.links.next`
    pub async fn next_page(&self, page: &TransactionsPage) -> Result<TransactionsPage> {
        self.follow(page, LinkDirection::Next).await
    }

    /// Fetch the page behind `page.links.prev`
    pub async fn prev_page(&self, page: &TransactionsPage) -> Result<TransactionsPage> {
        self.follow(page, LinkDirection::Prev).await
    }

    async fn follow(
        &self,
        page: &TransactionsPage,
        direction: LinkDirection,
    ) -> Result<TransactionsPage> {
        let links = page
            .links
            .as_ref()
            .ok_or(Error::MissingLink { direction })?;
        self.http.follow_link(links, direction).await
    }
}

fn recent_path(chain: &str, address: &str) -> String {
    format!("{chain}/address/{address}/transactions_v3/")
}
