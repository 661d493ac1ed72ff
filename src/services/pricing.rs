//! Historical token prices

use crate::decode::DATE_FORMAT;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::TokenPrices;
use crate::types::{QueryParams, QueryParamsExt, Quote};
use chrono::NaiveDate;

/// Query options for the historical prices endpoint
#[derive(Debug, Clone, Default)]
pub struct TokenPricesOptions {
    /// First day of the range
    pub from: Option<NaiveDate>,
    /// Last day of the range
    pub to: Option<NaiveDate>,
    /// Oldest prices first
    pub prices_at_asc: Option<bool>,
}

impl TokenPricesOptions {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert_opt("from", self.from.map(|d| d.format(DATE_FORMAT)));
        params.insert_opt("to", self.to.map(|d| d.format(DATE_FORMAT)));
        params.insert_opt("prices-at-asc", self.prices_at_asc);
        params
    }
}

/// Pricing endpoints
#[derive(Debug, Clone)]
pub struct PricingService {
    http: HttpClient,
}

impl PricingService {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Daily prices of one or more comma-separated token contracts
    pub async fn token_prices(
        &self,
        chain: &str,
        quote: Quote,
        contract: &str,
        opts: &TokenPricesOptions,
    ) -> Result<Vec<TokenPrices>> {
        let path = format!("pricing/historical_by_addresses_v2/{chain}/{quote}/{contract}/");
        self.http.get_data(&path, &opts.to_params()).await
    }
}
