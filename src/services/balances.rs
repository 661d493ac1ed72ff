//! Wallet balances and transfers

use super::page_number_stream;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{Erc20Transfer, Erc20TransfersPage};
use crate::stream::RecordStream;
use crate::types::{
    QueryParams, QueryParamsExt, Quote, PAGE_NUMBER_PARAM, PAGE_SIZE_PARAM, QUOTE_CURRENCY_PARAM,
};

/// Query options for the ERC20 transfers endpoint
#[derive(Debug, Clone, Default)]
pub struct Erc20TransfersOptions {
    pub quote_currency: Option<Quote>,
    /// Restrict to transfers of one token contract
    pub contract_address: Option<String>,
    pub starting_block: Option<u64>,
    pub ending_block: Option<u64>,
    pub page_size: Option<u32>,
    /// 0-indexed page to start from
    pub page_number: Option<u32>,
}

impl Erc20TransfersOptions {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert_opt(QUOTE_CURRENCY_PARAM, self.quote_currency);
        params.insert_opt("contract-address", self.contract_address.as_deref());
        params.insert_opt("starting-block", self.starting_block);
        params.insert_opt("ending-block", self.ending_block);
        params.insert_opt(PAGE_SIZE_PARAM, self.page_size);
        params.insert_opt(PAGE_NUMBER_PARAM, self.page_number);
        params
    }
}

/// Balance-related endpoints
#[derive(Debug, Clone)]
pub struct BalanceService {
    http: HttpClient,
}

impl BalanceService {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Stream every ERC20 transfer-bearing transaction of a wallet
    pub fn erc20_transfers(
        &self,
        chain: &str,
        address: &str,
        opts: &Erc20TransfersOptions,
    ) -> RecordStream<Erc20Transfer> {
        page_number_stream::<Erc20TransfersPage>(
            &self.http,
            transfers_path(chain, address),
            opts.to_params(),
        )
    }

    /// Fetch one page of ERC20 transfers
    pub async fn erc20_transfers_by_page(
        &self,
        chain: &str,
        address: &str,
        opts: &Erc20TransfersOptions,
    ) -> Result<Erc20TransfersPage> {
        self.http
            .get_data(&transfers_path(chain, address), &opts.to_params())
            .await
    }
}

fn transfers_path(chain: &str, address: &str) -> String {
    format!("{chain}/address/{address}/transfers_v2/")
}
