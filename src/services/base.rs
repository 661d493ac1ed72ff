//! Chains and block heights

use super::page_number_stream;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{BlockHeight, BlockHeightsPage, ChainsPage};
use crate::stream::RecordStream;
use crate::types::{QueryParams, QueryParamsExt, PAGE_NUMBER_PARAM, PAGE_SIZE_PARAM};

/// Query options for the block heights endpoint
#[derive(Debug, Clone, Default)]
pub struct BlockHeightsOptions {
    /// Number of items per page
    pub page_size: Option<u32>,
    /// 0-indexed page to start from
    pub page_number: Option<u32>,
}

impl BlockHeightsOptions {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert_opt(PAGE_SIZE_PARAM, self.page_size);
        params.insert_opt(PAGE_NUMBER_PARAM, self.page_number);
        params
    }
}

/// Chain-level endpoints
#[derive(Debug, Clone)]
pub struct BaseService {
    http: HttpClient,
}

impl BaseService {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List every supported chain
    pub async fn all_chains(&self) -> Result<ChainsPage> {
        self.http.get_data("chains/", &QueryParams::new()).await
    }

    /// Stream the block heights between two dates (or `latest`)
    pub fn block_heights(
        &self,
        chain: &str,
        start_date: &str,
        end_date: &str,
        opts: &BlockHeightsOptions,
    ) -> RecordStream<BlockHeight> {
        page_number_stream::<BlockHeightsPage>(
            &self.http,
            block_heights_path(chain, start_date, end_date),
            opts.to_params(),
        )
    }

    /// Fetch one page of block heights
    pub async fn block_heights_by_page(
        &self,
        chain: &str,
        start_date: &str,
        end_date: &str,
        opts: &BlockHeightsOptions,
    ) -> Result<BlockHeightsPage> {
        self.http
            .get_data(
                &block_heights_path(chain, start_date, end_date),
                &opts.to_params(),
            )
            .await
    }
}

fn block_heights_path(chain: &str, start_date: &str, end_date: &str) -> String {
    format!("{chain}/block_v2/{start_date}/{end_date}/")
}
