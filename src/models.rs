//! Item schemas for the bundled services
//!
//! Schemas are partial: the fields the SDK and CLI work with are named, and
//! every other field the server sends is kept in `extra` so nothing is lost
//! when a record is re-serialized.

use crate::decode::BigInt;
use crate::response::ItemsPage;
use crate::types::JsonObject;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A supported chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chain {
    /// Chain name, e.g. `eth-mainnet`
    #[serde(default)]
    pub name: Option<String>,
    /// Chain ID as a decimal string
    #[serde(default)]
    pub chain_id: Option<String>,
    #[serde(default)]
    pub is_testnet: Option<bool>,
    /// Display label, e.g. `Ethereum Mainnet`
    #[serde(default)]
    pub label: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// First block signed at or after a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockHeight {
    #[serde(default)]
    pub signed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub height: Option<u64>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A transaction as returned by the transaction endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub block_signed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub block_height: Option<u64>,
    #[serde(default)]
    pub block_hash: Option<String>,
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub successful: Option<bool>,
    #[serde(default)]
    pub from_address: Option<String>,
    #[serde(default)]
    pub to_address: Option<String>,
    /// Value attached to the transaction, in wei
    #[serde(default, with = "crate::decode::big_int")]
    pub value: Option<BigInt>,
    /// Value in the requested quote currency
    #[serde(default)]
    pub value_quote: Option<f64>,
    /// `gas_price * gas_spent`, in wei
    #[serde(default, with = "crate::decode::big_int")]
    pub fees_paid: Option<BigInt>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A transaction together with the ERC20 transfers it carried
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Erc20Transfer {
    #[serde(default)]
    pub block_signed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub block_height: Option<u64>,
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub successful: Option<bool>,
    #[serde(default)]
    pub from_address: Option<String>,
    #[serde(default)]
    pub to_address: Option<String>,
    #[serde(default, with = "crate::decode::big_int")]
    pub value: Option<BigInt>,
    #[serde(default, with = "crate::decode::big_int")]
    pub fees_paid: Option<BigInt>,
    #[serde(default)]
    pub transfers: Vec<TokenTransfer>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// One token movement inside a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenTransfer {
    #[serde(default)]
    pub contract_address: Option<String>,
    #[serde(default)]
    pub contract_ticker_symbol: Option<String>,
    #[serde(default)]
    pub contract_decimals: Option<u32>,
    /// `IN` or `OUT` relative to the requested wallet
    #[serde(default)]
    pub transfer_type: Option<String>,
    #[serde(default, with = "crate::decode::big_int")]
    pub delta: Option<BigInt>,
    #[serde(default, with = "crate::decode::big_int")]
    pub balance: Option<BigInt>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Historical prices for one token contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPrices {
    #[serde(default)]
    pub contract_name: Option<String>,
    #[serde(default)]
    pub contract_ticker_symbol: Option<String>,
    #[serde(default)]
    pub contract_address: Option<String>,
    #[serde(default)]
    pub contract_decimals: Option<u32>,
    #[serde(default)]
    pub quote_currency: Option<String>,
    #[serde(default)]
    pub prices: Vec<Price>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Price of a token on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Day the price was captured (`YYYY-MM-DD`)
    #[serde(default, with = "crate::decode::date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub pretty_price: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// `chains/` payload
pub type ChainsPage = ItemsPage<Chain>;

/// `block_v2/{start}/{end}/` payload, paged by number
pub type BlockHeightsPage = ItemsPage<BlockHeight>;

/// `transfers_v2/` payload, paged by number
pub type Erc20TransfersPage = ItemsPage<Erc20Transfer>;

/// `transactions_v3/` payload, paged by link
pub type TransactionsPage = ItemsPage<Transaction>;
