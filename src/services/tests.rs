//! Tests for the bundled services

use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::http::HttpClient;
use crate::models::TransactionsPage;
use crate::response::CursorLinks;
use crate::types::{LinkDirection, Quote};
use crate::decode::BigInt;
use chrono::NaiveDate;
use futures::StreamExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_KEY: &str = "cqt_wFbcdfghjkmpqrtvwxyBCDFGHJKM";

fn http(server: &MockServer) -> HttpClient {
    let config = ClientConfig::builder(TEST_KEY)
        .base_url(server.uri())
        .base_delay(Duration::from_millis(1))
        .max_retries(2)
        .build();
    HttpClient::new(config).unwrap()
}

fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "data": data,
        "error": false,
        "error_code": null,
        "error_message": null
    }))
}

#[tokio::test]
async fn test_all_chains() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chains/"))
        .respond_with(ok(json!({
            "updated_at": "2024-01-01T00:00:00Z",
            "items": [
                {"name": "eth-mainnet", "chain_id": "1", "is_testnet": false, "label": "Ethereum Mainnet"},
                {"name": "eth-sepolia", "chain_id": "11155111", "is_testnet": true}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let chains = BaseService::new(http(&server)).all_chains().await.unwrap();
    assert_eq!(chains.items.len(), 2);
    assert_eq!(chains.items[0].label.as_deref(), Some("Ethereum Mainnet"));
    assert_eq!(chains.items[1].is_testnet, Some(true));
    assert_eq!(chains.meta_str("updated_at"), Some("2024-01-01T00:00:00Z"));
}

#[tokio::test]
async fn test_block_heights_stream() {
    let server = MockServer::start().await;
    for (page, height, more) in [(2, 100, true), (3, 101, false)] {
        Mock::given(method("GET"))
            .and(path("/eth-mainnet/block_v2/2023-01-01/2023-01-02/"))
            .and(query_param("page-number", page.to_string().as_str()))
            .and(query_param("page-size", "1"))
            .respond_with(ok(json!({
                "items": [{"signed_at": "2023-01-01T00:00:11Z", "height": height}],
                "pagination": {"has_more": more, "page_number": page, "page_size": 1, "total_count": null}
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let opts = BlockHeightsOptions {
        page_size: Some(1),
        page_number: Some(2),
    };
    let heights: Vec<u64> = BaseService::new(http(&server))
        .block_heights("eth-mainnet", "2023-01-01", "2023-01-02", &opts)
        .map(|r| r.unwrap().height.unwrap())
        .collect()
        .await;
    assert_eq!(heights, vec![100, 101]);
}

#[tokio::test]
async fn test_block_heights_by_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/eth-mainnet/block_v2/2023-01-01/latest/"))
        .respond_with(ok(json!({
            "items": [{"height": 1}],
            "pagination": {"has_more": true, "page_number": 0, "page_size": 100, "total_count": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = BaseService::new(http(&server))
        .block_heights_by_page("eth-mainnet", "2023-01-01", "latest", &BlockHeightsOptions::default())
        .await
        .unwrap();
    assert!(page.pagination.unwrap().has_more);
    assert_eq!(page.items[0].height, Some(1));
}

#[tokio::test]
async fn test_erc20_transfers_stream_with_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/eth-mainnet/address/0xwallet/transfers_v2/"))
        .and(query_param("contract-address", "0xtoken"))
        .and(query_param("quote-currency", "EUR"))
        .and(query_param("starting-block", "10"))
        .and(query_param("page-number", "0"))
        .respond_with(ok(json!({
            "address": "0xwallet",
            "items": [
                {"tx_hash": "0x1", "value": "0", "transfers": [{"delta": "5", "transfer_type": "IN"}]},
                {"tx_hash": "0x2", "value": "7", "transfers": []}
            ],
            "pagination": {"has_more": false, "page_number": 0, "page_size": 100, "total_count": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let opts = Erc20TransfersOptions {
        quote_currency: Some(Quote::Eur),
        contract_address: Some("0xtoken".to_string()),
        starting_block: Some(10),
        ..Default::default()
    };
    let records: Vec<_> = BalanceService::new(http(&server))
        .erc20_transfers("eth-mainnet", "0xwallet", &opts)
        .collect()
        .await;

    assert_eq!(records.len(), 2);
    let first = records[0].as_ref().unwrap();
    assert_eq!(first.transfers[0].delta, Some(BigInt::from(5u64)));
    let second = records[1].as_ref().unwrap();
    assert_eq!(second.value, Some(BigInt::from(7u64)));
}

#[tokio::test]
async fn test_erc20_transfers_invalid_key_stream() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = ClientConfig::builder("bad-key").base_url(server.uri()).build();
    let service = BalanceService::new(HttpClient::new(config).unwrap());
    let records: Vec<_> = service
        .erc20_transfers("eth-mainnet", "0xwallet", &Erc20TransfersOptions::default())
        .collect()
        .await;

    assert_eq!(records.len(), 1);
    assert!(matches!(records[0], Err(Error::Auth { .. })));
}

#[tokio::test]
async fn test_all_transactions_walks_prev_links() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/eth-mainnet/address/0xwallet/transactions_v3/"))
        .and(query_param("no-logs", "true"))
        .respond_with(ok(json!({
            "current_page": 2,
            "items": [{"tx_hash": "0xc"}],
            "links": {"prev": format!("{base}/eth-mainnet/address/0xwallet/transactions_v3/page/1/"), "next": null}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/eth-mainnet/address/0xwallet/transactions_v3/page/1/"))
        .respond_with(ok(json!({
            "current_page": 1,
            "items": [{"tx_hash": "0xb"}, {"tx_hash": "0xa"}],
            "links": {"prev": null, "next": format!("{base}/eth-mainnet/address/0xwallet/transactions_v3/page/2/")}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let opts = TransactionOptions {
        no_logs: Some(true),
        ..Default::default()
    };
    let hashes: Vec<String> = TransactionService::new(http(&server))
        .all_transactions_for_address("eth-mainnet", "0xwallet", &opts)
        .map(|r| r.unwrap().tx_hash.unwrap())
        .collect()
        .await;
    assert_eq!(hashes, vec!["0xc", "0xb", "0xa"]);
}

#[tokio::test]
async fn test_transactions_page_helpers() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/eth-mainnet/address/0xwallet/transactions_v3/page/4/"))
        .and(query_param("quote-currency", "USD"))
        .respond_with(ok(json!({
            "items": [{"tx_hash": "0x4"}],
            "links": {"prev": format!("{base}/prev/"), "next": null}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/prev/"))
        .respond_with(ok(json!({"items": [{"tx_hash": "0x3"}], "links": {"prev": null, "next": null}})))
        .expect(1)
        .mount(&server)
        .await;

    let service = TransactionService::new(http(&server));
    let opts = TransactionOptions {
        quote_currency: Some(Quote::Usd),
        ..Default::default()
    };
    let page = service
        .transactions_for_address_v3("eth-mainnet", "0xwallet", 4, &opts)
        .await
        .unwrap();

    let older = service.prev_page(&page).await.unwrap();
    assert_eq!(older.items[0].tx_hash.as_deref(), Some("0x3"));

    let err = service.next_page(&page).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid URL: next link cannot be null");
}

#[tokio::test]
async fn test_page_helper_without_links() {
    let server = MockServer::start().await;
    let service = TransactionService::new(http(&server));
    let page: TransactionsPage = serde_json::from_value(json!({"items": []})).unwrap();

    let err = service.prev_page(&page).await.unwrap_err();
    assert!(matches!(
        err,
        Error::MissingLink {
            direction: LinkDirection::Prev
        }
    ));
    assert!(CursorLinks::default().get(LinkDirection::Prev).is_none());
}

#[tokio::test]
async fn test_token_prices() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pricing/historical_by_addresses_v2/eth-mainnet/CAD/0xtoken/"))
        .and(query_param("from", "2024-01-01"))
        .and(query_param("to", "2024-01-31"))
        .and(query_param("prices-at-asc", "true"))
        .respond_with(ok(json!([{
            "contract_ticker_symbol": "TKN",
            "quote_currency": "CAD",
            "prices": [{"date": "2024-01-01", "price": 1.25}]
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let opts = TokenPricesOptions {
        from: NaiveDate::from_ymd_opt(2024, 1, 1),
        to: NaiveDate::from_ymd_opt(2024, 1, 31),
        prices_at_asc: Some(true),
    };
    let prices = PricingService::new(http(&server))
        .token_prices("eth-mainnet", Quote::Cad, "0xtoken", &opts)
        .await
        .unwrap();

    assert_eq!(prices[0].contract_ticker_symbol.as_deref(), Some("TKN"));
    assert_eq!(prices[0].prices[0].date, NaiveDate::from_ymd_opt(2024, 1, 1));
    assert_eq!(prices[0].prices[0].price, Some(1.25));
}

#[tokio::test]
async fn test_api_error_surfaces_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "error": true,
            "error_code": 400,
            "error_message": "Invalid chain name"
        })))
        .mount(&server)
        .await;

    let err = PricingService::new(http(&server))
        .token_prices("nope", Quote::Usd, "0xtoken", &TokenPricesOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "An error occurred 400: Invalid chain name");
}
