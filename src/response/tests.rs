//! Tests for the response module

use super::*;
use crate::error::{Error, DEFAULT_ERROR_MESSAGE};
use crate::types::LinkDirection;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[test]
fn test_envelope_success() {
    let body = json!({
        "data": {"items": [1, 2, 3]},
        "error": false,
        "error_code": null,
        "error_message": null
    });

    let envelope: ResponseEnvelope<ItemsPage<u32>> = serde_json::from_value(body).unwrap();
    assert!(!envelope.is_error());
    let data = envelope.into_data().unwrap();
    assert_eq!(data.items, vec![1, 2, 3]);
}

#[test]
fn test_envelope_error_message_surfaces() {
    let body = json!({
        "data": null,
        "error": true,
        "error_code": 400,
        "error_message": "Malformed address provided: 0xZZ"
    });

    let envelope: ResponseEnvelope<Value> = serde_json::from_value(body).unwrap();
    match envelope.into_data() {
        Err(Error::Api { code, message }) => {
            assert_eq!(code, Some(400));
            assert_eq!(message, "Malformed address provided: 0xZZ");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[test]
fn test_envelope_error_without_message_uses_default() {
    let body = json!({"data": null, "error": true, "error_code": 500});

    let envelope: ResponseEnvelope<Value> = serde_json::from_value(body).unwrap();
    match envelope.into_data() {
        Err(Error::Api { code, message }) => {
            assert_eq!(code, Some(500));
            assert_eq!(message, DEFAULT_ERROR_MESSAGE);
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[test]
fn test_envelope_without_data_or_error() {
    let envelope: ResponseEnvelope<Value> = serde_json::from_value(json!({"error": false})).unwrap();
    assert!(matches!(envelope.into_data(), Err(Error::Decode { .. })));
}

#[test]
fn test_envelope_preserves_data_round_trip() {
    let data = json!({
        "address": "0xabc",
        "items": [{"tx_hash": "0x1", "value": "1000000000000000000000"}],
        "nested": {"list": [1, 2.5, "x", null, true]}
    });
    let original = serde_json::to_string(&json!({
        "data": data,
        "error": false,
        "error_code": null,
        "error_message": null
    }))
    .unwrap();

    let envelope: ResponseEnvelope<Value> = serde_json::from_str(&original).unwrap();
    let reencoded = serde_json::to_string(&envelope.data).unwrap();
    assert_eq!(reencoded, serde_json::to_string(&data).unwrap());
}

#[test]
fn test_envelope_constructors() {
    let ok = ResponseEnvelope::ok(7);
    assert!(!ok.is_error());
    assert_eq!(ok.into_data().unwrap(), 7);

    let err: ResponseEnvelope<u8> = ResponseEnvelope::err(429, "slow down");
    assert!(err.is_error());
    assert_eq!(err.error_code, Some(429));
}

#[test]
fn test_pagination_metadata_decode() {
    let page: ItemsPage<u32> = serde_json::from_value(json!({
        "items": [],
        "pagination": {"has_more": true, "page_number": 2, "page_size": 100, "total_count": null}
    }))
    .unwrap();

    let pagination = page.pagination().copied().unwrap();
    assert!(pagination.has_more);
    assert_eq!(pagination.page_number, 2);
    assert_eq!(pagination.page_size, 100);
    assert_eq!(pagination.total_count, None);
    assert!(page.links().is_none());
}

#[test]
fn test_cursor_links_get() {
    let links = CursorLinks {
        prev: Some("https://api.example.com/page/1".to_string()),
        next: Some(String::new()),
    };
    assert_eq!(
        links.get(LinkDirection::Prev),
        Some("https://api.example.com/page/1")
    );
    assert_eq!(links.get(LinkDirection::Next), None);
    assert_eq!(CursorLinks::default().get(LinkDirection::Next), None);
}

#[test]
fn test_items_page_keeps_meta() {
    let page: ItemsPage<Value> = serde_json::from_value(json!({
        "address": "0xabc",
        "chain_id": 1,
        "links": {"prev": null, "next": "https://x/2"},
        "items": [{"a": 1}]
    }))
    .unwrap();

    assert_eq!(page.meta_str("address"), Some("0xabc"));
    assert_eq!(page.meta.get("chain_id"), Some(&json!(1)));
    assert_eq!(page.links().unwrap().next.as_deref(), Some("https://x/2"));
    assert_eq!(page.into_items().len(), 1);
}
