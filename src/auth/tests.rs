//! Tests for the auth module

use super::*;
use crate::error::Error;
use test_case::test_case;

const V1_KEY: &str = "ckey_0123456789abcdef0123456789a";
const V2_KEY: &str = "cqt_wFbcdfghjkmpqrtvwxyBCDFGHJKM";

#[test_case(V1_KEY, true ; "v1 key")]
#[test_case(V2_KEY, true ; "v2 key")]
#[test_case("cqt_rQ346789346789346789346789YY", true ; "v2 key with rQ prefix")]
#[test_case("", false ; "empty")]
#[test_case("ckey_0123456789ABCDEF0123456789A", false ; "v1 upper case hex")]
#[test_case("ckey_0123456789abcdef", false ; "v1 too short")]
#[test_case("cqt_xYbcdfghjkmpqrtvwxyBCDFGHJKM", false ; "v2 bad prefix")]
#[test_case("cqt_wFbcdfghjkmpqrtvwxyBCDFGHJK0", false ; "v2 excluded character")]
#[test_case("API_KEY", false ; "placeholder")]
fn test_is_valid_api_key(key: &str, expected: bool) {
    assert_eq!(is_valid_api_key(key), expected);
}

#[test]
fn test_authenticator_valid_key() {
    let auth = Authenticator::new(V1_KEY, "agent");
    assert!(auth.is_valid());
    assert!(auth.ensure_valid().is_ok());
}

#[test]
fn test_authenticator_invalid_key() {
    let auth = Authenticator::new("nope", "agent");
    assert!(!auth.is_valid());

    match auth.ensure_valid() {
        Err(Error::Auth { message }) => assert_eq!(message, INVALID_API_KEY_MESSAGE),
        other => panic!("Expected auth error, got {other:?}"),
    }
}

#[test]
fn test_authenticator_applies_headers() {
    let auth = Authenticator::new(V2_KEY, "blockdata-test/0.1");
    let client = reqwest::Client::new();
    let req = auth.apply(client.get("https://example.com/api"));

    let built = req.build().unwrap();
    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        &format!("Bearer {V2_KEY}")
    );
    assert_eq!(
        built.headers().get("X-Requested-With").unwrap(),
        "blockdata-test/0.1"
    );
}

#[test]
fn test_authenticator_debug_hides_key() {
    let auth = Authenticator::new(V1_KEY, "agent");
    let debug = format!("{auth:?}");
    assert!(!debug.contains(V1_KEY));
}
