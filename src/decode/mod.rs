//! Value decoder module
//!
//! Supports: arbitrary-precision integers and calendar dates sent as JSON strings
//!
//! # Overview
//!
//! Balances and token ids exceed `u64`, so the API transports them as decimal
//! strings; some daily series use `YYYY-MM-DD` dates. Both decoders accept
//! `null` and `""` as "absent" and reject any other unparsable string.
//!
//! Use the adapters on `Option` fields:
//!
//! ```rust,ignore
//! #[serde(default, with = "crate::decode::big_int")]
//! pub balance: Option<BigInt>,
//! ```

pub mod big_int;
pub mod date;

pub use big_int::{parse_big_int, BigInt};
pub use date::{parse_date, DATE_FORMAT};
