//! Decimal-string integers
//!
//! [`BigInt`] is a sign plus a 256-bit magnitude, so every on-chain amount
//! fits and negative deltas decode too. Serde adapter for `Option<BigInt>`
//! fields.

use crate::error::{Error, Result};
use alloy_primitives::U256;
use serde::{Deserialize, Deserializer, Serializer};
use std::fmt;
use std::str::FromStr;

/// Signed integer with a `U256` magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BigInt {
    negative: bool,
    magnitude: U256,
}

impl BigInt {
    /// Build from a sign and magnitude; zero is never negative
    pub fn new(negative: bool, magnitude: U256) -> Self {
        Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Absolute value
    pub fn magnitude(&self) -> U256 {
        self.magnitude
    }

    /// The value when it is non-negative
    pub fn to_unsigned(&self) -> Option<U256> {
        (!self.negative).then_some(self.magnitude)
    }
}

impl From<U256> for BigInt {
    fn from(value: U256) -> Self {
        Self::new(false, value)
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self::new(false, U256::from(value))
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self::new(value < 0, U256::from(value.unsigned_abs()))
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::decode(format!("cannot set big.Int value: {s}"));
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let magnitude = U256::from_str_radix(digits, 10)
            .map_err(|e| Error::decode(format!("cannot set big.Int value: {s} ({e})")))?;
        Ok(Self::new(negative, magnitude))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}

/// Parse a signed decimal string; empty means absent
pub fn parse_big_int(s: &str) -> Result<Option<BigInt>> {
    if s.is_empty() {
        return Ok(None);
    }
    s.parse().map(Some)
}

/// Deserialize `null`, `""` or a decimal string
pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Option<BigInt>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_big_int(&s).map_err(serde::de::Error::custom),
    }
}

/// Serialize back to the decimal string form
pub fn serialize<S>(value: &Option<BigInt>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serializer.collect_str(v),
        None => serializer.serialize_none(),
    }
}
