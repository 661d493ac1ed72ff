//! `YYYY-MM-DD` dates
//!
//! Serde adapter for `Option<NaiveDate>` fields.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

/// Layout used by the API for calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date; empty or `null` means absent
pub fn parse_date(s: &str) -> Result<Option<NaiveDate>> {
    let s = s.trim_matches('"');
    if s.is_empty() || s == "null" {
        return Ok(None);
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map(Some)
        .map_err(|e| Error::decode(format!("parsing time \"{s}\": {e}")))
}

/// Deserialize `null`, `""` or a `YYYY-MM-DD` string
pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_date(&s).map_err(serde::de::Error::custom),
    }
}

/// Serialize back to `YYYY-MM-DD`
pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(d) => serializer.serialize_str(&d.format(DATE_FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}
