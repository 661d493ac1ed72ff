//! Envelope and list payload types

use crate::error::{Error, Result};
use crate::types::{JsonObject, LinkDirection};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Envelope returned by every endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    /// Payload, present when `error` is false
    pub data: Option<T>,
    /// Whether the server reported an error
    #[serde(default)]
    pub error: bool,
    /// Server error code
    #[serde(default)]
    pub error_code: Option<i64>,
    /// Server error message
    #[serde(default)]
    pub error_message: Option<String>,
}

impl<T> ResponseEnvelope<T> {
    /// Wrap a successful payload
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: false,
            error_code: None,
            error_message: None,
        }
    }

    /// Build an error envelope
    pub fn err(code: i64, message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: true,
            error_code: Some(code),
            error_message: Some(message.into()),
        }
    }

    /// Whether the envelope reports an error
    pub fn is_error(&self) -> bool {
        self.error
    }

    /// Extract the payload, turning an error envelope into `Error::Api`
    pub fn into_data(self) -> Result<T> {
        if self.error {
            return Err(Error::api(self.error_code, self.error_message));
        }
        self.data
            .ok_or_else(|| Error::decode("envelope carried neither data nor an error"))
    }
}

/// Page-number metadata embedded in offset-style payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaginationMetadata {
    /// True if there is another page
    #[serde(default)]
    pub has_more: bool,
    /// The requested page number
    #[serde(default)]
    pub page_number: u32,
    /// The requested number of items on the current page
    #[serde(default)]
    pub page_size: u32,
    /// Total number of items across all pages, when the server knows it
    #[serde(default)]
    pub total_count: Option<u64>,
}

/// Prev/next links embedded in cursor-style payloads
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorLinks {
    /// URL of the previous page
    #[serde(default)]
    pub prev: Option<String>,
    /// URL of the next page
    #[serde(default)]
    pub next: Option<String>,
}

impl CursorLinks {
    /// Link for the given direction, ignoring empty strings
    pub fn get(&self, direction: LinkDirection) -> Option<&str> {
        let link = match direction {
            LinkDirection::Next => self.next.as_deref(),
            LinkDirection::Prev => self.prev.as_deref(),
        };
        link.filter(|l| !l.is_empty())
    }
}

/// A list-shaped payload the paginators can walk
pub trait ListPayload: DeserializeOwned + Send + 'static {
    /// One record of the list
    type Item: Send + 'static;

    /// Page-number metadata, for offset-style endpoints
    fn pagination(&self) -> Option<&PaginationMetadata> {
        None
    }

    /// Prev/next links, for cursor-style endpoints
    fn links(&self) -> Option<&CursorLinks> {
        None
    }

    /// Consume the payload, yielding its records in server order
    fn into_items(self) -> Vec<Self::Item>;
}

/// Generic list payload: `items` plus whichever pagination block the
/// endpoint uses. Every other top-level field is kept in `meta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsPage<T> {
    /// Records on this page
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Page-number metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMetadata>,
    /// Prev/next links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<CursorLinks>,
    /// Remaining payload fields (address, chain_id, updated_at, ...)
    #[serde(flatten)]
    pub meta: JsonObject,
}

impl<T> ItemsPage<T> {
    /// Look up a metadata field by name
    pub fn meta_str(&self, key: &str) -> Option<&str> {
        self.meta.get(key).and_then(|v| v.as_str())
    }
}

impl<T> ListPayload for ItemsPage<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Item = T;

    fn pagination(&self) -> Option<&PaginationMetadata> {
        self.pagination.as_ref()
    }

    fn links(&self) -> Option<&CursorLinks> {
        self.links.as_ref()
    }

    fn into_items(self) -> Vec<T> {
        self.items
    }
}
