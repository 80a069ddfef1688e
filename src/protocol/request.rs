//! Request decoding

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{LibrisError, Result};

/// Query string of `GET /books`
///
/// Values are kept as raw strings so that garbage behaves like an absent
/// parameter instead of failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListParams {
    /// Requested page, 0 when absent or unparsable
    pub fn page(&self) -> i64 {
        parse_or_zero(self.page.as_deref())
    }

    /// Requested limit, 0 when absent or unparsable
    pub fn limit(&self) -> i64 {
        parse_or_zero(self.limit.as_deref())
    }
}

fn parse_or_zero(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

/// Decode a JSON request body
///
/// The Content-Type header is not consulted.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| LibrisError::MalformedInput(e.to_string()))
}
