//! Decoded API responses.

use serde_json::Value;

use crate::entities::Podcast;
use crate::error::{ItunesError, Result};

/// A decoded response document.
///
/// Search and lookup responses carry a top-level `results` array; chart feeds
/// nest theirs under `feed.results`. Nothing else about the shape is checked.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult(Value);

impl QueryResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Top-level `results` array.
    pub fn results(&self) -> Option<&[Value]> {
        self.0.get("results").and_then(Value::as_array).map(Vec::as_slice)
    }

    /// `feed.results` array of a chart response.
    pub fn feed_results(&self) -> Option<&[Value]> {
        self.0
            .get("feed")
            .and_then(|feed| feed.get("results"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    /// The `resultCount` field reported by search and lookup responses.
    pub fn result_count(&self) -> Option<u64> {
        self.0.get("resultCount").and_then(Value::as_u64)
    }

    /// Every podcast record in `results`, skipping records of other kinds.
    pub fn podcasts(&self) -> Vec<Podcast> {
        self.results()
            .unwrap_or_default()
            .iter()
            .filter_map(|record| match Podcast::from_result(record) {
                Ok(podcast) => Some(podcast),
                Err(e) => {
                    tracing::debug!(error = %e, "skipping non-podcast record");
                    None
                }
            })
            .collect()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<QueryResult> for Value {
    fn from(result: QueryResult) -> Self {
        result.0
    }
}

/// Parses a response body. Empty bodies, malformed JSON and non-object
/// documents are reported as communication failures.
pub fn decode(body: &str) -> Result<QueryResult> {
    if body.trim().is_empty() {
        return Err(ItunesError::NetworkCommunication(
            "empty response body".to_string(),
        ));
    }
    let value: Value = serde_json::from_str(body).map_err(|e| {
        ItunesError::NetworkCommunication(format!("failed to parse response: {}", e))
    })?;
    if !value.is_object() {
        return Err(ItunesError::NetworkCommunication(
            "response is not a JSON object".to_string(),
        ));
    }
    Ok(QueryResult(value))
}
