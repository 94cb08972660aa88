use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Query parameters for GET /historical-documents/search
#[derive(Debug, Default, Deserialize)]
pub struct HistoricalSearchParams {
    /// Substring to match; empty matches every row up to the cap
    #[serde(default)]
    pub query: String,
}

/// Response for GET /historical-documents/search.
///
/// Each result is the row's full column set, keyed by column name.
#[derive(Debug, Serialize)]
pub struct HistoricalSearchResponse {
    pub results: Vec<Map<String, Value>>,
}
