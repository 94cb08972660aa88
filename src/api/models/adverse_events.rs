use serde::Deserialize;

/// Request body for POST /maude.
///
/// All three fields are required by the handler; they default to empty here
/// so a missing field surfaces as a 400 validation error rather than a
/// deserialization rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdverseEventSearchRequest {
    /// Generic device name
    pub device_name: String,
    /// Range start, YYYY-MM-DD
    pub from_date: String,
    /// Range end, YYYY-MM-DD
    pub to_date: String,
}
