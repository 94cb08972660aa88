use serde::Deserialize;

/// Request body for POST /warning_letters
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WarningLetterSearchRequest {
    /// Firm name to search for
    pub firm_name: String,
}
