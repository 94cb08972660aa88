use serde::Deserialize;

/// Request body for POST /fda-enforcement.
///
/// All fields are optional free text; absent fields deserialize to empty
/// strings and are dropped from the upstream query.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnforcementSearchRequest {
    /// Recalled product description
    pub product_description: String,
    /// Recalling firm name
    pub recalling_firm: String,
    /// Recall event number
    pub recall_number: String,
    /// Recall classification (Class I/II/III)
    pub recall_class: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let request: EnforcementSearchRequest = serde_json::from_str("{}").unwrap();
        assert!(request.product_description.is_empty());
        assert!(request.recall_class.is_empty());
    }

    #[test]
    fn test_camel_case_field_names() {
        let request: EnforcementSearchRequest = serde_json::from_str(
            r#"{"productDescription": "catheter", "recallingFirm": "Acme", "recallNumber": "Z-1", "recallClass": "Class II"}"#,
        )
        .unwrap();

        assert_eq!(request.product_description, "catheter");
        assert_eq!(request.recalling_firm, "Acme");
        assert_eq!(request.recall_number, "Z-1");
        assert_eq!(request.recall_class, "Class II");
    }
}
