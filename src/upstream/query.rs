//! openFDA search-query construction
//!
//! openFDA expects a `search` parameter of Lucene-style clauses. The gateway
//! only ever builds two clause shapes: exact-phrase filters (`field:"value"`)
//! and date ranges (`field:[YYYYMMDD TO YYYYMMDD]`), AND-joined.

/// Builder for an AND-joined openFDA search expression
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    clauses: Vec<String>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exact-phrase filter. An empty value adds nothing, so absent
    /// request fields never appear in the query.
    pub fn phrase(mut self, field: &str, value: &str) -> Self {
        if !value.is_empty() {
            self.clauses.push(format!("{}:\"{}\"", field, value));
        }
        self
    }

    /// Add an inclusive date-range filter over compacted dates.
    pub fn date_range(mut self, field: &str, from: &str, to: &str) -> Self {
        self.clauses.push(format!(
            "{}:[{} TO {}]",
            field,
            compact_date(from),
            compact_date(to)
        ));
        self
    }

    /// True when no clause has been added
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Render the AND-joined search expression
    pub fn build(&self) -> String {
        self.clauses.join(" AND ")
    }
}

/// Strip hyphens from a YYYY-MM-DD date to openFDA's compact form.
///
/// Purely mechanical: no calendar validation, malformed input passes
/// through for the upstream service to accept or reject.
pub fn compact_date(date: &str) -> String {
    date.replace('-', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_quotes_value() {
        let query = SearchQuery::new().phrase("recalling_firm", "Acme Medical");
        assert_eq!(query.build(), "recalling_firm:\"Acme Medical\"");
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let query = SearchQuery::new()
            .phrase("product_description", "catheter")
            .phrase("recalling_firm", "")
            .phrase("recall_number", "")
            .phrase("classification", "Class I");

        assert_eq!(
            query.build(),
            "product_description:\"catheter\" AND classification:\"Class I\""
        );
    }

    #[test]
    fn test_all_empty_builds_empty_query() {
        let query = SearchQuery::new()
            .phrase("product_description", "")
            .phrase("recalling_firm", "");

        assert!(query.is_empty());
        assert_eq!(query.build(), "");
    }

    #[test]
    fn test_date_range_compacts_dates() {
        let query = SearchQuery::new()
            .phrase("device.generic_name", "pacemaker")
            .date_range("date_of_event", "2024-01-05", "2024-03-31");

        assert_eq!(
            query.build(),
            "device.generic_name:\"pacemaker\" AND date_of_event:[20240105 TO 20240331]"
        );
    }

    #[test]
    fn test_compact_date_is_mechanical() {
        assert_eq!(compact_date("2024-01-05"), "20240105");
        // No calendar validation: garbage passes through minus hyphens
        assert_eq!(compact_date("2024-13-99"), "20241399");
        assert_eq!(compact_date("not-a-date"), "notadate");
        assert_eq!(compact_date(""), "");
    }
}
