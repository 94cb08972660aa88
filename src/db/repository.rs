//! Repository pattern implementation for the local stores

use crate::core::error::{GatewayError, Result};
use crate::db::manager::DatabaseManager;
use crate::db::models::Contact;
use rusqlite::types::ValueRef;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Read access to the contacts store
pub struct ContactRepository {
    db: Arc<DatabaseManager>,
}

impl ContactRepository {
    /// Create a new ContactRepository
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }

    /// Read every contact record, in table order.
    ///
    /// The column list is spelled out so the wire order {County, Name,
    /// Address, Phone, Fax, Website} does not depend on the table layout.
    pub async fn find_all(&self) -> Result<Vec<Contact>> {
        self.db
            .execute(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT county, name, address, phone, fax, website FROM contact",
                )?;

                let contacts = stmt
                    .query_map([], |row| {
                        Ok(Contact {
                            county: row.get(0)?,
                            name: row.get(1)?,
                            address: row.get(2)?,
                            phone: row.get(3)?,
                            fax: row.get(4)?,
                            website: row.get(5)?,
                        })
                    })?
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(GatewayError::StoreError)?;

                Ok(contacts)
            })
            .await
    }
}

/// Substring search over the historical-documents store.
///
/// Rows have an arbitrary column set, so results are returned as
/// column-name → value maps rather than a fixed struct.
pub struct DocumentRepository {
    db: Arc<DatabaseManager>,
}

impl DocumentRepository {
    /// Create a new DocumentRepository
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }

    /// Run a parameterized `text LIKE '%query%'` match capped at `limit` rows.
    ///
    /// An empty query matches every row (up to the cap). The pooled
    /// connection acts as the request-scoped session and is released when
    /// the closure returns, on success and on error alike.
    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<Map<String, Value>>> {
        let pattern = format!("%{}%", query);

        self.db
            .execute(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT * FROM historical_documents WHERE text LIKE ?1 LIMIT ?2",
                )?;

                let column_names: Vec<String> =
                    stmt.column_names().iter().map(|s| s.to_string()).collect();

                let mut rows = stmt.query(rusqlite::params![pattern, limit])?;
                let mut documents = Vec::new();

                while let Some(row) = rows.next()? {
                    let mut document = Map::new();
                    for (idx, name) in column_names.iter().enumerate() {
                        document.insert(name.clone(), value_ref_to_json(row.get_ref(idx)?));
                    }
                    documents.push(document);
                }

                Ok(documents)
            })
            .await
    }
}

/// Convert a raw SQLite value to its JSON representation
fn value_ref_to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ValueRef::Text(text) => Value::String(String::from_utf8_lossy(text).into_owned()),
        ValueRef::Blob(blob) => Value::String(String::from_utf8_lossy(blob).into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contacts_store() -> Arc<DatabaseManager> {
        let db = Arc::new(DatabaseManager::new_in_memory().unwrap());
        let conn = db.get_connection().unwrap();
        conn.execute_batch(
            "CREATE TABLE contact (
                county TEXT, name TEXT, address TEXT, phone TEXT, fax TEXT, website TEXT
            );",
        )
        .unwrap();
        conn.execute(
            "INSERT INTO contact VALUES
                ('Kern', 'Kern DA', '1234 Truxtun Ave', '661-555-0100', '661-555-0101', 'https://kern.example.gov'),
                ('Fresno', 'Fresno DA', '2220 Tulare St', '559-555-0200', '559-555-0201', 'https://fresno.example.gov')",
            [],
        )
        .unwrap();
        db
    }

    fn documents_store(rows: usize) -> Arc<DatabaseManager> {
        let db = Arc::new(DatabaseManager::new_in_memory().unwrap());
        let conn = db.get_connection().unwrap();
        conn.execute_batch(
            "CREATE TABLE historical_documents (
                id INTEGER PRIMARY KEY, title TEXT, text TEXT, year INTEGER
            );",
        )
        .unwrap();
        for i in 0..rows {
            conn.execute(
                "INSERT INTO historical_documents (title, text, year) VALUES (?1, ?2, ?3)",
                rusqlite::params![
                    format!("Document {}", i),
                    format!("body of record {} mentioning recall notices", i),
                    1950 + i as i64
                ],
            )
            .unwrap();
        }
        db
    }

    #[tokio::test]
    async fn test_find_all_returns_every_row() {
        let repo = ContactRepository::new(contacts_store());
        let contacts = repo.find_all().await.unwrap();

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].county, "Kern");
        assert_eq!(contacts[1].website, "https://fresno.example.gov");
    }

    #[tokio::test]
    async fn test_find_all_missing_table_is_store_error() {
        let repo = ContactRepository::new(Arc::new(DatabaseManager::new_in_memory().unwrap()));
        let result = repo.find_all().await;
        assert!(matches!(result, Err(GatewayError::StoreError(_))));
    }

    #[tokio::test]
    async fn test_search_substring_match() {
        let repo = DocumentRepository::new(documents_store(5));
        let results = repo.search("record 3", 20).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["title"], Value::String("Document 3".to_string()));
        assert_eq!(results[0]["year"], Value::from(1953));
    }

    #[tokio::test]
    async fn test_search_empty_query_matches_all_up_to_cap() {
        let repo = DocumentRepository::new(documents_store(25));
        let results = repo.search("", 20).await.unwrap();
        assert_eq!(results.len(), 20);
    }

    #[tokio::test]
    async fn test_search_returns_column_name_keys() {
        let repo = DocumentRepository::new(documents_store(1));
        let results = repo.search("", 20).await.unwrap();

        for key in ["id", "title", "text", "year"] {
            assert!(results[0].contains_key(key), "missing column {}", key);
        }
        assert_eq!(results[0].len(), 4);
    }

    #[tokio::test]
    async fn test_search_no_matches_is_empty_not_error() {
        let repo = DocumentRepository::new(documents_store(3));
        let results = repo.search("no such phrase anywhere", 20).await.unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_value_ref_conversion() {
        assert_eq!(value_ref_to_json(ValueRef::Null), Value::Null);
        assert_eq!(value_ref_to_json(ValueRef::Integer(42)), Value::from(42));
        assert_eq!(
            value_ref_to_json(ValueRef::Text(b"hello")),
            Value::String("hello".to_string())
        );
    }
}
