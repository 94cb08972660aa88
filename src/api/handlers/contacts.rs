use crate::core::error::Result;
use axum::{extract::State, response::IntoResponse, Json};

use super::AppState;

/// Handler for GET /contacts - list every contact record
pub async fn get_contacts(State(state): State<AppState>) -> Result<impl IntoResponse> {
    tracing::info!("Request received for /contacts");

    let contacts = state.contact_repo.find_all().await?;

    Ok(Json(contacts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::testing;
    use crate::db::manager::DatabaseManager;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn seeded_contacts_db(rows: usize) -> Arc<DatabaseManager> {
        let db = Arc::new(DatabaseManager::new_in_memory().unwrap());
        let conn = db.get_connection().unwrap();
        conn.execute_batch(
            "CREATE TABLE contact (
                county TEXT, name TEXT, address TEXT, phone TEXT, fax TEXT, website TEXT
            );",
        )
        .unwrap();
        for i in 0..rows {
            conn.execute(
                "INSERT INTO contact VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    format!("County {}", i),
                    format!("DA Office {}", i),
                    format!("{} Main St", i),
                    "555-0100",
                    "555-0101",
                    "https://example.gov"
                ],
            )
            .unwrap();
        }
        db
    }

    fn app(state: crate::api::handlers::AppState) -> Router {
        Router::new()
            .route("/contacts", get(get_contacts))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_returns_every_row() {
        let state = testing::state_with_stores(
            seeded_contacts_db(3),
            Arc::new(DatabaseManager::new_in_memory().unwrap()),
            "",
        );

        let response = app(state)
            .oneshot(Request::builder().uri("/contacts").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let contacts: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(contacts.as_array().unwrap().len(), 3);
        assert_eq!(contacts[0]["County"], "County 0");
        assert_eq!(contacts[2]["Name"], "DA Office 2");
    }

    #[tokio::test]
    async fn test_field_order_on_the_wire() {
        let state = testing::state_with_stores(
            seeded_contacts_db(1),
            Arc::new(DatabaseManager::new_in_memory().unwrap()),
            "",
        );

        let response = app(state)
            .oneshot(Request::builder().uri("/contacts").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let raw = String::from_utf8(body.to_vec()).unwrap();

        let positions: Vec<usize> = ["\"County\"", "\"Name\"", "\"Address\"", "\"Phone\"", "\"Fax\"", "\"Website\""]
            .iter()
            .map(|key| raw.find(key).unwrap_or_else(|| panic!("{} missing", key)))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn test_store_failure_is_generic_500() {
        // No contact table in a fresh store
        let response = app(testing::empty_state())
            .oneshot(Request::builder().uri("/contacts").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(error["error"], "Failed to query the local store");
    }
}
