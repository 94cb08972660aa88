//! API routes

use crate::api::handlers::{
    get_contacts, search_adverse_events, search_enforcement, search_historical_documents,
    search_warning_letters, AppState,
};
use axum::{
    routing::{get, post},
    Router,
};

/// Build the API routes
pub fn build_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/contacts", get(get_contacts))
        .route("/fda-enforcement", post(search_enforcement))
        .route("/warning_letters", post(search_warning_letters))
        .route("/maude", post(search_adverse_events))
        .route(
            "/historical-documents/search",
            get(search_historical_documents),
        )
        .with_state(state)
}
