use crate::api::models::{HistoricalSearchParams, HistoricalSearchResponse};
use crate::core::error::Result;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use super::AppState;

/// Row cap for a single search
const MAX_RESULTS: u32 = 20;

/// Handler for GET /historical-documents/search - substring search
pub async fn search_historical_documents(
    State(state): State<AppState>,
    Query(params): Query<HistoricalSearchParams>,
) -> Result<impl IntoResponse> {
    tracing::info!("Request received for /historical-documents/search");

    let query = params.query.trim();
    let results = state.document_repo.search(query, MAX_RESULTS).await?;

    Ok(Json(HistoricalSearchResponse { results }))
}
