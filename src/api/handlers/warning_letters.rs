use crate::api::models::WarningLetterSearchRequest;
use crate::core::error::{GatewayError, Result};
use axum::{extract::State, response::IntoResponse, Json};

use super::AppState;

/// Handler for POST /warning_letters - scrape the letters search page
pub async fn search_warning_letters(
    State(state): State<AppState>,
    Json(request): Json<WarningLetterSearchRequest>,
) -> Result<impl IntoResponse> {
    tracing::info!("Request received for /warning_letters");

    if request.firm_name.is_empty() {
        return Err(GatewayError::ValidationError(
            "Firm name is required".to_string(),
        ));
    }

    let letters = state.warning_letters.search(&request.firm_name).await?;

    Ok(Json(letters))
}
