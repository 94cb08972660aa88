use crate::api::models::EnforcementSearchRequest;
use crate::core::error::{GatewayError, Result};
use crate::upstream::SearchQuery;
use axum::{extract::State, response::IntoResponse, Json};

use super::AppState;

/// Map the request's camelCase fields onto openFDA enforcement field names.
/// Empty fields contribute nothing to the query.
fn build_enforcement_query(request: &EnforcementSearchRequest) -> SearchQuery {
    SearchQuery::new()
        .phrase("product_description", &request.product_description)
        .phrase("recalling_firm", &request.recalling_firm)
        .phrase("recall_number", &request.recall_number)
        .phrase("classification", &request.recall_class)
}

/// Handler for POST /fda-enforcement - search device enforcement actions
pub async fn search_enforcement(
    State(state): State<AppState>,
    Json(request): Json<EnforcementSearchRequest>,
) -> Result<impl IntoResponse> {
    tracing::info!("Request received for /fda-enforcement");

    let query = build_enforcement_query(&request);
    if query.is_empty() {
        return Err(GatewayError::ValidationError(
            "At least one search field is required".to_string(),
        ));
    }

    let body = state.openfda.device_enforcement(&query).await?;

    Ok(Json(body))
}
