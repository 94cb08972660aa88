use crate::api::models::AdverseEventSearchRequest;
use crate::core::error::{GatewayError, Result};
use crate::upstream::SearchQuery;
use axum::{extract::State, response::IntoResponse, Json};

use super::AppState;

/// Device-name phrase plus inclusive date-of-event range. Dates are
/// compacted mechanically; nothing checks that from <= to or that either is
/// a real date — openFDA rejects nonsense ranges itself.
fn build_event_query(request: &AdverseEventSearchRequest) -> SearchQuery {
    SearchQuery::new()
        .phrase("device.generic_name", &request.device_name)
        .date_range("date_of_event", &request.from_date, &request.to_date)
}

/// Handler for POST /maude - search device adverse-event reports
pub async fn search_adverse_events(
    State(state): State<AppState>,
    Json(request): Json<AdverseEventSearchRequest>,
) -> Result<impl IntoResponse> {
    tracing::info!("Request received for /maude");

    if request.device_name.is_empty()
        || request.from_date.is_empty()
        || request.to_date.is_empty()
    {
        return Err(GatewayError::ValidationError(
            "Device name and date range are required".to_string(),
        ));
    }

    let query = build_event_query(&request);
    let body = state.openfda.device_events(&query).await?;

    Ok(Json(body))
}
