//! Check-in handlers

use axum::{extract::State, Json};
use fitness_core::ClientId;
use fitness_service::{CheckInRequest, CheckInResponse, CheckInService};

use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Record a check-in for a client
///
/// POST /checkins
pub async fn record_checkin(
    State(state): State<AppState>,
    Json(request): Json<CheckInRequest>,
) -> ApiResult<Created<Json<CheckInResponse>>> {
    let service = CheckInService::new(state.service_context());
    let response = service
        .record_checkin(ClientId::new(request.client_id))
        .await?;
    Ok(Created(Json(response)))
}
