//! Client handlers
//!
//! Endpoints for registering, reading, and deleting clients.

use axum::{
    extract::{Path, State},
    Json,
};
use fitness_core::ClientId;
use fitness_service::{
    ClientDetailResponse, ClientResponse, ClientService, EnrollmentResponse, EnrollmentService,
    RegisterClientRequest, VisitResponse,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

fn parse_client_id(raw: &str) -> Result<ClientId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid client_id format"))
}

/// Register a client and attach a new membership
///
/// POST /clients
pub async fn register_client(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterClientRequest>,
) -> ApiResult<Created<Json<EnrollmentResponse>>> {
    let service = EnrollmentService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// List all clients
///
/// GET /clients
pub async fn list_clients(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ClientResponse>>> {
    let service = ClientService::new(state.service_context());
    let response = service.list_clients().await?;
    Ok(Json(response))
}

/// Get a client with its current membership
///
/// GET /clients/{client_id}
pub async fn get_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> ApiResult<Json<ClientDetailResponse>> {
    let client_id = parse_client_id(&client_id)?;

    let service = ClientService::new(state.service_context());
    let response = service.get_client(client_id).await?;
    Ok(Json(response))
}

/// List a client's visits
///
/// GET /clients/{client_id}/visits
pub async fn get_client_visits(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> ApiResult<Json<Vec<VisitResponse>>> {
    let client_id = parse_client_id(&client_id)?;

    let service = ClientService::new(state.service_context());
    let response = service.get_client_visits(client_id).await?;
    Ok(Json(response))
}

/// Delete a client with all of its memberships and visits
///
/// DELETE /clients/{client_id}
pub async fn delete_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> ApiResult<NoContent> {
    let client_id = parse_client_id(&client_id)?;

    let service = ClientService::new(state.service_context());
    service.delete_client(client_id).await?;
    Ok(NoContent)
}
