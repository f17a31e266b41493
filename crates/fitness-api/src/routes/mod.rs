//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{checkins, clients, health};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(client_routes()).merge(checkin_routes())
}

/// Client routes
fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/clients", post(clients::register_client))
        .route("/clients", get(clients::list_clients))
        .route("/clients/:client_id", get(clients::get_client))
        .route("/clients/:client_id", delete(clients::delete_client))
        .route("/clients/:client_id/visits", get(clients::get_client_visits))
}

/// Check-in routes
fn checkin_routes() -> Router<AppState> {
    Router::new().route("/checkins", post(checkins::record_checkin))
}
