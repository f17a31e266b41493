//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

// ============================================================================
// Client Responses
// ============================================================================

/// Client response
#[derive(Debug, Clone, Serialize)]
pub struct ClientResponse {
    pub id: i64,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub join_date: NaiveDate,
}

/// Client with its currently authoritative membership, if any
#[derive(Debug, Clone, Serialize)]
pub struct ClientDetailResponse {
    pub client: ClientResponse,
    pub membership: Option<MembershipResponse>,
}

// ============================================================================
// Membership Responses
// ============================================================================

/// Membership response
#[derive(Debug, Clone, Serialize)]
pub struct MembershipResponse {
    pub id: i64,
    pub client_id: i64,
    pub plan: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub visits_left: i32,
    pub status: String,
}

/// Result of enrolling a client with a new membership
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentResponse {
    pub client: ClientResponse,
    pub membership: MembershipResponse,
}

// ============================================================================
// Visit Responses
// ============================================================================

/// Visit response
#[derive(Debug, Clone, Serialize)]
pub struct VisitResponse {
    pub id: i64,
    pub client_id: i64,
    pub visit_date: NaiveDate,
    pub checkin_time: NaiveTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_time: Option<NaiveTime>,
}

/// Result of recording a check-in
///
/// `membership` is absent when the client had no active membership; the
/// visit is recorded regardless.
#[derive(Debug, Clone, Serialize)]
pub struct CheckInResponse {
    pub visit: VisitResponse,
    pub membership: Option<MembershipResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
