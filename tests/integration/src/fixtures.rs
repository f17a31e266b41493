//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Client registration request
#[derive(Debug, Serialize)]
pub struct RegisterClientRequest {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub plan: String,
}

impl RegisterClientRequest {
    pub fn unique(plan: &str) -> Self {
        let suffix = unique_suffix();
        let pid = std::process::id();
        Self {
            name: format!("Test Client {pid}-{suffix}"),
            phone: format!("+79{pid:05}{suffix:05}"),
            email: None,
            plan: plan.to_string(),
        }
    }
}

/// Check-in request
#[derive(Debug, Serialize)]
pub struct CheckInRequest {
    pub client_id: i64,
}

/// Client response
#[derive(Debug, Deserialize)]
pub struct ClientResponse {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub join_date: NaiveDate,
}

/// Membership response
#[derive(Debug, Deserialize)]
pub struct MembershipResponse {
    pub id: i64,
    pub client_id: i64,
    pub plan: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub visits_left: i32,
    pub status: String,
}

/// Enrollment response
#[derive(Debug, Deserialize)]
pub struct EnrollmentResponse {
    pub client: ClientResponse,
    pub membership: MembershipResponse,
}

/// Client detail response
#[derive(Debug, Deserialize)]
pub struct ClientDetailResponse {
    pub client: ClientResponse,
    pub membership: Option<MembershipResponse>,
}

/// Visit response
#[derive(Debug, Deserialize)]
pub struct VisitResponse {
    pub id: i64,
    pub client_id: i64,
    pub visit_date: NaiveDate,
    pub checkin_time: NaiveTime,
    pub checkout_time: Option<NaiveTime>,
}

/// Check-in response
#[derive(Debug, Deserialize)]
pub struct CheckInResponse {
    pub visit: VisitResponse,
    pub membership: Option<MembershipResponse>,
}
