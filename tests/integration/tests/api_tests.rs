//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::Datelike;
use integration_tests::{
    assert_json, assert_status, check_test_env, CheckInRequest, CheckInResponse,
    ClientDetailResponse, ClientResponse, EnrollmentResponse, RegisterClientRequest, TestServer,
    VisitResponse,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
async fn test_register_client_with_monthly_plan() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = RegisterClientRequest::unique("monthly");
    let response = server.post("/api/v1/clients", &request).await.unwrap();
    let enrollment: EnrollmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(enrollment.client.phone, request.phone);
    assert_eq!(enrollment.membership.plan, "monthly");
    assert_eq!(enrollment.membership.visits_left, 12);
    assert_eq!(enrollment.membership.status, "active");
    assert_eq!(enrollment.membership.end_date.day(), 28);

    // Clean up
    let response = server
        .delete(&format!("/api/v1/clients/{}", enrollment.client.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_register_rejects_blank_name() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let mut request = RegisterClientRequest::unique("monthly");
    request.name = String::new();
    let response = server.post("/api/v1/clients", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_register_twice_keeps_one_client() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = RegisterClientRequest::unique("monthly");
    let response = server.post("/api/v1/clients", &request).await.unwrap();
    let first: EnrollmentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/v1/clients", &request).await.unwrap();
    let second: EnrollmentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(second.client.id, first.client.id);
    assert_ne!(second.membership.id, first.membership.id);

    // The newer membership is the one the detail view resolves
    let response = server
        .get(&format!("/api/v1/clients/{}", first.client.id))
        .await
        .unwrap();
    let detail: ClientDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.membership.unwrap().id, second.membership.id);

    // Clean up
    server
        .delete(&format!("/api/v1/clients/{}", first.client.id))
        .await
        .unwrap();
}

// ============================================================================
// Check-in Tests
// ============================================================================

#[tokio::test]
async fn test_checkin_decrements_membership() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = RegisterClientRequest::unique("monthly");
    let response = server.post("/api/v1/clients", &request).await.unwrap();
    let enrollment: EnrollmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post(
            "/api/v1/checkins",
            &CheckInRequest {
                client_id: enrollment.client.id,
            },
        )
        .await
        .unwrap();
    let checkin: CheckInResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(checkin.visit.client_id, enrollment.client.id);
    let membership = checkin.membership.unwrap();
    assert_eq!(membership.visits_left, 11);
    assert_eq!(membership.status, "active");

    // Clean up
    server
        .delete(&format!("/api/v1/clients/{}", enrollment.client.id))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_single_pass_expires_after_one_visit() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = RegisterClientRequest::unique("single");
    let response = server.post("/api/v1/clients", &request).await.unwrap();
    let enrollment: EnrollmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    let checkin_body = CheckInRequest {
        client_id: enrollment.client.id,
    };

    let response = server.post("/api/v1/checkins", &checkin_body).await.unwrap();
    let checkin: CheckInResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let membership = checkin.membership.unwrap();
    assert_eq!(membership.visits_left, 0);
    assert_eq!(membership.status, "expired");

    // A further check-in still records a visit but touches no membership
    let response = server.post("/api/v1/checkins", &checkin_body).await.unwrap();
    let checkin: CheckInResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(checkin.membership.is_none());

    let response = server
        .get(&format!("/api/v1/clients/{}/visits", enrollment.client.id))
        .await
        .unwrap();
    let visits: Vec<VisitResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(visits.len(), 2);

    // Clean up
    server
        .delete(&format!("/api/v1/clients/{}", enrollment.client.id))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_checkin_unknown_client_is_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/api/v1/checkins",
            &CheckInRequest {
                client_id: i64::MAX,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Deletion Tests
// ============================================================================

#[tokio::test]
async fn test_delete_client_removes_history() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = RegisterClientRequest::unique("monthly");
    let response = server.post("/api/v1/clients", &request).await.unwrap();
    let enrollment: EnrollmentResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .post(
            "/api/v1/checkins",
            &CheckInRequest {
                client_id: enrollment.client.id,
            },
        )
        .await
        .unwrap();

    let response = server
        .delete(&format!("/api/v1/clients/{}", enrollment.client.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/clients/{}", enrollment.client.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // The client is gone from the listing too
    let response = server.get("/api/v1/clients").await.unwrap();
    let clients: Vec<ClientResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(clients.iter().all(|c| c.id != enrollment.client.id));
}
