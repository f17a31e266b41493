//! Check-in service
//!
//! Hands a check-in event to the entitlement engine with the current
//! timestamp.

use chrono::Utc;
use fitness_core::ClientId;
use tracing::{info, instrument, warn};

use crate::dto::CheckInResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Check-in service
pub struct CheckInService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CheckInService<'a> {
    /// Create a new CheckInService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a visit for the client and consume entitlement
    #[instrument(skip(self))]
    pub async fn record_checkin(&self, client_id: ClientId) -> ServiceResult<CheckInResponse> {
        let now = Utc::now();
        let checkin = self
            .ctx
            .entitlement_store()
            .apply_visit(client_id, now.date_naive(), now.time())
            .await?;

        match &checkin.membership {
            Some(membership) if membership.is_active() => {
                info!(
                    client_id = %client_id,
                    membership_id = %membership.id,
                    visits_left = membership.visits_left,
                    "Check-in recorded"
                );
            }
            Some(membership) => {
                info!(
                    client_id = %client_id,
                    membership_id = %membership.id,
                    "Check-in recorded; membership exhausted"
                );
            }
            None => {
                warn!(client_id = %client_id, "Check-in recorded without active membership");
            }
        }

        Ok(CheckInResponse::from(&checkin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::memory_context;
    use crate::dto::RegisterClientRequest;
    use crate::services::enrollment::EnrollmentService;
    use crate::services::error::ServiceError;
    use fitness_core::DomainError;

    fn register_request(plan: &str) -> RegisterClientRequest {
        RegisterClientRequest {
            name: "Test".to_string(),
            phone: "+7000".to_string(),
            email: None,
            plan: plan.to_string(),
        }
    }

    #[tokio::test]
    async fn test_checkin_decrements_active_membership() {
        let ctx = memory_context();
        let enrollment = EnrollmentService::new(&ctx)
            .register(register_request("monthly"))
            .await
            .unwrap();

        let response = CheckInService::new(&ctx)
            .record_checkin(ClientId::new(enrollment.client.id))
            .await
            .unwrap();

        let membership = response.membership.unwrap();
        assert_eq!(membership.visits_left, 11);
        assert_eq!(membership.status, "active");
        assert_eq!(response.visit.client_id, enrollment.client.id);
    }

    #[tokio::test]
    async fn test_twelve_checkins_expire_a_monthly_membership() {
        let ctx = memory_context();
        let enrollment = EnrollmentService::new(&ctx)
            .register(register_request("monthly"))
            .await
            .unwrap();
        let client_id = ClientId::new(enrollment.client.id);
        let service = CheckInService::new(&ctx);

        for expected_left in (0..12).rev() {
            let response = service.record_checkin(client_id).await.unwrap();
            let membership = response.membership.unwrap();
            assert_eq!(membership.visits_left, expected_left);
        }

        // The 13th check-in still records a visit; the membership stays
        // expired and the counter stays at zero.
        let response = service.record_checkin(client_id).await.unwrap();
        assert!(response.membership.is_none());

        let stored = ctx
            .membership_repo()
            .find_by_client(client_id)
            .await
            .unwrap();
        assert_eq!(stored[0].visits_left, 0);
        assert_eq!(stored[0].status.as_str(), "expired");

        let visits = ctx.visit_repo().find_by_client(client_id).await.unwrap();
        assert_eq!(visits.len(), 13);
    }

    #[tokio::test]
    async fn test_checkin_unknown_client_fails() {
        let ctx = memory_context();
        let err = CheckInService::new(&ctx)
            .record_checkin(ClientId::new(999))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::ClientNotFound(_))
        ));
    }
}
