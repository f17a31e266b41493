//! Enrollment service
//!
//! Provisions a client (upserted by phone) together with a new membership
//! whose entitlement and validity come from the fixed plan table.

use chrono::Utc;
use fitness_core::entities::{MembershipPlan, MembershipTerms, NewClient};
use tracing::{info, instrument};

use crate::dto::{EnrollmentResponse, RegisterClientRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Enrollment service
pub struct EnrollmentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EnrollmentService<'a> {
    /// Create a new EnrollmentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a client and attach a new membership
    ///
    /// Validation happens before any write; a failed enrollment leaves no
    /// partial state behind.
    #[instrument(skip(self, request))]
    pub async fn register(
        &self,
        request: RegisterClientRequest,
    ) -> ServiceResult<EnrollmentResponse> {
        let name = request.name.trim();
        let phone = request.phone.trim();
        let plan_input = request.plan.trim();

        if name.is_empty() {
            return Err(ServiceError::validation("name must not be empty"));
        }
        if phone.is_empty() {
            return Err(ServiceError::validation("phone must not be empty"));
        }
        if plan_input.is_empty() {
            return Err(ServiceError::validation("plan must not be empty"));
        }

        let plan = MembershipPlan::from_input(plan_input);
        let today = Utc::now().date_naive();
        let terms = MembershipTerms::for_plan(plan, today);
        let profile = NewClient::new(name, phone, request.email, today);

        let enrollment = self.ctx.enrollment_store().enroll(&profile, &terms).await?;

        info!(
            client_id = %enrollment.client.id,
            membership_id = %enrollment.membership.id,
            plan = %enrollment.membership.plan,
            visits_left = enrollment.membership.visits_left,
            "Client enrolled"
        );

        Ok(EnrollmentResponse::from(&enrollment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::memory_context;
    use chrono::Datelike;
    use fitness_core::ClientId;

    fn request(name: &str, phone: &str, plan: &str) -> RegisterClientRequest {
        RegisterClientRequest {
            name: name.to_string(),
            phone: phone.to_string(),
            email: None,
            plan: plan.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_monthly_plan() {
        let ctx = memory_context();
        let response = EnrollmentService::new(&ctx)
            .register(request("Test", "+7000", "monthly"))
            .await
            .unwrap();

        assert_eq!(response.membership.plan, "monthly");
        assert_eq!(response.membership.visits_left, 12);
        assert_eq!(response.membership.status, "active");
        assert_eq!(response.membership.end_date.day(), 28);
        assert_eq!(
            response.membership.end_date.month(),
            response.membership.start_date.month()
        );
    }

    #[tokio::test]
    async fn test_register_rejects_blank_fields() {
        let ctx = memory_context();
        let service = EnrollmentService::new(&ctx);

        for bad in [
            request("  ", "+7000", "monthly"),
            request("Test", "", "monthly"),
            request("Test", "+7000", "   "),
        ] {
            let err = service.register(bad).await.unwrap_err();
            assert_eq!(err.status_code(), 400);
        }

        // Nothing was written
        assert!(ctx.client_repo().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_twice_reuses_client_identity() {
        let ctx = memory_context();
        let service = EnrollmentService::new(&ctx);

        let first = service
            .register(request("Test", "+7000", "monthly"))
            .await
            .unwrap();
        let second = service
            .register(request("Renamed", "+7000", "yearly"))
            .await
            .unwrap();

        assert_eq!(second.client.id, first.client.id);
        // Identity upsert: the stored name is not merged
        assert_eq!(second.client.name, "Test");

        let clients = ctx.client_repo().list().await.unwrap();
        assert_eq!(clients.len(), 1);

        let memberships = ctx
            .membership_repo()
            .find_by_client(ClientId::new(first.client.id))
            .await
            .unwrap();
        assert_eq!(memberships.len(), 2);
    }

    #[tokio::test]
    async fn test_register_unrecognized_plan_buys_single_pass() {
        let ctx = memory_context();
        let response = EnrollmentService::new(&ctx)
            .register(request("Test", "+7000", "platinum"))
            .await
            .unwrap();

        assert_eq!(response.membership.plan, "single");
        assert_eq!(response.membership.visits_left, 1);
        assert_eq!(response.membership.start_date, response.membership.end_date);
    }
}
