//! Entity to DTO mappers

use fitness_core::entities::{Client, Membership, Visit};
use fitness_core::traits::{CheckIn, Enrollment};

use super::responses::{
    CheckInResponse, ClientResponse, EnrollmentResponse, MembershipResponse, VisitResponse,
};

impl From<&Client> for ClientResponse {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id.into_inner(),
            name: client.name.clone(),
            phone: client.phone.clone(),
            email: client.email.clone(),
            join_date: client.join_date,
        }
    }
}

impl From<&Membership> for MembershipResponse {
    fn from(membership: &Membership) -> Self {
        Self {
            id: membership.id.into_inner(),
            client_id: membership.client_id.into_inner(),
            plan: membership.plan.as_str().to_string(),
            start_date: membership.start_date,
            end_date: membership.end_date,
            visits_left: membership.visits_left,
            status: membership.status.as_str().to_string(),
        }
    }
}

impl From<&Visit> for VisitResponse {
    fn from(visit: &Visit) -> Self {
        Self {
            id: visit.id.into_inner(),
            client_id: visit.client_id.into_inner(),
            visit_date: visit.visit_date,
            checkin_time: visit.checkin_time,
            checkout_time: visit.checkout_time,
        }
    }
}

impl From<&CheckIn> for CheckInResponse {
    fn from(checkin: &CheckIn) -> Self {
        Self {
            visit: VisitResponse::from(&checkin.visit),
            membership: checkin.membership.as_ref().map(MembershipResponse::from),
        }
    }
}

impl From<&Enrollment> for EnrollmentResponse {
    fn from(enrollment: &Enrollment) -> Self {
        Self {
            client: ClientResponse::from(&enrollment.client),
            membership: MembershipResponse::from(&enrollment.membership),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fitness_core::entities::{MembershipPlan, MembershipStatus};
    use fitness_core::value_objects::{ClientId, MembershipId};

    #[test]
    fn test_membership_response_uses_catalog_strings() {
        let membership = Membership {
            id: MembershipId::new(3),
            client_id: ClientId::new(1),
            plan: MembershipPlan::Yearly,
            start_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2027, 2, 1).unwrap(),
            visits_left: 120,
            status: MembershipStatus::Active,
        };
        let response = MembershipResponse::from(&membership);
        assert_eq!(response.plan, "yearly");
        assert_eq!(response.status, "active");
        assert_eq!(response.id, 3);
    }
}
