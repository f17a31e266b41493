//! Membership entity <-> model mapper

use fitness_core::entities::Membership;
use fitness_core::error::DomainError;
use fitness_core::value_objects::{ClientId, MembershipId};

use crate::models::MembershipModel;

/// Convert a membership row, parsing the constrained text columns
///
/// The CHECK constraints keep the columns within the catalog, so a parse
/// failure means the schema and the domain drifted apart - surfaced as a
/// store error rather than papered over.
impl TryFrom<MembershipModel> for Membership {
    type Error = DomainError;

    fn try_from(model: MembershipModel) -> Result<Self, Self::Error> {
        let plan = model
            .plan
            .parse()
            .map_err(|e| DomainError::DatabaseError(format!("memberships.plan: {e}")))?;
        let status = model
            .status
            .parse()
            .map_err(|e| DomainError::DatabaseError(format!("memberships.status: {e}")))?;

        Ok(Membership {
            id: MembershipId::new(model.id),
            client_id: ClientId::new(model.client_id),
            plan,
            start_date: model.start_date,
            end_date: model.end_date,
            visits_left: model.visits_left,
            status,
        })
    }
}
