//! PostgreSQL implementation of the entitlement engine
//!
//! The visit insert and the membership decrement commit or roll back as one
//! unit. The client's membership rows are locked for the duration of the
//! transaction, so two concurrent check-ins for the same client serialize on
//! the row lock and each sees the other's decrement - the lost-update hazard
//! is closed by the store, with no in-process locking.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use tracing::instrument;

use fitness_core::entities::{resolve_active, Membership, Visit};
use fitness_core::traits::{CheckIn, EntitlementStore, RepoResult};
use fitness_core::value_objects::ClientId;

use crate::models::{MembershipModel, VisitModel};

use super::error::{client_not_found, map_db_error};

/// PostgreSQL implementation of EntitlementStore
#[derive(Clone)]
pub struct PgEntitlementStore {
    pool: PgPool,
}

impl PgEntitlementStore {
    /// Create a new PgEntitlementStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntitlementStore for PgEntitlementStore {
    #[instrument(skip(self))]
    async fn apply_visit(
        &self,
        client_id: ClientId,
        visit_date: NaiveDate,
        checkin_time: NaiveTime,
    ) -> RepoResult<CheckIn> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM clients WHERE id = $1)
            ",
        )
        .bind(client_id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if !exists {
            return Err(client_not_found(client_id));
        }

        let visit_model = sqlx::query_as::<_, VisitModel>(
            r"
            INSERT INTO visits (client_id, visit_date, checkin_time)
            VALUES ($1, $2, $3)
            RETURNING id, client_id, visit_date, checkin_time, checkout_time
            ",
        )
        .bind(client_id.into_inner())
        .bind(visit_date)
        .bind(checkin_time)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;
        let visit = Visit::from(visit_model);

        // Lock every membership row of the client so resolution and the
        // decrement see a stable set. Resolution is re-evaluated here, at
        // mutation time - never cached from an earlier read.
        let models = sqlx::query_as::<_, MembershipModel>(
            r"
            SELECT id, client_id, plan, start_date, end_date, visits_left, status
            FROM memberships
            WHERE client_id = $1
            ORDER BY id
            FOR UPDATE
            ",
        )
        .bind(client_id.into_inner())
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let memberships = models
            .into_iter()
            .map(Membership::try_from)
            .collect::<RepoResult<Vec<_>>>()?;

        // No active membership: the visit stands on its own (observed
        // behavior - entitlement effects are skip-if-absent).
        let membership = match resolve_active(&memberships) {
            Some(active) => {
                let mut updated = active.clone();
                updated.consume_visit();

                sqlx::query(
                    r"
                    UPDATE memberships
                    SET visits_left = $2, status = $3
                    WHERE id = $1
                    ",
                )
                .bind(updated.id.into_inner())
                .bind(updated.visits_left)
                .bind(updated.status.as_str())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

                Some(updated)
            }
            None => None,
        };

        tx.commit().await.map_err(map_db_error)?;

        Ok(CheckIn { visit, membership })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgEntitlementStore>();
    }
}
