//! PostgreSQL implementation of MembershipRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use fitness_core::entities::{resolve_active, Membership, MembershipTerms};
use fitness_core::traits::{MembershipRepository, RepoResult};
use fitness_core::value_objects::ClientId;

use crate::models::MembershipModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MembershipRepository
#[derive(Clone)]
pub struct PgMembershipRepository {
    pool: PgPool,
}

impl PgMembershipRepository {
    /// Create a new PgMembershipRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembershipRepository for PgMembershipRepository {
    #[instrument(skip(self))]
    async fn find_by_client(&self, client_id: ClientId) -> RepoResult<Vec<Membership>> {
        let models = sqlx::query_as::<_, MembershipModel>(
            r"
            SELECT id, client_id, plan, start_date, end_date, visits_left, status
            FROM memberships
            WHERE client_id = $1
            ORDER BY id
            ",
        )
        .bind(client_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(Membership::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn resolve_active(&self, client_id: ClientId) -> RepoResult<Option<Membership>> {
        // Resolution goes through the one pure tie-break function rather
        // than an ORDER BY .. LIMIT 1 baked into SQL.
        let memberships = self.find_by_client(client_id).await?;
        Ok(resolve_active(&memberships).cloned())
    }

    #[instrument(skip(self))]
    async fn create(
        &self,
        client_id: ClientId,
        terms: &MembershipTerms,
    ) -> RepoResult<Membership> {
        let model = sqlx::query_as::<_, MembershipModel>(
            r"
            INSERT INTO memberships (client_id, plan, start_date, end_date, visits_left, status)
            VALUES ($1, $2, $3, $4, $5, 'active')
            RETURNING id, client_id, plan, start_date, end_date, visits_left, status
            ",
        )
        .bind(client_id.into_inner())
        .bind(terms.plan.as_str())
        .bind(terms.start_date)
        .bind(terms.end_date)
        .bind(terms.visits_left)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Membership::try_from(model)
    }
}
