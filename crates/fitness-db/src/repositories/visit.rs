//! PostgreSQL implementation of VisitRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use fitness_core::entities::Visit;
use fitness_core::traits::{RepoResult, VisitRepository};
use fitness_core::value_objects::ClientId;

use crate::models::VisitModel;

use super::error::map_db_error;

/// PostgreSQL implementation of VisitRepository
#[derive(Clone)]
pub struct PgVisitRepository {
    pool: PgPool,
}

impl PgVisitRepository {
    /// Create a new PgVisitRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitRepository for PgVisitRepository {
    #[instrument(skip(self))]
    async fn find_by_client(&self, client_id: ClientId) -> RepoResult<Vec<Visit>> {
        let models = sqlx::query_as::<_, VisitModel>(
            r"
            SELECT id, client_id, visit_date, checkin_time, checkout_time
            FROM visits
            WHERE client_id = $1
            ORDER BY visit_date DESC, checkin_time DESC
            ",
        )
        .bind(client_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Visit::from).collect())
    }
}
