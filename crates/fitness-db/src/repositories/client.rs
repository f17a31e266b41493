//! PostgreSQL implementation of ClientRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use fitness_core::entities::{Client, NewClient};
use fitness_core::error::DomainError;
use fitness_core::traits::{ClientRepository, RepoResult};
use fitness_core::value_objects::ClientId;

use crate::models::ClientModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ClientRepository
#[derive(Clone)]
pub struct PgClientRepository {
    pool: PgPool,
}

impl PgClientRepository {
    /// Create a new PgClientRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ClientId) -> RepoResult<Option<Client>> {
        let result = sqlx::query_as::<_, ClientModel>(
            r"
            SELECT id, name, phone, email, join_date
            FROM clients
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Client::from))
    }

    #[instrument(skip(self))]
    async fn find_by_phone(&self, phone: &str) -> RepoResult<Option<Client>> {
        let result = sqlx::query_as::<_, ClientModel>(
            r"
            SELECT id, name, phone, email, join_date
            FROM clients
            WHERE phone = $1
            ",
        )
        .bind(phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Client::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Client>> {
        let result = sqlx::query_as::<_, ClientModel>(
            r"
            SELECT id, name, phone, email, join_date
            FROM clients
            ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Client::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, client: &NewClient) -> RepoResult<Client> {
        let model = sqlx::query_as::<_, ClientModel>(
            r"
            INSERT INTO clients (name, phone, email, join_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, phone, email, join_date
            ",
        )
        .bind(&client.name)
        .bind(&client.phone)
        .bind(&client.email)
        .bind(client.join_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::PhoneAlreadyExists))?;

        Ok(Client::from(model))
    }

    #[instrument(skip(self))]
    async fn delete_cascading(&self, id: ClientId) -> RepoResult<()> {
        // Explicit child-first deletes inside one transaction; a failure in
        // any step leaves every row in place.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM visits WHERE client_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query("DELETE FROM memberships WHERE client_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgClientRepository>();
    }
}
