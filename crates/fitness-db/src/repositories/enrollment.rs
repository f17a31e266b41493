//! PostgreSQL implementation of client/membership provisioning
//!
//! The client upsert and the membership insert commit or roll back as one
//! unit. The upsert is identity-only: an existing client keeps its stored
//! name and email. Prior memberships are never closed, active ones
//! included - resolution at read time decides which row counts.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use fitness_core::entities::{Client, Membership, MembershipTerms, NewClient};
use fitness_core::error::DomainError;
use fitness_core::traits::{Enrollment, EnrollmentStore, RepoResult};

use crate::models::{ClientModel, MembershipModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of EnrollmentStore
#[derive(Clone)]
pub struct PgEnrollmentStore {
    pool: PgPool,
}

impl PgEnrollmentStore {
    /// Create a new PgEnrollmentStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentStore for PgEnrollmentStore {
    #[instrument(skip(self))]
    async fn enroll(
        &self,
        profile: &NewClient,
        terms: &MembershipTerms,
    ) -> RepoResult<Enrollment> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let existing = sqlx::query_as::<_, ClientModel>(
            r"
            SELECT id, name, phone, email, join_date
            FROM clients
            WHERE phone = $1
            ",
        )
        .bind(&profile.phone)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let client = match existing {
            Some(model) => Client::from(model),
            None => {
                let model = sqlx::query_as::<_, ClientModel>(
                    r"
                    INSERT INTO clients (name, phone, email, join_date)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, name, phone, email, join_date
                    ",
                )
                .bind(&profile.name)
                .bind(&profile.phone)
                .bind(&profile.email)
                .bind(profile.join_date)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| map_unique_violation(e, || DomainError::PhoneAlreadyExists))?;
                Client::from(model)
            }
        };

        let model = sqlx::query_as::<_, MembershipModel>(
            r"
            INSERT INTO memberships (client_id, plan, start_date, end_date, visits_left, status)
            VALUES ($1, $2, $3, $4, $5, 'active')
            RETURNING id, client_id, plan, start_date, end_date, visits_left, status
            ",
        )
        .bind(client.id.into_inner())
        .bind(terms.plan.as_str())
        .bind(terms.start_date)
        .bind(terms.end_date)
        .bind(terms.visits_left)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;
        let membership = Membership::try_from(model)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Enrollment { client, membership })
    }
}
