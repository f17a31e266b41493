//! Service context - dependency container for services
//!
//! Holds the repositories and lifecycle stores needed by services. Store
//! handles are injected explicitly (no process-global database handle), so
//! tests can swap in doubles.

use std::sync::Arc;

use fitness_core::traits::{
    ClientRepository, EnrollmentStore, EntitlementStore, MembershipRepository, VisitRepository,
};
use fitness_db::PgPool;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool, kept for readiness probes; absent when the context is
    // backed by test doubles
    pool: Option<PgPool>,

    // Repositories
    client_repo: Arc<dyn ClientRepository>,
    membership_repo: Arc<dyn MembershipRepository>,
    visit_repo: Arc<dyn VisitRepository>,

    // Lifecycle stores
    entitlement_store: Arc<dyn EntitlementStore>,
    enrollment_store: Arc<dyn EnrollmentStore>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: Option<PgPool>,
        client_repo: Arc<dyn ClientRepository>,
        membership_repo: Arc<dyn MembershipRepository>,
        visit_repo: Arc<dyn VisitRepository>,
        entitlement_store: Arc<dyn EntitlementStore>,
        enrollment_store: Arc<dyn EnrollmentStore>,
    ) -> Self {
        Self {
            pool,
            client_repo,
            membership_repo,
            visit_repo,
            entitlement_store,
            enrollment_store,
        }
    }

    /// Get the PostgreSQL connection pool, if one backs this context
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Get the client repository
    pub fn client_repo(&self) -> &dyn ClientRepository {
        self.client_repo.as_ref()
    }

    /// Get the membership repository
    pub fn membership_repo(&self) -> &dyn MembershipRepository {
        self.membership_repo.as_ref()
    }

    /// Get the visit repository
    pub fn visit_repo(&self) -> &dyn VisitRepository {
        self.visit_repo.as_ref()
    }

    /// Get the entitlement engine store
    pub fn entitlement_store(&self) -> &dyn EntitlementStore {
        self.entitlement_store.as_ref()
    }

    /// Get the provisioning store
    pub fn enrollment_store(&self) -> &dyn EnrollmentStore {
        self.enrollment_store.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.is_some())
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    client_repo: Option<Arc<dyn ClientRepository>>,
    membership_repo: Option<Arc<dyn MembershipRepository>>,
    visit_repo: Option<Arc<dyn VisitRepository>>,
    entitlement_store: Option<Arc<dyn EntitlementStore>>,
    enrollment_store: Option<Arc<dyn EnrollmentStore>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            client_repo: None,
            membership_repo: None,
            visit_repo: None,
            entitlement_store: None,
            enrollment_store: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn client_repo(mut self, repo: Arc<dyn ClientRepository>) -> Self {
        self.client_repo = Some(repo);
        self
    }

    pub fn membership_repo(mut self, repo: Arc<dyn MembershipRepository>) -> Self {
        self.membership_repo = Some(repo);
        self
    }

    pub fn visit_repo(mut self, repo: Arc<dyn VisitRepository>) -> Self {
        self.visit_repo = Some(repo);
        self
    }

    pub fn entitlement_store(mut self, store: Arc<dyn EntitlementStore>) -> Self {
        self.entitlement_store = Some(store);
        self
    }

    pub fn enrollment_store(mut self, store: Arc<dyn EnrollmentStore>) -> Self {
        self.enrollment_store = Some(store);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool,
            self.client_repo
                .ok_or_else(|| ServiceError::validation("client_repo is required"))?,
            self.membership_repo
                .ok_or_else(|| ServiceError::validation("membership_repo is required"))?,
            self.visit_repo
                .ok_or_else(|| ServiceError::validation("visit_repo is required"))?,
            self.entitlement_store
                .ok_or_else(|| ServiceError::validation("entitlement_store is required"))?,
            self.enrollment_store
                .ok_or_else(|| ServiceError::validation("enrollment_store is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
