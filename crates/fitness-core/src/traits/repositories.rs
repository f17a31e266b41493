//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. The two lifecycle stores bundle the
//! multi-row mutations whose atomicity the store must guarantee: a visit
//! insert with its entitlement effect, and a client upsert with its new
//! membership. Handing them to callers as single operations keeps "half a
//! check-in" unrepresentable.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use crate::entities::{Client, Membership, MembershipTerms, NewClient, Visit};
use crate::error::DomainError;
use crate::value_objects::ClientId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Outcome of applying a check-in
///
/// `membership` is the resolved active membership after the decrement, or
/// `None` when the client had no active membership - the visit is recorded
/// either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIn {
    pub visit: Visit,
    pub membership: Option<Membership>,
}

/// Outcome of provisioning a client with a new membership
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub client: Client,
    pub membership: Membership,
}

// ============================================================================
// Client Repository
// ============================================================================

#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Find client by ID
    async fn find_by_id(&self, id: ClientId) -> RepoResult<Option<Client>>;

    /// Find client by phone number (the natural key)
    async fn find_by_phone(&self, phone: &str) -> RepoResult<Option<Client>>;

    /// List all clients ordered by name
    async fn list(&self) -> RepoResult<Vec<Client>>;

    /// Create a new client; the store assigns the id
    async fn create(&self, client: &NewClient) -> RepoResult<Client>;

    /// Delete a client together with all of its memberships and visits
    ///
    /// The cascade is explicit row deletion inside one transaction, so a
    /// partial purge is never observable. Deleting an unknown id is a no-op.
    async fn delete_cascading(&self, id: ClientId) -> RepoResult<()>;
}

// ============================================================================
// Membership Repository
// ============================================================================

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// List all membership rows of a client, oldest first
    async fn find_by_client(&self, client_id: ClientId) -> RepoResult<Vec<Membership>>;

    /// Resolve the single authoritative active membership of a client
    ///
    /// Implementations must apply [`crate::entities::resolve_active`] so the
    /// newest-id tie-break stays in one place.
    async fn resolve_active(&self, client_id: ClientId) -> RepoResult<Option<Membership>>;

    /// Issue a new active membership with the given terms
    async fn create(&self, client_id: ClientId, terms: &MembershipTerms) -> RepoResult<Membership>;
}

// ============================================================================
// Visit Repository
// ============================================================================

#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// List a client's visits, newest first
    async fn find_by_client(&self, client_id: ClientId) -> RepoResult<Vec<Visit>>;
}

// ============================================================================
// Lifecycle Stores
// ============================================================================

/// The entitlement engine port
#[async_trait]
pub trait EntitlementStore: Send + Sync {
    /// Record a visit and apply its entitlement effect atomically
    ///
    /// Fails with `ClientNotFound` when the client does not exist. When the
    /// client has no active membership the visit is still recorded and no
    /// membership is touched. Visit insert and membership update commit or
    /// roll back together.
    async fn apply_visit(
        &self,
        client_id: ClientId,
        visit_date: NaiveDate,
        checkin_time: NaiveTime,
    ) -> RepoResult<CheckIn>;
}

/// The provisioning port
#[async_trait]
pub trait EnrollmentStore: Send + Sync {
    /// Upsert a client by phone and attach a new active membership
    ///
    /// An existing client is reused as-is (identity upsert, no field merge);
    /// its prior memberships are left untouched, active ones included.
    /// Client insert and membership insert commit or roll back together.
    async fn enroll(&self, profile: &NewClient, terms: &MembershipTerms)
        -> RepoResult<Enrollment>;
}
