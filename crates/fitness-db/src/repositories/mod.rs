//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! fitness-core. Entity repositories handle reads and single-row writes;
//! the lifecycle stores own the multi-row transactions (check-in
//! application, client/membership provisioning, cascading delete).

mod checkin;
mod client;
mod enrollment;
mod error;
mod membership;
mod visit;

pub use checkin::PgEntitlementStore;
pub use client::PgClientRepository;
pub use enrollment::PgEnrollmentStore;
pub use membership::PgMembershipRepository;
pub use visit::PgVisitRepository;
