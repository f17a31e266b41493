//! # fitness-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `fitness-core`. It handles:
//!
//! - Connection pool management and embedded schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the two transactional lifecycle
//!   stores (check-in application, client/membership provisioning)
//!
//! The schema's decrement-on-visit behavior is NOT a database trigger; it is
//! an explicit transactional step in [`repositories::PgEntitlementStore`] so
//! the rule stays visible, testable, and portable across backends.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fitness_db::pool::{create_pool, DatabaseConfig};
//! use fitness_db::repositories::PgClientRepository;
//! use fitness_core::traits::ClientRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     fitness_db::run_migrations(&pool).await?;
//!     let client_repo = PgClientRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgClientRepository, PgEnrollmentStore, PgEntitlementStore, PgMembershipRepository,
    PgVisitRepository,
};
