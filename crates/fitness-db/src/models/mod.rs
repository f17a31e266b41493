//! Database models - SQLx-compatible structs for PostgreSQL tables

mod client;
mod membership;
mod visit;

pub use client::ClientModel;
pub use membership::MembershipModel;
pub use visit::VisitModel;
