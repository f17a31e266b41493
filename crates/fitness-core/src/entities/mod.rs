//! Domain entities - core business objects

mod client;
mod membership;
mod visit;

pub use client::{Client, NewClient};
pub use membership::{
    resolve_active, Membership, MembershipPlan, MembershipStatus, MembershipTerms,
    ParsePlanError, ParseStatusError,
};
pub use visit::Visit;
