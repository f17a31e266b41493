//! Entity to model mappers
//!
//! This module provides conversions between domain entities (fitness-core)
//! and database models.
//! - `From<Model> for Entity`: infallible conversions
//! - `TryFrom<Model> for Entity`: conversions that parse constrained text
//!   columns (plan, status) into domain enums

mod client;
mod membership;
mod visit;
