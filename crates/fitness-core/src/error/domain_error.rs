//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{ClientId, MembershipId};

/// Domain layer errors
///
/// Three classes matter to callers: not-found (a referenced record is
/// absent), validation (caller input rejected before any write), and store
/// failures (constraint violation, transaction conflict, I/O). Every
/// multi-row mutation rolls back wholly when one of these surfaces mid-way.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Client not found: {0}")]
    ClientNotFound(ClientId),

    #[error("Membership not found: {0}")]
    MembershipNotFound(MembershipId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Phone number already registered")]
    PhoneAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ClientNotFound(_) => "UNKNOWN_CLIENT",
            Self::MembershipNotFound(_) => "UNKNOWN_MEMBERSHIP",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::PhoneAlreadyExists => "PHONE_ALREADY_EXISTS",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ClientNotFound(_) | Self::MembershipNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::MissingField(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::PhoneAlreadyExists)
    }
}
