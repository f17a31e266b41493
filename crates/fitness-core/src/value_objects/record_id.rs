//! Typed record identifiers
//!
//! Primary keys are assigned by the store's sequences, so an id value only
//! exists once the row does. The newtypes keep a client id from being passed
//! where a membership id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error when parsing a record id from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecordIdParseError {
    #[error("invalid record id format")]
    InvalidFormat,
}

macro_rules! record_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create from a raw i64 value
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the inner i64 value
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = RecordIdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>()
                    .map(Self)
                    .map_err(|_| RecordIdParseError::InvalidFormat)
            }
        }
    };
}

record_id!(
    /// Identifier of a [`crate::entities::Client`] row
    ClientId
);
record_id!(
    /// Identifier of a [`crate::entities::Membership`] row
    MembershipId
);
record_id!(
    /// Identifier of a [`crate::entities::Visit`] row
    VisitId
);
