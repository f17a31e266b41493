//! Membership entity - a client's entitlement to visit the gym
//!
//! A client accumulates membership rows over time; renewals never close the
//! previous row, so several rows may carry `status = active` at once. Which
//! one is authoritative is decided by [`resolve_active`]: newest id wins.
//! `expired` is terminal - no transition leads back to `active`.

use chrono::{Datelike, Days, NaiveDate};

use crate::value_objects::{ClientId, MembershipId};

/// Plan catalog determining initial entitlement and validity window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MembershipPlan {
    Monthly,
    Single,
    Yearly,
}

impl MembershipPlan {
    /// Canonical store representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Single => "single",
            Self::Yearly => "yearly",
        }
    }

    /// Interpret user input, falling back to a single visit pass
    ///
    /// Anything that is not a recognized plan name buys exactly one visit
    /// valid today. The store column only ever receives catalog values.
    pub fn from_input(s: &str) -> Self {
        match s.trim() {
            "monthly" => Self::Monthly,
            "yearly" => Self::Yearly,
            _ => Self::Single,
        }
    }
}

impl std::fmt::Display for MembershipPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a plan from its store representation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown membership plan: {0}")]
pub struct ParsePlanError(pub String);

impl std::str::FromStr for MembershipPlan {
    type Err = ParsePlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Self::Monthly),
            "single" => Ok(Self::Single),
            "yearly" => Ok(Self::Yearly),
            other => Err(ParsePlanError(other.to_string())),
        }
    }
}

/// Membership lifecycle state; `Expired` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MembershipStatus {
    Active,
    Expired,
}

impl MembershipStatus {
    /// Canonical store representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
        }
    }
}

impl std::fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a status from its store representation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown membership status: {0}")]
pub struct ParseStatusError(pub String);

impl std::str::FromStr for MembershipStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "expired" => Ok(Self::Expired),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Plan parameters for a membership about to be issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipTerms {
    pub plan: MembershipPlan,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub visits_left: i32,
}

impl MembershipTerms {
    /// Compute the fixed terms table for a plan starting today
    ///
    /// The monthly end date is a fixed day-28 cutoff within the start month,
    /// not "one month later". A single pass is valid on its start day only.
    pub fn for_plan(plan: MembershipPlan, today: NaiveDate) -> Self {
        let (end_date, visits_left) = match plan {
            MembershipPlan::Monthly => {
                let cutoff = NaiveDate::from_ymd_opt(today.year(), today.month(), 28)
                    .unwrap_or(today);
                (cutoff, 12)
            }
            MembershipPlan::Yearly => {
                // Feb 29 has no same-day anniversary; land a year of days out.
                let next_year = today
                    .with_year(today.year() + 1)
                    .unwrap_or_else(|| today + Days::new(365));
                (next_year, 120)
            }
            MembershipPlan::Single => (today, 1),
        };

        Self {
            plan,
            start_date: today,
            end_date,
            visits_left,
        }
    }
}

/// Membership entity carrying the remaining visit entitlement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub id: MembershipId,
    pub client_id: ClientId,
    pub plan: MembershipPlan,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub visits_left: i32,
    pub status: MembershipStatus,
}

impl Membership {
    /// Check whether this membership still admits visits
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == MembershipStatus::Active
    }

    /// Consume one visit's worth of entitlement
    ///
    /// Decrements the counter (never below zero) and flips the status to
    /// `Expired` once the entitlement is exhausted. The threshold is the
    /// same for every plan. Returns `false` without touching anything when
    /// the membership is already expired.
    pub fn consume_visit(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }

        self.visits_left = (self.visits_left - 1).max(0);
        if self.visits_left == 0 {
            self.status = MembershipStatus::Expired;
        }
        true
    }
}

/// Pick the authoritative membership for new activity
///
/// Among rows with `status = active`, the one with the greatest id wins.
/// Renewals never close prior rows, so ties in "activeness" are real and
/// this tie-break is what makes concurrent readers agree on a single answer.
pub fn resolve_active(memberships: &[Membership]) -> Option<&Membership> {
    memberships
        .iter()
        .filter(|m| m.is_active())
        .max_by_key(|m| m.id)
}
