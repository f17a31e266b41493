//! Membership database model

use chrono::NaiveDate;
use sqlx::FromRow;

/// Database model for the memberships table
///
/// `plan` and `status` are TEXT columns guarded by CHECK constraints; the
/// mapper parses them into their domain enums.
#[derive(Debug, Clone, FromRow)]
pub struct MembershipModel {
    pub id: i64,
    pub client_id: i64,
    pub plan: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub visits_left: i32,
    pub status: String,
}
