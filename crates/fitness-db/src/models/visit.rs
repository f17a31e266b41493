//! Visit database model

use chrono::{NaiveDate, NaiveTime};
use sqlx::FromRow;

/// Database model for the visits table
#[derive(Debug, Clone, FromRow)]
pub struct VisitModel {
    pub id: i64,
    pub client_id: i64,
    pub visit_date: NaiveDate,
    pub checkin_time: NaiveTime,
    pub checkout_time: Option<NaiveTime>,
}
