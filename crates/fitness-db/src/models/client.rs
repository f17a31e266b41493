//! Client database model

use chrono::NaiveDate;
use sqlx::FromRow;

/// Database model for the clients table
#[derive(Debug, Clone, FromRow)]
pub struct ClientModel {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub join_date: NaiveDate,
}
