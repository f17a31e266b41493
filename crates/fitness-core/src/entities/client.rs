//! Client entity - a registered gym client

use chrono::NaiveDate;

use crate::value_objects::ClientId;

/// Gym client identified by a unique phone number
///
/// Clients are immutable after creation; the only mutation the domain allows
/// is the explicit cascading removal of the client with all of its
/// memberships and visits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub join_date: NaiveDate,
}

/// Data for a client that does not exist in the store yet
///
/// The id is assigned by the store on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub join_date: NaiveDate,
}

impl NewClient {
    /// Create a new client profile joining on the given date
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: Option<String>,
        join_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email,
            join_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client() {
        let join_date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let profile = NewClient::new("Test Client", "+7000", None, join_date);
        assert_eq!(profile.name, "Test Client");
        assert_eq!(profile.phone, "+7000");
        assert!(profile.email.is_none());
        assert_eq!(profile.join_date, join_date);
    }
}
