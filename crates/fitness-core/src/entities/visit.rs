//! Visit entity - one check-in event

use chrono::{NaiveDate, NaiveTime};

use crate::value_objects::{ClientId, VisitId};

/// A recorded gym visit
///
/// Visits are append-only. The check-in flow never writes `checkout_time`;
/// the column exists for a later checkout feature. A visit does not record
/// which membership it consumed - that link is re-derived through the
/// resolution rule at the moment the visit is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub id: VisitId,
    pub client_id: ClientId,
    pub visit_date: NaiveDate,
    pub checkin_time: NaiveTime,
    pub checkout_time: Option<NaiveTime>,
}

impl Visit {
    /// Check whether the client has checked out again
    #[inline]
    pub fn is_open(&self) -> bool {
        self.checkout_time.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_is_open_without_checkout() {
        let visit = Visit {
            id: VisitId::new(1),
            client_id: ClientId::new(2),
            visit_date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            checkin_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            checkout_time: None,
        };
        assert!(visit.is_open());
    }
}
