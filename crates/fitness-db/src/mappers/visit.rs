//! Visit entity <-> model mapper

use fitness_core::entities::Visit;
use fitness_core::value_objects::{ClientId, VisitId};

use crate::models::VisitModel;

impl From<VisitModel> for Visit {
    fn from(model: VisitModel) -> Self {
        Visit {
            id: VisitId::new(model.id),
            client_id: ClientId::new(model.client_id),
            visit_date: model.visit_date,
            checkin_time: model.checkin_time,
            checkout_time: model.checkout_time,
        }
    }
}
