//! Client entity <-> model mapper

use fitness_core::entities::Client;
use fitness_core::value_objects::ClientId;

use crate::models::ClientModel;

impl From<ClientModel> for Client {
    fn from(model: ClientModel) -> Self {
        Client {
            id: ClientId::new(model.id),
            name: model.name,
            phone: model.phone,
            email: model.email,
            join_date: model.join_date,
        }
    }
}
