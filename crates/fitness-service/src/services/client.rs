//! Client service
//!
//! Read-side client queries and the explicit cascading removal.

use fitness_core::ClientId;
use tracing::{info, instrument};

use crate::dto::{ClientDetailResponse, ClientResponse, MembershipResponse, VisitResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Client service
pub struct ClientService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ClientService<'a> {
    /// Create a new ClientService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all clients ordered by name
    #[instrument(skip(self))]
    pub async fn list_clients(&self) -> ServiceResult<Vec<ClientResponse>> {
        let clients = self.ctx.client_repo().list().await?;
        Ok(clients.iter().map(ClientResponse::from).collect())
    }

    /// Get a client with its currently authoritative membership
    #[instrument(skip(self))]
    pub async fn get_client(&self, client_id: ClientId) -> ServiceResult<ClientDetailResponse> {
        let client = self
            .ctx
            .client_repo()
            .find_by_id(client_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Client", client_id.to_string()))?;

        let membership = self.ctx.membership_repo().resolve_active(client_id).await?;

        Ok(ClientDetailResponse {
            client: ClientResponse::from(&client),
            membership: membership.as_ref().map(MembershipResponse::from),
        })
    }

    /// List a client's visits, newest first
    #[instrument(skip(self))]
    pub async fn get_client_visits(
        &self,
        client_id: ClientId,
    ) -> ServiceResult<Vec<VisitResponse>> {
        // Verify the client exists so an unknown id reads as 404, not []
        let _client = self
            .ctx
            .client_repo()
            .find_by_id(client_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Client", client_id.to_string()))?;

        let visits = self.ctx.visit_repo().find_by_client(client_id).await?;
        Ok(visits.iter().map(VisitResponse::from).collect())
    }

    /// Delete a client with all of its memberships and visits
    #[instrument(skip(self))]
    pub async fn delete_client(&self, client_id: ClientId) -> ServiceResult<()> {
        self.ctx.client_repo().delete_cascading(client_id).await?;
        info!(client_id = %client_id, "Client deleted with memberships and visits");
        Ok(())
    }
}
