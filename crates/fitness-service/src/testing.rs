//! In-memory store doubles for service tests
//!
//! One `MemoryStore` implements every port, mirroring the transactional
//! stores' semantics over plain vectors. Resolution and entitlement
//! consumption go through the same pure functions the real stores use, so
//! the rules under test are the production rules.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use fitness_core::entities::{
    resolve_active, Client, Membership, MembershipStatus, MembershipTerms, NewClient, Visit,
};
use fitness_core::error::DomainError;
use fitness_core::traits::{
    CheckIn, ClientRepository, Enrollment, EnrollmentStore, EntitlementStore,
    MembershipRepository, RepoResult, VisitRepository,
};
use fitness_core::value_objects::{ClientId, MembershipId, VisitId};

use crate::services::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct State {
    clients: Vec<Client>,
    memberships: Vec<Membership>,
    visits: Vec<Visit>,
    next_id: i64,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory implementation of every store port
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

#[async_trait]
impl ClientRepository for MemoryStore {
    async fn find_by_id(&self, id: ClientId) -> RepoResult<Option<Client>> {
        let state = self.state.lock().unwrap();
        Ok(state.clients.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_phone(&self, phone: &str) -> RepoResult<Option<Client>> {
        let state = self.state.lock().unwrap();
        Ok(state.clients.iter().find(|c| c.phone == phone).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Client>> {
        let state = self.state.lock().unwrap();
        let mut clients = state.clients.clone();
        clients.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(clients)
    }

    async fn create(&self, client: &NewClient) -> RepoResult<Client> {
        let mut state = self.state.lock().unwrap();
        if state.clients.iter().any(|c| c.phone == client.phone) {
            return Err(DomainError::PhoneAlreadyExists);
        }
        let id = state.next_id();
        let client = Client {
            id: ClientId::new(id),
            name: client.name.clone(),
            phone: client.phone.clone(),
            email: client.email.clone(),
            join_date: client.join_date,
        };
        state.clients.push(client.clone());
        Ok(client)
    }

    async fn delete_cascading(&self, id: ClientId) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        state.visits.retain(|v| v.client_id != id);
        state.memberships.retain(|m| m.client_id != id);
        state.clients.retain(|c| c.id != id);
        Ok(())
    }
}

#[async_trait]
impl MembershipRepository for MemoryStore {
    async fn find_by_client(&self, client_id: ClientId) -> RepoResult<Vec<Membership>> {
        let state = self.state.lock().unwrap();
        let mut memberships: Vec<_> = state
            .memberships
            .iter()
            .filter(|m| m.client_id == client_id)
            .cloned()
            .collect();
        memberships.sort_by_key(|m| m.id);
        Ok(memberships)
    }

    async fn resolve_active(&self, client_id: ClientId) -> RepoResult<Option<Membership>> {
        let memberships = MembershipRepository::find_by_client(self, client_id).await?;
        Ok(resolve_active(&memberships).cloned())
    }

    async fn create(
        &self,
        client_id: ClientId,
        terms: &MembershipTerms,
    ) -> RepoResult<Membership> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        let membership = Membership {
            id: MembershipId::new(id),
            client_id,
            plan: terms.plan,
            start_date: terms.start_date,
            end_date: terms.end_date,
            visits_left: terms.visits_left,
            status: MembershipStatus::Active,
        };
        state.memberships.push(membership.clone());
        Ok(membership)
    }
}

#[async_trait]
impl VisitRepository for MemoryStore {
    async fn find_by_client(&self, client_id: ClientId) -> RepoResult<Vec<Visit>> {
        let state = self.state.lock().unwrap();
        let mut visits: Vec<_> = state
            .visits
            .iter()
            .filter(|v| v.client_id == client_id)
            .cloned()
            .collect();
        visits.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(visits)
    }
}

#[async_trait]
impl EntitlementStore for MemoryStore {
    async fn apply_visit(
        &self,
        client_id: ClientId,
        visit_date: NaiveDate,
        checkin_time: NaiveTime,
    ) -> RepoResult<CheckIn> {
        let mut state = self.state.lock().unwrap();

        if !state.clients.iter().any(|c| c.id == client_id) {
            return Err(DomainError::ClientNotFound(client_id));
        }

        let id = state.next_id();
        let visit = Visit {
            id: VisitId::new(id),
            client_id,
            visit_date,
            checkin_time,
            checkout_time: None,
        };
        state.visits.push(visit.clone());

        let client_memberships: Vec<_> = state
            .memberships
            .iter()
            .filter(|m| m.client_id == client_id)
            .cloned()
            .collect();

        let membership = match resolve_active(&client_memberships) {
            Some(active) => {
                let mut updated = active.clone();
                updated.consume_visit();
                if let Some(stored) = state.memberships.iter_mut().find(|m| m.id == updated.id) {
                    *stored = updated.clone();
                }
                Some(updated)
            }
            None => None,
        };

        Ok(CheckIn { visit, membership })
    }
}

#[async_trait]
impl EnrollmentStore for MemoryStore {
    async fn enroll(
        &self,
        profile: &NewClient,
        terms: &MembershipTerms,
    ) -> RepoResult<Enrollment> {
        let mut state = self.state.lock().unwrap();

        let client = match state.clients.iter().find(|c| c.phone == profile.phone) {
            Some(existing) => existing.clone(),
            None => {
                let id = state.next_id();
                let client = Client {
                    id: ClientId::new(id),
                    name: profile.name.clone(),
                    phone: profile.phone.clone(),
                    email: profile.email.clone(),
                    join_date: profile.join_date,
                };
                state.clients.push(client.clone());
                client
            }
        };

        let id = state.next_id();
        let membership = Membership {
            id: MembershipId::new(id),
            client_id: client.id,
            plan: terms.plan,
            start_date: terms.start_date,
            end_date: terms.end_date,
            visits_left: terms.visits_left,
            status: MembershipStatus::Active,
        };
        state.memberships.push(membership.clone());

        Ok(Enrollment { client, membership })
    }
}

/// Build a service context backed by a single in-memory store
pub fn memory_context() -> ServiceContext {
    let store = Arc::new(MemoryStore::default());
    ServiceContextBuilder::new()
        .client_repo(store.clone())
        .membership_repo(store.clone())
        .visit_repo(store.clone())
        .entitlement_store(store.clone())
        .enrollment_store(store)
        .build()
        .expect("memory context has every dependency")
}
