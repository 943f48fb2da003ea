//! Application state for shared services

use std::sync::Arc;

use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::DomainError;
use crate::infrastructure::team::{CreateTeamRequest, TeamService, UpdateTeamRequest};

/// Application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub team_service: Arc<dyn TeamServiceTrait>,
}

impl AppState {
    pub fn new(team_service: Arc<dyn TeamServiceTrait>) -> Self {
        Self { team_service }
    }
}

/// Trait for team service operations
#[async_trait::async_trait]
pub trait TeamServiceTrait: Send + Sync {
    async fn create(&self, request: CreateTeamRequest) -> Result<Team, DomainError>;
    async fn get(&self, id: TeamId) -> Result<Team, DomainError>;
    async fn list(&self) -> Result<Vec<Team>, DomainError>;
    async fn update(&self, id: TeamId, request: UpdateTeamRequest) -> Result<Team, DomainError>;
    async fn delete(&self, id: TeamId) -> Result<(), DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}

#[async_trait::async_trait]
impl<R: TeamRepository + 'static> TeamServiceTrait for TeamService<R> {
    async fn create(&self, request: CreateTeamRequest) -> Result<Team, DomainError> {
        TeamService::create(self, request).await
    }

    async fn get(&self, id: TeamId) -> Result<Team, DomainError> {
        TeamService::get(self, id).await
    }

    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        TeamService::list(self).await
    }

    async fn update(&self, id: TeamId, request: UpdateTeamRequest) -> Result<Team, DomainError> {
        TeamService::update(self, id, request).await
    }

    async fn delete(&self, id: TeamId) -> Result<(), DomainError> {
        TeamService::delete(self, id).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        TeamService::count(self).await
    }
}
