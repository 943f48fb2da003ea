//! Team service - the entity store operations exposed to the API layer

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::team::{Team, TeamDraft, TeamId, TeamPatch, TeamRepository};
use crate::domain::DomainError;

/// Request for creating a new team
///
/// Counts are signed and the division is raw text so that out-of-range values
/// surface as validation errors rather than parse failures.
#[derive(Debug, Clone)]
pub struct CreateTeamRequest {
    pub name: String,
    pub wins: i64,
    pub losses: i64,
    pub division: String,
}

/// Request for updating a team; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateTeamRequest {
    pub name: Option<String>,
    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub division: Option<String>,
}

/// Sample teams loaded at startup when seeding is enabled
const SEED_TEAMS: [(&str, i64, i64, &str); 3] = [
    ("San Jose Swifts", 10, 2, "pacific"),
    ("Chicago Chickadees", 7, 1, "central"),
    ("Boston Buffleheads", 8, 3, "atlantic"),
];

/// Team service for managing teams
#[derive(Debug)]
pub struct TeamService<R: TeamRepository> {
    repository: Arc<R>,
}

impl<R: TeamRepository> TeamService<R> {
    /// Create a new team service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new team
    pub async fn create(&self, request: CreateTeamRequest) -> Result<Team, DomainError> {
        let draft = TeamDraft::new(
            request.name,
            request.wins,
            request.losses,
            &request.division,
        )?;

        let team = self.repository.create(draft).await?;
        info!(id = %team.id(), name = %team.name(), "Created team");

        Ok(team)
    }

    /// Get a team by ID
    pub async fn get(&self, id: TeamId) -> Result<Team, DomainError> {
        self.repository
            .get(&id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List all teams in insertion order
    pub async fn list(&self) -> Result<Vec<Team>, DomainError> {
        self.repository.list().await
    }

    /// Count teams
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }

    /// Check if a team exists
    pub async fn exists(&self, id: TeamId) -> Result<bool, DomainError> {
        self.repository.exists(&id).await
    }

    /// Update the supplied fields of a team
    ///
    /// A missing team is reported before any field is validated.
    pub async fn update(&self, id: TeamId, request: UpdateTeamRequest) -> Result<Team, DomainError> {
        if !self.repository.exists(&id).await? {
            return Err(not_found(id));
        }

        let patch = TeamPatch::new(
            request.name,
            request.wins,
            request.losses,
            request.division.as_deref(),
        )?;

        if patch.is_empty() {
            debug!(id = %id, "Empty update, returning team unchanged");
        }

        let team = self.repository.update(&id, patch).await?;
        info!(id = %id, "Updated team");

        Ok(team)
    }

    /// Delete a team; its ID is retired for good
    pub async fn delete(&self, id: TeamId) -> Result<(), DomainError> {
        if !self.repository.delete(&id).await? {
            return Err(not_found(id));
        }

        info!(id = %id, "Deleted team");
        Ok(())
    }

    /// Load the sample teams through the regular create path
    pub async fn seed_defaults(&self) -> Result<Vec<Team>, DomainError> {
        let mut seeded = Vec::with_capacity(SEED_TEAMS.len());

        for (name, wins, losses, division) in SEED_TEAMS {
            let team = self
                .create(CreateTeamRequest {
                    name: name.to_string(),
                    wins,
                    losses,
                    division: division.to_string(),
                })
                .await?;
            seeded.push(team);
        }

        info!(count = seeded.len(), "Seeded sample teams");
        Ok(seeded)
    }
}

fn not_found(id: TeamId) -> DomainError {
    DomainError::not_found(format!("Team '{}' not found", id))
}
