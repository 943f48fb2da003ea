//! Team repository trait

use async_trait::async_trait;

use super::entity::{Team, TeamDraft, TeamId, TeamPatch};
use crate::domain::DomainError;

/// Repository owning the team collection
///
/// Implementations assign identifiers themselves: `create` hands out the next
/// id inside the same critical section that inserts the record, and an id is
/// never handed out twice, even after the team holding it is deleted.
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// Get a team by ID
    async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError>;

    /// Store a new team under a freshly assigned ID
    async fn create(&self, draft: TeamDraft) -> Result<Team, DomainError>;

    /// Apply a patch to an existing team, failing with `NotFound` if it is absent
    async fn update(&self, id: &TeamId, patch: TeamPatch) -> Result<Team, DomainError>;

    /// Delete a team by ID, returning whether it existed
    async fn delete(&self, id: &TeamId) -> Result<bool, DomainError>;

    /// List all teams in insertion order
    async fn list(&self) -> Result<Vec<Team>, DomainError>;

    /// Count stored teams
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if a team exists
    async fn exists(&self, id: &TeamId) -> Result<bool, DomainError>;
}
