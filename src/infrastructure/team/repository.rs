//! In-memory team repository implementation

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::team::{Team, TeamDraft, TeamId, TeamPatch, TeamRepository};
use crate::domain::DomainError;

#[derive(Debug)]
struct TeamTable {
    /// Keyed by id; ids only grow, so key order is insertion order
    teams: BTreeMap<TeamId, Team>,
    /// Next id to hand out. Never decreases, so deleted ids stay retired.
    next_id: TeamId,
}

/// Thread-safe in-memory implementation of TeamRepository
///
/// Writers hold the lock for the whole lookup-and-mutate sequence, readers
/// get clones. Data is lost when the process terminates.
#[derive(Debug)]
pub struct InMemoryTeamRepository {
    table: RwLock<TeamTable>,
}

impl Default for InMemoryTeamRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTeamRepository {
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self {
            table: RwLock::new(TeamTable {
                teams: BTreeMap::new(),
                next_id: TeamId::FIRST,
            }),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, TeamTable>, DomainError> {
        self.table
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, TeamTable>, DomainError> {
        self.table
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        Ok(self.read()?.teams.get(id).cloned())
    }

    async fn create(&self, draft: TeamDraft) -> Result<Team, DomainError> {
        let mut table = self.write()?;

        let id = table.next_id;
        table.next_id = id.next();

        let team = Team::from_draft(id, draft);
        table.teams.insert(id, team.clone());
        Ok(team)
    }

    async fn update(&self, id: &TeamId, patch: TeamPatch) -> Result<Team, DomainError> {
        let mut table = self.write()?;

        let team = table
            .teams
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", id)))?;

        team.apply(patch);
        Ok(team.clone())
    }

    async fn delete(&self, id: &TeamId) -> Result<bool, DomainError> {
        Ok(self.write()?.teams.remove(id).is_some())
    }

    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        Ok(self.read()?.teams.values().cloned().collect())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.read()?.teams.len())
    }

    async fn exists(&self, id: &TeamId) -> Result<bool, DomainError> {
        Ok(self.read()?.teams.contains_key(id))
    }
}
