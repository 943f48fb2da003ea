//! Team Records API
//!
//! Season records for sports teams served over HTTP from a concurrency-safe
//! in-memory store:
//! - Store-assigned, never reused team IDs
//! - Validated names, win/loss counts and divisions
//! - Optional seeding with sample teams at startup

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::team::{InMemoryTeamRepository, TeamService};
use tracing::info;

/// Create application state with the default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create application state, seeding the store when configured to
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let repository = Arc::new(InMemoryTeamRepository::new());
    let team_service = TeamService::new(repository);

    if config.store.seed {
        team_service.seed_defaults().await?;
    } else {
        info!("Starting with an empty team store");
    }

    Ok(AppState::new(Arc::new(team_service)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_state_is_seeded() {
        let state = create_app_state().await.unwrap();
        assert_eq!(state.team_service.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_state_without_seed() {
        let mut config = AppConfig::default();
        config.store.seed = false;

        let state = create_app_state_with_config(&config).await.unwrap();
        assert!(state.team_service.list().await.unwrap().is_empty());
    }
}
