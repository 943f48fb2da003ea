//! Domain layer - entities, validation and repository contracts

pub mod error;
pub mod team;

pub use error::DomainError;
pub use team::{Division, Team, TeamDraft, TeamId, TeamPatch, TeamRepository};
