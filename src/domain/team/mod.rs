//! Team domain module
//!
//! A team is one franchise's season record. Identifiers are owned by the
//! repository; callers only ever supply names, counts and divisions.

mod entity;
mod repository;
mod validation;

pub use entity::{Division, Team, TeamDraft, TeamId, TeamPatch};
pub use repository::TeamRepository;
pub use validation::{validate_count, validate_team_name, TeamValidationError};

#[cfg(test)]
pub use repository::mock::MockTeamRepository;
