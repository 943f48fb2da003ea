//! Team validation

use thiserror::Error;

use crate::domain::DomainError;

/// Errors that can occur during team validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamValidationError {
    #[error("Team name cannot be empty")]
    EmptyName,

    #[error("Team name cannot exceed {0} characters")]
    NameTooLong(usize),

    #[error("{field} cannot be negative (got {value})")]
    NegativeCount { field: &'static str, value: i64 },

    #[error("{field} cannot exceed {max}")]
    CountTooLarge { field: &'static str, max: u32 },

    #[error("Unknown division '{0}', expected one of: pacific, central, atlantic")]
    UnknownDivision(String),

    #[error("Invalid team ID '{0}'")]
    InvalidId(String),
}

impl From<TeamValidationError> for DomainError {
    fn from(err: TeamValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}

const MAX_TEAM_NAME_LENGTH: usize = 100;

/// Validate a team name
pub fn validate_team_name(name: &str) -> Result<(), TeamValidationError> {
    if name.trim().is_empty() {
        return Err(TeamValidationError::EmptyName);
    }

    if name.chars().count() > MAX_TEAM_NAME_LENGTH {
        return Err(TeamValidationError::NameTooLong(MAX_TEAM_NAME_LENGTH));
    }

    Ok(())
}

/// Validate a win or loss count and narrow it to the stored width
pub fn validate_count(field: &'static str, value: i64) -> Result<u32, TeamValidationError> {
    if value < 0 {
        return Err(TeamValidationError::NegativeCount { field, value });
    }

    u32::try_from(value).map_err(|_| TeamValidationError::CountTooLarge {
        field,
        max: u32::MAX,
    })
}
