//! API wire types

pub mod error;
pub mod json;
pub mod team;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use team::{CreateTeamApiRequest, TeamResponse, UpdateTeamApiRequest};
