//! External representation of team records

use serde::{Deserialize, Serialize};

use crate::domain::team::Team;
use crate::infrastructure::team::{CreateTeamRequest, UpdateTeamRequest};

/// Body of `POST /teams`
///
/// Unknown fields (including `id`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamApiRequest {
    pub name: String,
    pub wins: i64,
    pub losses: i64,
    pub division: String,
}

impl From<CreateTeamApiRequest> for CreateTeamRequest {
    fn from(request: CreateTeamApiRequest) -> Self {
        Self {
            name: request.name,
            wins: request.wins,
            losses: request.losses,
            division: request.division,
        }
    }
}

/// Body of `PATCH /teams/{id}`; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTeamApiRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub wins: Option<i64>,
    #[serde(default)]
    pub losses: Option<i64>,
    #[serde(default)]
    pub division: Option<String>,
}

impl From<UpdateTeamApiRequest> for UpdateTeamRequest {
    fn from(request: UpdateTeamApiRequest) -> Self {
        Self {
            name: request.name,
            wins: request.wins,
            losses: request.losses,
            division: request.division,
        }
    }
}

/// Team record as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamResponse {
    pub id: u64,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub division: String,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().value(),
            name: team.name().to_string(),
            wins: team.wins(),
            losses: team.losses(),
            division: team.division().to_string(),
        }
    }
}
