//! Team record endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, CreateTeamApiRequest, Json, TeamResponse, UpdateTeamApiRequest};
use crate::domain::team::TeamId;

fn parse_team_id(raw: &str) -> Result<TeamId, ApiError> {
    raw.parse::<TeamId>()
        .map_err(|e| ApiError::malformed(e.to_string()).with_code("invalid_id"))
}

/// GET /teams
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    debug!("Listing teams");

    let teams = state.team_service.list().await?;

    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// GET /teams/{team_id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(team_id = %team_id, "Getting team");

    let id = parse_team_id(&team_id)?;
    let team = state.team_service.get(id).await?;

    Ok(Json(TeamResponse::from(&team)))
}

/// POST /teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(request): Json<CreateTeamApiRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    debug!(name = %request.name, "Creating team");

    let team = state.team_service.create(request.into()).await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// PATCH /teams/{team_id}
pub async fn update_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    Json(request): Json<UpdateTeamApiRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(team_id = %team_id, "Updating team");

    let id = parse_team_id(&team_id)?;
    let team = state.team_service.update(id, request.into()).await?;

    Ok(Json(TeamResponse::from(&team)))
}

/// DELETE /teams/{team_id}
pub async fn delete_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(team_id = %team_id, "Deleting team");

    let id = parse_team_id(&team_id)?;
    state.team_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
