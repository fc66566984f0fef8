use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::PlayerService,
    types::{PlayerCreateRequest, PlayerListQuery, PlayerResponse, PlayerUpdateRequest},
};
use crate::shared::{AppError, AppState};

/// HTTP handler for registering a new player
///
/// POST /players
/// Returns the created player with zeroed aggregates
#[instrument(name = "create_player", skip(state))]
pub async fn create_player(
    State(state): State<AppState>,
    Json(request): Json<PlayerCreateRequest>,
) -> Result<Json<PlayerResponse>, AppError> {
    info!(name = %request.name, "Creating new player");

    let service = PlayerService::new(Arc::clone(&state.player_repository));
    let player = service.create_player(request).await?;

    info!(player_id = %player.id, "Player created successfully");

    Ok(Json(player))
}

/// HTTP handler for listing players
///
/// GET /players?search=<name fragment>
/// Returns all players, or those whose names match the search term
#[instrument(name = "list_players", skip(state))]
pub async fn list_players(
    State(state): State<AppState>,
    Query(query): Query<PlayerListQuery>,
) -> Result<Json<Vec<PlayerResponse>>, AppError> {
    let service = PlayerService::new(Arc::clone(&state.player_repository));
    let players = service.list_players(query.search).await?;

    info!(player_count = players.len(), "Players listed successfully");

    Ok(Json(players))
}

/// HTTP handler for fetching a single player
///
/// GET /players/{id}
#[instrument(name = "get_player", skip(state))]
pub async fn get_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<PlayerResponse>, AppError> {
    let service = PlayerService::new(Arc::clone(&state.player_repository));
    let player = service.get_player(&player_id).await?;

    Ok(Json(player))
}

/// HTTP handler for renaming a player
///
/// PUT /players/{id}
#[instrument(name = "update_player", skip(state))]
pub async fn update_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
    Json(request): Json<PlayerUpdateRequest>,
) -> Result<Json<PlayerResponse>, AppError> {
    let service = PlayerService::new(Arc::clone(&state.player_repository));
    let player = service.update_player(&player_id, request).await?;

    Ok(Json(player))
}

/// HTTP handler for soft-deleting a player
///
/// DELETE /players/{id}
/// The player row is kept so historical match results stay resolvable
#[instrument(name = "delete_player", skip(state))]
pub async fn delete_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<PlayerResponse>, AppError> {
    let service = PlayerService::new(Arc::clone(&state.player_repository));
    let player = service.delete_player(&player_id).await?;

    Ok(Json(player))
}
