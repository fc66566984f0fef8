use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::GameService,
    types::{GameCreateRequest, GameResponse, GameTypeCreateRequest, GameTypeResponse},
};
use crate::shared::{AppError, AppState};

/// HTTP handler for creating a new game type
///
/// POST /game-types
#[instrument(name = "create_game_type", skip(state))]
pub async fn create_game_type(
    State(state): State<AppState>,
    Json(request): Json<GameTypeCreateRequest>,
) -> Result<Json<GameTypeResponse>, AppError> {
    info!(name = %request.name, "Creating new game type");

    let service = GameService::new(Arc::clone(&state.game_repository));
    let game_type = service.create_game_type(request).await?;

    Ok(Json(game_type))
}

/// HTTP handler for listing game types
///
/// GET /game-types
#[instrument(name = "list_game_types", skip(state))]
pub async fn list_game_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<GameTypeResponse>>, AppError> {
    let service = GameService::new(Arc::clone(&state.game_repository));
    let game_types = service.list_game_types().await?;

    info!(count = game_types.len(), "Game types listed successfully");

    Ok(Json(game_types))
}

/// HTTP handler for creating a new game
///
/// POST /games
#[instrument(name = "create_game", skip(state))]
pub async fn create_game(
    State(state): State<AppState>,
    Json(request): Json<GameCreateRequest>,
) -> Result<Json<GameResponse>, AppError> {
    info!(name = %request.name, "Creating new game");

    let service = GameService::new(Arc::clone(&state.game_repository));
    let game = service.create_game(request).await?;

    Ok(Json(game))
}

/// HTTP handler for listing active games
///
/// GET /games/available
#[instrument(name = "list_available_games", skip(state))]
pub async fn list_available_games(
    State(state): State<AppState>,
) -> Result<Json<Vec<GameResponse>>, AppError> {
    let service = GameService::new(Arc::clone(&state.game_repository));
    let games = service.list_available_games().await?;

    info!(count = games.len(), "Available games listed successfully");

    Ok(Json(games))
}
