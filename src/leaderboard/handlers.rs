use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::LeaderboardService,
    types::{
        GameLeaderboardEntry, GameLeaderboardQuery, LeaderboardEntry, LeaderboardQuery,
        OverallStats, PlayerStatsResponse,
    },
};
use crate::shared::{AppError, AppState};

const DEFAULT_LEADERBOARD_LIMIT: usize = 50;
const DEFAULT_GAME_LEADERBOARD_LIMIT: usize = 20;

fn leaderboard_service(state: &AppState) -> LeaderboardService {
    LeaderboardService::new(
        Arc::clone(&state.player_repository),
        Arc::clone(&state.game_repository),
        Arc::clone(&state.match_repository),
    )
}

/// HTTP handler for the main leaderboard
///
/// GET /leaderboard?limit=<n>&min_games=<n>
#[instrument(name = "get_leaderboard", skip(state))]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT);

    let service = leaderboard_service(&state);
    let board = service.leaderboard(limit, query.min_games).await?;

    info!(entry_count = board.len(), "Leaderboard computed");

    Ok(Json(board))
}

/// HTTP handler for detailed player statistics
///
/// GET /leaderboard/players/{id}
#[instrument(name = "get_player_stats", skip(state))]
pub async fn get_player_stats(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<PlayerStatsResponse>, AppError> {
    let service = leaderboard_service(&state);
    let stats = service.player_stats(&player_id).await?;

    Ok(Json(stats))
}

/// HTTP handler for a single game's leaderboard
///
/// GET /leaderboard/games/{game_id}?limit=<n>
#[instrument(name = "get_game_leaderboard", skip(state))]
pub async fn get_game_leaderboard(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    Query(query): Query<GameLeaderboardQuery>,
) -> Result<Json<Vec<GameLeaderboardEntry>>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_GAME_LEADERBOARD_LIMIT);

    let service = leaderboard_service(&state);
    let board = service.game_leaderboard(&game_id, limit).await?;

    info!(
        game_id = %game_id,
        entry_count = board.len(),
        "Game leaderboard computed"
    );

    Ok(Json(board))
}

/// HTTP handler for the dashboard headline numbers
///
/// GET /stats
#[instrument(name = "get_overall_stats", skip(state))]
pub async fn get_overall_stats(
    State(state): State<AppState>,
) -> Result<Json<OverallStats>, AppError> {
    let service = leaderboard_service(&state);
    let stats = service.overall_stats().await?;

    Ok(Json(stats))
}
