use axum::{
    routing::{get, post},
    Router,
};

use crate::{game, leaderboard, matches, player, shared::AppState};

/// Builds the full API router over the given application state
///
/// Kept separate from `main` so integration tests can drive the exact
/// route table the server exposes
pub fn app_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Gameitos API" }))
        .route(
            "/players",
            post(player::create_player).get(player::list_players),
        )
        .route(
            "/players/:id",
            get(player::get_player)
                .put(player::update_player)
                .delete(player::delete_player),
        )
        .route(
            "/game-types",
            post(game::create_game_type).get(game::list_game_types),
        )
        .route("/games", post(game::create_game))
        .route("/games/available", get(game::list_available_games))
        .route(
            "/matches",
            post(matches::submit_match).get(matches::list_recent_matches),
        )
        .route("/matches/:id", get(matches::get_match))
        .route("/leaderboard", get(leaderboard::get_leaderboard))
        .route(
            "/leaderboard/players/:id",
            get(leaderboard::get_player_stats),
        )
        .route(
            "/leaderboard/games/:game_id",
            get(leaderboard::get_game_leaderboard),
        )
        .route("/stats", get(leaderboard::get_overall_stats))
        .with_state(app_state)
}
