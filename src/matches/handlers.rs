use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::MatchService,
    types::{MatchDetailResponse, MatchListQuery, MatchSubmitRequest, RecentMatchResponse},
};
use crate::shared::{AppError, AppState};

const DEFAULT_RECENT_MATCHES: usize = 10;

fn match_service(state: &AppState) -> MatchService {
    MatchService::new(
        Arc::clone(&state.match_repository),
        Arc::clone(&state.player_repository),
        Arc::clone(&state.game_repository),
    )
}

/// HTTP handler for submitting a finished match
///
/// POST /matches
/// Creates the match and completes it with the submitted positions in one
/// call; returns the scored match detail
#[instrument(name = "submit_match", skip(state, request))]
pub async fn submit_match(
    State(state): State<AppState>,
    Json(request): Json<MatchSubmitRequest>,
) -> Result<Json<MatchDetailResponse>, AppError> {
    info!(
        game_id = %request.game_id,
        result_count = request.results.len(),
        "Submitting match results"
    );

    let service = match_service(&state);
    let detail = service.submit_match(request).await?;

    info!(match_id = %detail.id, "Match submitted successfully");

    Ok(Json(detail))
}

/// HTTP handler for listing recent completed matches
///
/// GET /matches?limit=<n>
#[instrument(name = "list_recent_matches", skip(state))]
pub async fn list_recent_matches(
    State(state): State<AppState>,
    Query(query): Query<MatchListQuery>,
) -> Result<Json<Vec<RecentMatchResponse>>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_MATCHES);

    let service = match_service(&state);
    let matches = service.recent_matches(limit).await?;

    info!(match_count = matches.len(), "Recent matches listed");

    Ok(Json(matches))
}

/// HTTP handler for fetching one match with its results
///
/// GET /matches/{id}
#[instrument(name = "get_match", skip(state))]
pub async fn get_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<MatchDetailResponse>, AppError> {
    let service = match_service(&state);
    let detail = service.get_match_with_results(&match_id).await?;

    Ok(Json(detail))
}
