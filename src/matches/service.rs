use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::{
    errors::MatchError,
    models::{MatchModel, MatchResultModel},
    repository::MatchRepository,
    types::{
        MatchDetailResponse, MatchResultEntry, MatchResultResponse, MatchSubmitRequest, PlayerRef,
        RecentMatchResponse,
    },
};
use crate::game::repository::GameRepository;
use crate::player::repository::PlayerRepository;
use crate::scoring;

/// Largest field a match may have. Keeps the Fibonacci point curve far away
/// from the integer ceiling where its values would start clamping.
const MAX_PLAYERS: i32 = 64;

/// Service orchestrating the match lifecycle: creation, validation, scoring
/// through the point-distribution engine, and aggregate updates.
pub struct MatchService {
    match_repository: Arc<dyn MatchRepository + Send + Sync>,
    player_repository: Arc<dyn PlayerRepository + Send + Sync>,
    game_repository: Arc<dyn GameRepository + Send + Sync>,
}

impl MatchService {
    pub fn new(
        match_repository: Arc<dyn MatchRepository + Send + Sync>,
        player_repository: Arc<dyn PlayerRepository + Send + Sync>,
        game_repository: Arc<dyn GameRepository + Send + Sync>,
    ) -> Self {
        Self {
            match_repository,
            player_repository,
            game_repository,
        }
    }

    /// Creates a new in-progress match for a known game
    #[instrument(skip(self))]
    pub async fn create_match(
        &self,
        game_id: &str,
        match_name: Option<String>,
        total_players: i32,
    ) -> Result<MatchModel, MatchError> {
        self.game_repository
            .get_game(game_id)
            .await?
            .ok_or(MatchError::GameNotFound)?;

        if total_players > MAX_PLAYERS {
            return Err(MatchError::TooManyPlayers {
                max: MAX_PLAYERS,
                got: total_players,
            });
        }

        let game_match = MatchModel::new(game_id.to_string(), match_name, total_players);
        debug!(match_id = %game_match.id, "Generated match ID");

        self.match_repository.create_match(&game_match).await?;

        info!(
            match_id = %game_match.id,
            game_id = %game_id,
            total_players,
            "Match created"
        );

        Ok(game_match)
    }

    /// Completes a match: validates that the submitted positions form a
    /// permutation of 1..=total_players, scores every position through the
    /// distribution engine, persists the results and updates each player's
    /// aggregates.
    #[instrument(skip(self, results))]
    pub async fn complete_match(
        &self,
        match_id: &str,
        results: &[MatchResultEntry],
    ) -> Result<MatchDetailResponse, MatchError> {
        let game_match = self
            .match_repository
            .get_match(match_id)
            .await?
            .ok_or(MatchError::MatchNotFound)?;

        if game_match.is_completed() {
            return Err(MatchError::AlreadyCompleted);
        }

        Self::validate_positions(results, game_match.total_players)?;

        // Every referenced player must exist before anything is persisted
        for entry in results {
            self.player_repository
                .get_player(&entry.player_id)
                .await?
                .ok_or_else(|| MatchError::PlayerNotFound(entry.player_id.clone()))?;
        }

        let scored: Vec<MatchResultModel> = results
            .iter()
            .map(|entry| {
                MatchResultModel::new(
                    match_id.to_string(),
                    entry.player_id.clone(),
                    entry.position,
                    scoring::points_for_position(entry.position, game_match.total_players),
                    scoring::position_from_median(entry.position, game_match.total_players),
                )
            })
            .collect();

        self.match_repository
            .complete_match(match_id, &scored)
            .await?;

        for result in &scored {
            self.player_repository
                .apply_match_result(&result.player_id, result.position, result.points_awarded)
                .await?;
        }

        info!(
            match_id = %match_id,
            total_players = game_match.total_players,
            "Match completed and aggregates updated"
        );

        self.get_match_with_results(match_id).await
    }

    /// Creates and immediately completes a match from one submission, the
    /// way results are entered after a game night
    #[instrument(skip(self, request))]
    pub async fn submit_match(
        &self,
        request: MatchSubmitRequest,
    ) -> Result<MatchDetailResponse, MatchError> {
        let game_id = request.game_id.trim();
        if game_id.is_empty() {
            return Err(MatchError::GameNotFound);
        }
        if request.results.is_empty() {
            return Err(MatchError::EmptyResults);
        }

        let match_name = request
            .match_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        let game_match = self
            .create_match(game_id, match_name, request.results.len() as i32)
            .await?;

        self.complete_match(&game_match.id, &request.results).await
    }

    /// Fetches a match with its ordered, player-annotated results
    #[instrument(skip(self))]
    pub async fn get_match_with_results(
        &self,
        match_id: &str,
    ) -> Result<MatchDetailResponse, MatchError> {
        let game_match = self
            .match_repository
            .get_match(match_id)
            .await?
            .ok_or(MatchError::MatchNotFound)?;

        let game = self
            .game_repository
            .get_game(&game_match.game_id)
            .await?
            .ok_or(MatchError::GameNotFound)?;

        let results = self.match_repository.get_results(match_id).await?;

        let mut result_responses = Vec::with_capacity(results.len());
        for result in results {
            let player = self.player_ref(&result.player_id).await?;
            result_responses.push(MatchResultResponse {
                id: result.id,
                position: result.position,
                points_awarded: result.points_awarded,
                position_from_median: result.position_from_median,
                player,
            });
        }

        Ok(MatchDetailResponse {
            id: game_match.id,
            match_name: game_match.match_name,
            total_players: game_match.total_players,
            status: game_match.status,
            started_at: game_match.started_at,
            completed_at: game_match.completed_at,
            game_id: game.id,
            game_name: game.name,
            results: result_responses,
        })
    }

    /// Recent completed matches, each annotated with winner and last place
    #[instrument(skip(self))]
    pub async fn recent_matches(&self, limit: usize) -> Result<Vec<RecentMatchResponse>, MatchError> {
        let matches = self.match_repository.recent_completed_matches(limit).await?;

        let mut responses = Vec::with_capacity(matches.len());
        for game_match in matches {
            let game_name = self
                .game_repository
                .get_game(&game_match.game_id)
                .await?
                .map(|g| g.name)
                .unwrap_or_default();

            let results = self.match_repository.get_results(&game_match.id).await?;

            let winner = match results.iter().find(|r| r.position == 1) {
                Some(r) => Some(self.player_ref(&r.player_id).await?),
                None => None,
            };
            let last_place = match results
                .iter()
                .find(|r| r.position == game_match.total_players)
            {
                Some(r) => Some(self.player_ref(&r.player_id).await?),
                None => None,
            };

            responses.push(RecentMatchResponse {
                id: game_match.id,
                match_name: game_match.match_name,
                total_players: game_match.total_players,
                status: game_match.status,
                completed_at: game_match.completed_at,
                game_id: game_match.game_id,
                game_name,
                winner,
                last_place,
            });
        }

        Ok(responses)
    }

    async fn player_ref(&self, player_id: &str) -> Result<PlayerRef, MatchError> {
        let player = self
            .player_repository
            .get_player(player_id)
            .await?
            .ok_or_else(|| MatchError::PlayerNotFound(player_id.to_string()))?;

        Ok(PlayerRef {
            id: player.id,
            name: player.name,
        })
    }

    /// Positions must be exactly the permutation 1..=total_players
    fn validate_positions(
        results: &[MatchResultEntry],
        total_players: i32,
    ) -> Result<(), MatchError> {
        if results.len() as i32 != total_players {
            return Err(MatchError::ResultCountMismatch {
                expected: total_players,
                got: results.len() as i32,
            });
        }

        let positions: Vec<i32> = results.iter().map(|r| r.position).collect();
        let unique: HashSet<i32> = positions.iter().copied().collect();
        if unique.len() != positions.len() {
            return Err(MatchError::DuplicatePositions);
        }

        let mut sorted = positions;
        sorted.sort_unstable();
        for (index, position) in sorted.iter().enumerate() {
            let expected = index as i32 + 1;
            if *position != expected {
                return Err(MatchError::InvalidPositionSequence {
                    expected,
                    got: *position,
                });
            }
        }

        Ok(())
    }
}
