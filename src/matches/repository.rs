use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::models::{MatchModel, MatchResultModel, MatchStatus};
use crate::shared::AppError;

/// Trait for match repository operations
#[async_trait]
pub trait MatchRepository {
    async fn create_match(&self, game_match: &MatchModel) -> Result<(), AppError>;
    async fn get_match(&self, match_id: &str) -> Result<Option<MatchModel>, AppError>;

    /// Atomically records the scored results and flips the match to
    /// completed. Returns the updated match.
    async fn complete_match(
        &self,
        match_id: &str,
        results: &[MatchResultModel],
    ) -> Result<MatchModel, AppError>;

    /// Result rows for one match, ordered by position
    async fn get_results(&self, match_id: &str) -> Result<Vec<MatchResultModel>, AppError>;

    /// Completed matches, most recently completed first
    async fn recent_completed_matches(&self, limit: usize) -> Result<Vec<MatchModel>, AppError>;

    /// A player's result rows paired with their matches, most recently
    /// completed first
    async fn results_for_player(
        &self,
        player_id: &str,
        limit: usize,
    ) -> Result<Vec<(MatchModel, MatchResultModel)>, AppError>;

    /// All result rows of a player across completed matches (for position
    /// frequency stats)
    async fn all_results_for_player(
        &self,
        player_id: &str,
    ) -> Result<Vec<MatchResultModel>, AppError>;

    /// Result rows across all completed matches of one game
    async fn results_for_game(&self, game_id: &str) -> Result<Vec<MatchResultModel>, AppError>;
}

#[derive(Default)]
struct MatchStore {
    matches: HashMap<String, MatchModel>,
    results: Vec<MatchResultModel>,
}

/// In-memory implementation of MatchRepository for development and testing.
/// A single lock over matches and results keeps match completion atomic,
/// standing in for the database transaction.
pub struct InMemoryMatchRepository {
    store: Mutex<MatchStore>,
}

impl Default for InMemoryMatchRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMatchRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            store: Mutex::new(MatchStore::default()),
        }
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    #[instrument(skip(self, game_match))]
    async fn create_match(&self, game_match: &MatchModel) -> Result<(), AppError> {
        debug!(match_id = %game_match.id, game_id = %game_match.game_id, "Creating match in memory");

        let mut store = self.store.lock().unwrap();
        if store.matches.contains_key(&game_match.id) {
            warn!(match_id = %game_match.id, "Match already exists in memory");
            return Err(AppError::DatabaseError("Match already exists".to_string()));
        }
        store
            .matches
            .insert(game_match.id.clone(), game_match.clone());

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_match(&self, match_id: &str) -> Result<Option<MatchModel>, AppError> {
        let store = self.store.lock().unwrap();
        Ok(store.matches.get(match_id).cloned())
    }

    #[instrument(skip(self, results))]
    async fn complete_match(
        &self,
        match_id: &str,
        results: &[MatchResultModel],
    ) -> Result<MatchModel, AppError> {
        let mut store = self.store.lock().unwrap();

        let game_match = store
            .matches
            .get_mut(match_id)
            .ok_or(AppError::NotFound("Match not found".to_string()))?;

        // Re-checked under the store lock so two racing completions cannot
        // both record result rows.
        if game_match.is_completed() {
            warn!(match_id = %match_id, "Match is already completed");
            return Err(AppError::DatabaseError(
                "Match is already completed".to_string(),
            ));
        }

        game_match.status = MatchStatus::Completed;
        game_match.completed_at = Some(Utc::now());
        let completed = game_match.clone();

        store.results.extend(results.iter().cloned());

        info!(
            match_id = %match_id,
            result_count = results.len(),
            "Match completed with results"
        );

        Ok(completed)
    }

    #[instrument(skip(self))]
    async fn get_results(&self, match_id: &str) -> Result<Vec<MatchResultModel>, AppError> {
        let store = self.store.lock().unwrap();
        let mut results: Vec<MatchResultModel> = store
            .results
            .iter()
            .filter(|r| r.match_id == match_id)
            .cloned()
            .collect();
        results.sort_by_key(|r| r.position);
        Ok(results)
    }

    #[instrument(skip(self))]
    async fn recent_completed_matches(&self, limit: usize) -> Result<Vec<MatchModel>, AppError> {
        let store = self.store.lock().unwrap();
        let mut matches: Vec<MatchModel> = store
            .matches
            .values()
            .filter(|m| m.is_completed())
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        matches.truncate(limit);
        Ok(matches)
    }

    #[instrument(skip(self))]
    async fn results_for_player(
        &self,
        player_id: &str,
        limit: usize,
    ) -> Result<Vec<(MatchModel, MatchResultModel)>, AppError> {
        let store = self.store.lock().unwrap();
        let mut rows: Vec<(MatchModel, MatchResultModel)> = store
            .results
            .iter()
            .filter(|r| r.player_id == player_id)
            .filter_map(|r| {
                store
                    .matches
                    .get(&r.match_id)
                    .filter(|m| m.is_completed())
                    .map(|m| (m.clone(), r.clone()))
            })
            .collect();
        rows.sort_by(|a, b| b.0.completed_at.cmp(&a.0.completed_at));
        rows.truncate(limit);
        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn all_results_for_player(
        &self,
        player_id: &str,
    ) -> Result<Vec<MatchResultModel>, AppError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .results
            .iter()
            .filter(|r| r.player_id == player_id)
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn results_for_game(&self, game_id: &str) -> Result<Vec<MatchResultModel>, AppError> {
        let store = self.store.lock().unwrap();
        let match_ids: Vec<String> = store
            .matches
            .values()
            .filter(|m| m.game_id == game_id && m.is_completed())
            .map(|m| m.id.clone())
            .collect();

        Ok(store
            .results
            .iter()
            .filter(|r| match_ids.contains(&r.match_id))
            .cloned()
            .collect())
    }
}
