use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::PlayerModel;
use crate::shared::AppError;

/// Trait for player repository operations
#[async_trait]
pub trait PlayerRepository {
    async fn create_player(&self, player: &PlayerModel) -> Result<(), AppError>;
    async fn get_player(&self, player_id: &str) -> Result<Option<PlayerModel>, AppError>;
    async fn list_players(&self) -> Result<Vec<PlayerModel>, AppError>;

    /// Case-insensitive substring search over player names
    async fn search_players(&self, query: &str) -> Result<Vec<PlayerModel>, AppError>;

    async fn update_player(&self, player: &PlayerModel) -> Result<PlayerModel, AppError>;

    /// Atomically applies one match result to a player's aggregates via the
    /// pure `PlayerModel::apply_match_result` transition and returns the new
    /// snapshot.
    async fn apply_match_result(
        &self,
        player_id: &str,
        position: i32,
        points_awarded: i32,
    ) -> Result<PlayerModel, AppError>;
}

/// In-memory implementation of PlayerRepository for development and testing
pub struct InMemoryPlayerRepository {
    players: Mutex<HashMap<String, PlayerModel>>,
}

impl Default for InMemoryPlayerRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPlayerRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            players: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    #[instrument(skip(self, player))]
    async fn create_player(&self, player: &PlayerModel) -> Result<(), AppError> {
        debug!(player_id = %player.id, name = %player.name, "Creating player in memory");

        let mut players = self.players.lock().unwrap();
        if players.contains_key(&player.id) {
            warn!(player_id = %player.id, "Player already exists in memory");
            return Err(AppError::DatabaseError("Player already exists".to_string()));
        }
        players.insert(player.id.clone(), player.clone());

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_player(&self, player_id: &str) -> Result<Option<PlayerModel>, AppError> {
        let players = self.players.lock().unwrap();
        Ok(players.get(player_id).cloned())
    }

    #[instrument(skip(self))]
    async fn list_players(&self) -> Result<Vec<PlayerModel>, AppError> {
        let players = self.players.lock().unwrap();
        let mut list: Vec<PlayerModel> = players.values().cloned().collect();
        // HashMap order is arbitrary; keep the listing stable
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(list)
    }

    #[instrument(skip(self))]
    async fn search_players(&self, query: &str) -> Result<Vec<PlayerModel>, AppError> {
        let needle = query.to_lowercase();
        let players = self.players.lock().unwrap();
        let mut matches: Vec<PlayerModel> = players
            .values()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matches)
    }

    #[instrument(skip(self, player))]
    async fn update_player(&self, player: &PlayerModel) -> Result<PlayerModel, AppError> {
        let mut players = self.players.lock().unwrap();
        match players.get_mut(&player.id) {
            Some(existing) => {
                *existing = player.clone();
                Ok(existing.clone())
            }
            None => Err(AppError::NotFound("Player not found".to_string())),
        }
    }

    #[instrument(skip(self))]
    async fn apply_match_result(
        &self,
        player_id: &str,
        position: i32,
        points_awarded: i32,
    ) -> Result<PlayerModel, AppError> {
        debug!(
            player_id = %player_id,
            position,
            points_awarded,
            "Applying match result to player aggregates"
        );

        let mut players = self.players.lock().unwrap();
        match players.get_mut(player_id) {
            Some(player) => {
                *player = player.apply_match_result(position, points_awarded);
                Ok(player.clone())
            }
            None => Err(AppError::NotFound("Player not found".to_string())),
        }
    }
}
