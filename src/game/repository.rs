use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::{GameModel, GameTypeModel};
use crate::shared::AppError;

/// Trait for game catalog repository operations
#[async_trait]
pub trait GameRepository {
    async fn create_game_type(&self, game_type: &GameTypeModel) -> Result<(), AppError>;
    async fn get_game_type(&self, game_type_id: &str) -> Result<Option<GameTypeModel>, AppError>;

    /// All game types, sorted by name
    async fn list_game_types(&self) -> Result<Vec<GameTypeModel>, AppError>;

    async fn create_game(&self, game: &GameModel) -> Result<(), AppError>;
    async fn get_game(&self, game_id: &str) -> Result<Option<GameModel>, AppError>;

    /// Active games only, sorted by name
    async fn list_available_games(&self) -> Result<Vec<GameModel>, AppError>;
}

/// In-memory implementation of GameRepository for development and testing
pub struct InMemoryGameRepository {
    game_types: Mutex<HashMap<String, GameTypeModel>>,
    games: Mutex<HashMap<String, GameModel>>,
}

impl Default for InMemoryGameRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGameRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            game_types: Mutex::new(HashMap::new()),
            games: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    #[instrument(skip(self, game_type))]
    async fn create_game_type(&self, game_type: &GameTypeModel) -> Result<(), AppError> {
        debug!(game_type_id = %game_type.id, name = %game_type.name, "Creating game type in memory");

        let mut game_types = self.game_types.lock().unwrap();
        if game_types.contains_key(&game_type.id) {
            warn!(game_type_id = %game_type.id, "Game type already exists in memory");
            return Err(AppError::DatabaseError(
                "Game type already exists".to_string(),
            ));
        }
        game_types.insert(game_type.id.clone(), game_type.clone());

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_game_type(&self, game_type_id: &str) -> Result<Option<GameTypeModel>, AppError> {
        let game_types = self.game_types.lock().unwrap();
        Ok(game_types.get(game_type_id).cloned())
    }

    #[instrument(skip(self))]
    async fn list_game_types(&self) -> Result<Vec<GameTypeModel>, AppError> {
        let game_types = self.game_types.lock().unwrap();
        let mut list: Vec<GameTypeModel> = game_types.values().cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(list)
    }

    #[instrument(skip(self, game))]
    async fn create_game(&self, game: &GameModel) -> Result<(), AppError> {
        debug!(game_id = %game.id, name = %game.name, "Creating game in memory");

        let mut games = self.games.lock().unwrap();
        if games.contains_key(&game.id) {
            warn!(game_id = %game.id, "Game already exists in memory");
            return Err(AppError::DatabaseError("Game already exists".to_string()));
        }
        games.insert(game.id.clone(), game.clone());

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_game(&self, game_id: &str) -> Result<Option<GameModel>, AppError> {
        let games = self.games.lock().unwrap();
        Ok(games.get(game_id).cloned())
    }

    #[instrument(skip(self))]
    async fn list_available_games(&self) -> Result<Vec<GameModel>, AppError> {
        let games = self.games.lock().unwrap();
        let mut list: Vec<GameModel> = games.values().filter(|g| g.is_active).cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get_game_type() {
        let repo = InMemoryGameRepository::new();
        let game_type = GameTypeModel::new("Poker".to_string(), None);

        repo.create_game_type(&game_type).await.unwrap();

        let retrieved = repo.get_game_type(&game_type.id).await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().name, "Poker");
    }

    #[tokio::test]
    async fn test_list_game_types_sorted_by_name() {
        let repo = InMemoryGameRepository::new();
        repo.create_game_type(&GameTypeModel::new("Poker".to_string(), None))
            .await
            .unwrap();
        repo.create_game_type(&GameTypeModel::new("Hearts".to_string(), None))
            .await
            .unwrap();

        let types = repo.list_game_types().await.unwrap();
        assert_eq!(types.len(), 2);
        assert_eq!(types[0].name, "Hearts");
        assert_eq!(types[1].name, "Poker");
    }

    #[tokio::test]
    async fn test_list_available_games_excludes_inactive() {
        let repo = InMemoryGameRepository::new();
        let game_type = GameTypeModel::new("Poker".to_string(), None);
        repo.create_game_type(&game_type).await.unwrap();

        let active = GameModel::new(
            "Friday Night Poker".to_string(),
            game_type.id.clone(),
            None,
            None,
            None,
        );
        let mut inactive = GameModel::new(
            "Retired Game".to_string(),
            game_type.id.clone(),
            None,
            None,
            None,
        );
        inactive.is_active = false;

        repo.create_game(&active).await.unwrap();
        repo.create_game(&inactive).await.unwrap();

        let available = repo.list_available_games().await.unwrap();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].name, "Friday Night Poker");
    }

    #[tokio::test]
    async fn test_get_nonexistent_game() {
        let repo = InMemoryGameRepository::new();

        let result = repo.get_game("nonexistent").await.unwrap();
        assert!(result.is_none());
    }
}
