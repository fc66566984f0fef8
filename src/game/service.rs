use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::{GameModel, GameTypeModel},
    repository::GameRepository,
    types::{GameCreateRequest, GameResponse, GameTypeCreateRequest, GameTypeResponse},
};
use crate::shared::AppError;

/// Service for handling game catalog business logic
pub struct GameService {
    repository: Arc<dyn GameRepository + Send + Sync>,
}

impl GameService {
    pub fn new(repository: Arc<dyn GameRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Registers a new game type
    #[instrument(skip(self))]
    pub async fn create_game_type(
        &self,
        request: GameTypeCreateRequest,
    ) -> Result<GameTypeResponse, AppError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(
                "Game type name is required".to_string(),
            ));
        }

        let game_type = GameTypeModel::new(name.to_string(), request.description);
        self.repository.create_game_type(&game_type).await?;

        info!(game_type_id = %game_type.id, name = %game_type.name, "Game type created");

        Ok(game_type.into())
    }

    /// Lists all game types sorted by name
    #[instrument(skip(self))]
    pub async fn list_game_types(&self) -> Result<Vec<GameTypeResponse>, AppError> {
        let game_types = self.repository.list_game_types().await?;
        Ok(game_types.into_iter().map(GameTypeResponse::from).collect())
    }

    /// Registers a new game under an existing game type
    #[instrument(skip(self))]
    pub async fn create_game(&self, request: GameCreateRequest) -> Result<GameResponse, AppError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Game name is required".to_string()));
        }

        self.repository
            .get_game_type(&request.game_type_id)
            .await?
            .ok_or(AppError::NotFound("Game type not found".to_string()))?;

        let game = GameModel::new(
            name.to_string(),
            request.game_type_id,
            request.description,
            request.min_players,
            request.max_players,
        );
        self.repository.create_game(&game).await?;

        info!(game_id = %game.id, name = %game.name, "Game created");

        Ok(game.into())
    }

    /// Lists active games for the game-picker dropdown
    #[instrument(skip(self))]
    pub async fn list_available_games(&self) -> Result<Vec<GameResponse>, AppError> {
        let games = self.repository.list_available_games().await?;
        Ok(games.into_iter().map(GameResponse::from).collect())
    }
}
