use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::game::repository::GameRepository;
use crate::matches::repository::MatchRepository;
use crate::player::repository::PlayerRepository;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub player_repository: Arc<dyn PlayerRepository + Send + Sync>,
    pub game_repository: Arc<dyn GameRepository + Send + Sync>,
    pub match_repository: Arc<dyn MatchRepository + Send + Sync>,
}

impl AppState {
    pub fn new(
        player_repository: Arc<dyn PlayerRepository + Send + Sync>,
        game_repository: Arc<dyn GameRepository + Send + Sync>,
        match_repository: Arc<dyn MatchRepository + Send + Sync>,
    ) -> Self {
        Self {
            player_repository,
            game_repository,
            match_repository,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;
    use crate::game::repository::InMemoryGameRepository;
    use crate::matches::repository::InMemoryMatchRepository;
    use crate::player::repository::InMemoryPlayerRepository;

    /// Builder for creating AppState with overrides for testing
    pub struct AppStateBuilder {
        player_repository: Option<Arc<dyn PlayerRepository + Send + Sync>>,
        game_repository: Option<Arc<dyn GameRepository + Send + Sync>>,
        match_repository: Option<Arc<dyn MatchRepository + Send + Sync>>,
    }

    impl AppStateBuilder {
        pub fn new() -> Self {
            Self {
                player_repository: None,
                game_repository: None,
                match_repository: None,
            }
        }

        pub fn with_player_repository(
            mut self,
            repo: Arc<dyn PlayerRepository + Send + Sync>,
        ) -> Self {
            self.player_repository = Some(repo);
            self
        }

        pub fn with_game_repository(mut self, repo: Arc<dyn GameRepository + Send + Sync>) -> Self {
            self.game_repository = Some(repo);
            self
        }

        pub fn with_match_repository(
            mut self,
            repo: Arc<dyn MatchRepository + Send + Sync>,
        ) -> Self {
            self.match_repository = Some(repo);
            self
        }

        pub fn build(self) -> AppState {
            AppState {
                player_repository: self
                    .player_repository
                    .unwrap_or_else(|| Arc::new(InMemoryPlayerRepository::new())),
                game_repository: self
                    .game_repository
                    .unwrap_or_else(|| Arc::new(InMemoryGameRepository::new())),
                match_repository: self
                    .match_repository
                    .unwrap_or_else(|| Arc::new(InMemoryMatchRepository::new())),
            }
        }
    }

    impl Default for AppStateBuilder {
        fn default() -> Self {
            Self::new()
        }
    }
}
