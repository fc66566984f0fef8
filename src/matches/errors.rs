use thiserror::Error;

use crate::shared::AppError;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Match not found")]
    MatchNotFound,

    #[error("Game not found")]
    GameNotFound,

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Match is already completed")]
    AlreadyCompleted,

    #[error("Expected {expected} results, got {got}")]
    ResultCountMismatch { expected: i32, got: i32 },

    #[error("Too many players: {got} exceeds the maximum of {max}")]
    TooManyPlayers { max: i32, got: i32 },

    #[error("Duplicate positions detected")]
    DuplicatePositions,

    #[error("Invalid position sequence. Expected {expected}, got {got}")]
    InvalidPositionSequence { expected: i32, got: i32 },

    #[error("Match results are required")]
    EmptyResults,

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<MatchError> for AppError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::MatchNotFound | MatchError::GameNotFound => {
                AppError::NotFound(err.to_string())
            }
            MatchError::PlayerNotFound(_) => AppError::NotFound(err.to_string()),
            MatchError::Repository(msg) => AppError::DatabaseError(msg),
            _ => AppError::Validation(err.to_string()),
        }
    }
}

impl From<AppError> for MatchError {
    fn from(err: AppError) -> Self {
        MatchError::Repository(err.to_string())
    }
}
