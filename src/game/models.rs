use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the game_types table ("Poker", "Hearts", ...)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct GameTypeModel {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl GameTypeModel {
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            created_at: Utc::now(),
        }
    }
}

/// Database model for the games table - a concrete playable game under a
/// game type ("Friday Night Poker")
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct GameModel {
    pub id: String,
    pub name: String,
    pub game_type_id: String,
    pub description: Option<String>,
    pub min_players: i32,
    pub max_players: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl GameModel {
    pub fn new(
        name: String,
        game_type_id: String,
        description: Option<String>,
        min_players: Option<i32>,
        max_players: Option<i32>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            game_type_id,
            description,
            min_players: min_players.unwrap_or(2),
            max_players,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
