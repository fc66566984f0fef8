use serde::{Deserialize, Serialize};

/// Request payload for creating a new game type
#[derive(Debug, Deserialize)]
pub struct GameTypeCreateRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Response for game type information
#[derive(Debug, Serialize, Deserialize)]
pub struct GameTypeResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl From<crate::game::models::GameTypeModel> for GameTypeResponse {
    fn from(model: crate::game::models::GameTypeModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

/// Request payload for creating a new game
#[derive(Debug, Deserialize)]
pub struct GameCreateRequest {
    pub name: String,
    pub game_type_id: String,
    pub description: Option<String>,
    pub min_players: Option<i32>,
    pub max_players: Option<i32>,
}

/// Response for game information, shaped for the game-picker dropdown
#[derive(Debug, Serialize, Deserialize)]
pub struct GameResponse {
    pub id: String,
    pub name: String,
    pub game_type_id: String,
    pub min_players: i32,
    pub max_players: Option<i32>,
}

impl From<crate::game::models::GameModel> for GameResponse {
    fn from(model: crate::game::models::GameModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            game_type_id: model.game_type_id,
            min_players: model.min_players,
            max_players: model.max_players,
        }
    }
}
