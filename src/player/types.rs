use serde::{Deserialize, Serialize};

/// Request payload for creating a new player
#[derive(Debug, Deserialize)]
pub struct PlayerCreateRequest {
    pub name: String,
}

/// Request payload for renaming a player
#[derive(Debug, Deserialize)]
pub struct PlayerUpdateRequest {
    pub name: String,
}

/// Query parameters for listing players
#[derive(Debug, Default, Deserialize)]
pub struct PlayerListQuery {
    pub search: Option<String>,
}

/// Response for player creation and player information
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerResponse {
    pub id: String,
    pub name: String,
    pub total_points: i32,
    pub games_played: i32,
    pub wins: i32,
    pub podiums: i32,
}

impl From<crate::player::models::PlayerModel> for PlayerResponse {
    fn from(model: crate::player::models::PlayerModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            total_points: model.total_points,
            games_played: model.games_played,
            wins: model.wins,
            podiums: model.podiums,
        }
    }
}
