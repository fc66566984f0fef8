use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the players table, including running aggregates
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PlayerModel {
    pub id: String,
    pub name: String,
    pub total_points: i32,
    pub games_played: i32,
    pub wins: i32,
    pub podiums: i32, // Top 3 finishes
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlayerModel {
    /// Creates a new player with zeroed aggregates and a generated ID
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            total_points: 0,
            games_played: 0,
            wins: 0,
            podiums: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns a new aggregate snapshot with one match result applied.
    ///
    /// Pure state transition: the repository decides how to swap the old
    /// snapshot for the new one atomically.
    pub fn apply_match_result(&self, position: i32, points_awarded: i32) -> Self {
        Self {
            total_points: self.total_points + points_awarded,
            games_played: self.games_played + 1,
            wins: self.wins + if position == 1 { 1 } else { 0 },
            podiums: self.podiums + if position <= 3 { 1 } else { 0 },
            updated_at: Utc::now(),
            ..self.clone()
        }
    }

    /// Whether the player has been soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.name.starts_with("[DELETED]")
    }
}
