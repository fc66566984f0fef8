use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use strum_macros::{Display, EnumString};
use uuid::Uuid;

/// Lifecycle state of a match
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, sqlx::Type,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "match_status", rename_all = "snake_case")]
pub enum MatchStatus {
    InProgress,
    Completed,
    Cancelled,
}

/// Database model for the game_matches table - one played session of a game
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MatchModel {
    pub id: String,
    pub game_id: String,
    pub match_name: Option<String>, // "Friday Night Session", "Tournament Round 1", ...
    pub total_players: i32,
    pub status: MatchStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl MatchModel {
    /// Creates a new in-progress match with a generated ID
    pub fn new(game_id: String, match_name: Option<String>, total_players: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            game_id,
            match_name,
            total_players,
            status: MatchStatus::InProgress,
            started_at: now,
            completed_at: None,
            created_at: now,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }
}

/// Database model for the game_results table - one player's finish in one
/// match, with the points the distribution engine awarded for that position
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MatchResultModel {
    pub id: String,
    pub match_id: String,
    pub player_id: String,
    pub position: i32,
    pub points_awarded: i32,
    pub position_from_median: i32,
    pub created_at: DateTime<Utc>,
}

impl MatchResultModel {
    pub fn new(
        match_id: String,
        player_id: String,
        position: i32,
        points_awarded: i32,
        position_from_median: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            match_id,
            player_id,
            position,
            points_awarded,
            position_from_median,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn match_status_round_trips_through_strings() {
        assert_eq!(MatchStatus::InProgress.to_string(), "in_progress");
        assert_eq!(MatchStatus::Completed.to_string(), "completed");
        assert_eq!(
            MatchStatus::from_str("cancelled").unwrap(),
            MatchStatus::Cancelled
        );
    }

    #[test]
    fn new_match_starts_in_progress() {
        let m = MatchModel::new("game-1".to_string(), None, 4);
        assert_eq!(m.status, MatchStatus::InProgress);
        assert!(!m.is_completed());
        assert!(m.completed_at.is_none());
    }
}
