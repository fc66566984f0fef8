use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query parameters for the main leaderboard
#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<usize>,
    pub min_games: Option<i32>,
}

/// Query parameters for a per-game leaderboard
#[derive(Debug, Default, Deserialize)]
pub struct GameLeaderboardQuery {
    pub limit: Option<usize>,
}

/// One row of the main leaderboard
#[derive(Debug, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    pub total_points: i32,
    pub games_played: i32,
    pub wins: i32,
    pub podiums: i32,
    pub win_rate: f64,
    pub podium_rate: f64,
    pub average_points: f64,
    /// Finishing positions of the last 5 games, most recent first
    pub recent_form: Vec<i32>,
}

/// One of a player's recent games in the player detail view
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerRecentGame {
    pub match_id: String,
    pub game_name: String,
    pub match_name: Option<String>,
    pub position: i32,
    pub points_awarded: i32,
    pub total_players: i32,
    pub completed_at: Option<DateTime<Utc>>,
}

/// How often a player finished at each position
#[derive(Debug, Serialize, Deserialize)]
pub struct PositionCount {
    pub position: i32,
    pub count: u32,
}

/// Detailed per-player statistics
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerStatsResponse {
    pub player: crate::player::models::PlayerModel,
    pub recent_games: Vec<PlayerRecentGame>,
    pub position_stats: Vec<PositionCount>,
}

/// One row of a per-game leaderboard, aggregated over that game's matches
#[derive(Debug, Serialize, Deserialize)]
pub struct GameLeaderboardEntry {
    pub player_id: String,
    pub player_name: String,
    pub total_points: i32,
    pub games_played: u32,
    pub wins: u32,
    pub podiums: u32,
    pub win_rate: f64,
    pub podium_rate: f64,
    pub average_points: f64,
}

/// Headline numbers for the dashboard
#[derive(Debug, Serialize, Deserialize)]
pub struct OverallStats {
    pub total_players: usize,
    pub total_matches: usize,
    pub top_score: i32,
    /// Average points earned per game played, rounded to one decimal
    pub avg_points_per_game: f64,
}
