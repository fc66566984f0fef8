use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::models::MatchStatus;

/// One player's finishing position in a submitted match
#[derive(Debug, Clone, Deserialize)]
pub struct MatchResultEntry {
    pub player_id: String,
    pub position: i32,
}

/// Request payload for submitting a finished match: the match is created and
/// completed in one call, mirroring how results get entered after game night
#[derive(Debug, Deserialize)]
pub struct MatchSubmitRequest {
    pub game_id: String,
    pub match_name: Option<String>,
    pub results: Vec<MatchResultEntry>,
}

/// Query parameters for listing recent matches
#[derive(Debug, Default, Deserialize)]
pub struct MatchListQuery {
    pub limit: Option<usize>,
}

/// A player reference embedded in match responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRef {
    pub id: String,
    pub name: String,
}

/// One scored result row in a match detail response
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResultResponse {
    pub id: String,
    pub position: i32,
    pub points_awarded: i32,
    pub position_from_median: i32,
    pub player: PlayerRef,
}

/// Full match detail with ordered results
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchDetailResponse {
    pub id: String,
    pub match_name: Option<String>,
    pub total_players: i32,
    pub status: MatchStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub game_id: String,
    pub game_name: String,
    pub results: Vec<MatchResultResponse>,
}

/// Recent-match summary annotated with winner and last place
#[derive(Debug, Serialize, Deserialize)]
pub struct RecentMatchResponse {
    pub id: String,
    pub match_name: Option<String>,
    pub total_players: i32,
    pub status: MatchStatus,
    pub completed_at: Option<DateTime<Utc>>,
    pub game_id: String,
    pub game_name: String,
    pub winner: Option<PlayerRef>,
    pub last_place: Option<PlayerRef>,
}
