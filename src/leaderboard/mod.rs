// Public API - what other modules can use
pub use handlers::{get_game_leaderboard, get_leaderboard, get_overall_stats, get_player_stats};
pub use service::LeaderboardService;

// Internal modules
mod handlers;
mod service;
pub mod types;
