// Library crate for the Gameitos score tracking server
// This file exposes the public API for integration tests

pub mod game;
pub mod leaderboard;
pub mod matches;
pub mod player;
pub mod routes;
pub mod scoring;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use matches::{MatchError, MatchService};
pub use routes::app_router;
pub use scoring::{point_distribution, points_for_position, position_from_median};
pub use shared::{AppError, AppState};
