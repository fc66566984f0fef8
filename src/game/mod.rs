// Public API - what other modules can use
pub use handlers::{create_game, create_game_type, list_available_games, list_game_types};
pub use service::GameService;

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
mod service;
mod types;
