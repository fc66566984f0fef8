// Public API - what other modules can use
pub use handlers::{create_player, delete_player, get_player, list_players, update_player};
pub use service::PlayerService;

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
mod service;
mod types;
