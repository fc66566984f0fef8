// Public API - what other modules can use
pub use errors::MatchError;
pub use handlers::{get_match, list_recent_matches, submit_match};
pub use service::MatchService;

// Internal modules
mod errors;
mod handlers;
pub mod models;
pub mod repository;
mod service;
pub mod types;
