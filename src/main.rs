use gameitos::game::repository::InMemoryGameRepository;
use gameitos::matches::repository::InMemoryMatchRepository;
use gameitos::player::repository::InMemoryPlayerRepository;
use gameitos::{app_router, AppState};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gameitos=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Gameitos score tracking server");

    // Create shared application state with dependency injection
    // Easy to switch between implementations:
    let player_repository = Arc::new(InMemoryPlayerRepository::new());
    let game_repository = Arc::new(InMemoryGameRepository::new());
    let match_repository = Arc::new(InMemoryMatchRepository::new());

    // For production with PostgreSQL:
    // let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    // let pool = sqlx::PgPool::connect(&database_url).await.expect("Failed to connect to database");
    // then construct sqlx-backed repositories over the pool instead

    let app_state = AppState::new(player_repository, game_repository, match_repository);

    let app = app_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // run our app with hyper, listening globally on port 3000
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("Server running on http://localhost:3000");
    axum::serve(listener, app).await.unwrap();
}
