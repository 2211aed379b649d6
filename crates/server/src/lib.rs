pub mod config;
pub mod db;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use chess_core::Game;
use sqlx::SqlitePool;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

/// The one live game. Every handler takes the lock for its whole request,
/// so start/reset/move never interleave.
pub type SharedGame = Arc<Mutex<Game>>;

/// Finished-game storage. `None` when history is disabled.
pub type HistoryPool = Option<SqlitePool>;

pub fn new_shared_game() -> SharedGame {
    Arc::new(Mutex::new(Game::new()))
}

pub fn build_router(game: SharedGame, history: HistoryPool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/start", post(routes::game::start_game))
        .route("/board", get(routes::game::get_board))
        .route("/move", post(routes::game::make_move))
        .route("/reset", post(routes::game::reset_board))
        .route("/history", get(routes::history::get_history))
        .layer(Extension(game))
        .layer(Extension(history))
        .layer(cors)
}
