pub mod game;
pub mod health;
pub mod results;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};

use crate::state::SessionSlot;

pub fn router(pool: SqlitePool, session: SessionSlot) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Game session
        .route("/api/game", get(game::get_game))
        .route("/api/game/start", post(game::start_game))
        .route("/api/game/move", post(game::make_move))
        .route("/api/game/board", get(game::get_board))
        .route("/api/game/fast-win", post(game::fast_win))
        // Match history
        .route("/api/results", get(results::get_match_results))
        // Shared state
        .layer(Extension(pool))
        .layer(Extension(session))
        .layer(cors)
}
