// Chirps domain routes
use axum::{routing::get, Router};
use crate::domains::chirps::handlers::chirp_handler;
use crate::shared::services::AppState;

/// Chirp 라우터 생성 (`/api` 하위)
pub fn create_chirps_router() -> Router<AppState> {
    Router::new()
        .route(
            "/chirps",
            get(chirp_handler::list_chirps).post(chirp_handler::create_chirp),
        )
        .route(
            "/chirps/:chirp_id",
            get(chirp_handler::get_chirp).delete(chirp_handler::delete_chirp),
        )
}
