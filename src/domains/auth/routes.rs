// Auth domain routes
// 인증 라우터
use axum::{routing::{get, post}, Router};
use crate::domains::auth::handlers::auth_handler;
use crate::shared::services::AppState;

/// Create authentication router (mounted under `/api`)
/// 인증 라우터 생성
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            post(auth_handler::register).put(auth_handler::update_user),
        )
        .route("/users/me", get(auth_handler::get_me))
        .route("/login", post(auth_handler::login))
        .route("/refresh", post(auth_handler::refresh))
        .route("/revoke", post(auth_handler::revoke))
}
