// Admin domain routes
use axum::{routing::{get, post}, Router};
use crate::domains::admin::handlers::admin_handler;
use crate::shared::services::AppState;

/// `/admin` 하위 라우터
pub fn create_admin_router() -> Router<AppState> {
    Router::new().route("/reset", post(admin_handler::reset))
}

/// `/api` 하위의 운영용 엔드포인트 (헬스 체크, 웹훅)
pub fn create_ops_router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(admin_handler::healthz))
        .route("/polka/webhooks", post(admin_handler::polka_webhook))
}
