// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합
// Routes module: combines all domain routers

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;
use crate::shared::services::AppState;

// 각 도메인의 routes import
use crate::domains::admin::routes::{create_admin_router, create_ops_router};
use crate::domains::auth::routes::create_auth_router;
use crate::domains::chirps::routes::create_chirps_router;

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .merge(create_ops_router())
                .merge(create_auth_router())
                .merge(create_chirps_router()),
        )
        .nest("/admin", create_admin_router())
}

/// 상태가 주입된 전체 애플리케이션 (Swagger UI, 요청 로그 포함)
pub fn build_app(app_state: AppState) -> Router {
    Router::new()
        .merge(create_router())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
