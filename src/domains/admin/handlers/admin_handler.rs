use crate::domains::admin::models::{PolkaWebhookRequest, ResetResponse};
use crate::shared::errors::AuthError;
use crate::shared::middleware::auth::ApiKey;
use crate::shared::middleware::json::ApiJson;
use crate::shared::services::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// 헬스 체크
#[utoipa::path(
    get,
    path = "/api/healthz",
    responses((status = 200, description = "Service is up", body = String)),
    tag = "Admin"
)]
pub async fn healthz() -> &'static str {
    "OK"
}

/// 전체 사용자 삭제 (dev 전용)
#[utoipa::path(
    post,
    path = "/admin/reset",
    responses(
        (status = 200, description = "All users deleted", body = ResetResponse),
        (status = 403, description = "Not running on the dev platform")
    ),
    tag = "Admin"
)]
pub async fn reset(
    State(app_state): State<AppState>,
) -> Result<Json<ResetResponse>, (StatusCode, Json<serde_json::Value>)> {
    let deleted = app_state
        .admin_state
        .admin_service
        .reset()
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(ResetResponse {
        result: format!("All {} users deleted", deleted),
    }))
}

/// Polka 결제 웹훅
#[utoipa::path(
    post,
    path = "/api/polka/webhooks",
    request_body = PolkaWebhookRequest,
    responses(
        (status = 204, description = "Event processed or ignored"),
        (status = 401, description = "Missing or wrong API key"),
        (status = 404, description = "User not found")
    ),
    security(("ApiKeyAuth" = [])),
    tag = "Admin"
)]
pub async fn polka_webhook(
    State(app_state): State<AppState>,
    ApiKey(api_key): ApiKey,
    ApiJson(request): ApiJson<PolkaWebhookRequest>,
) -> Result<StatusCode, (StatusCode, Json<serde_json::Value>)> {
    app_state
        .admin_state
        .admin_service
        .handle_polka_event(&api_key, &request.event, request.data.user_id)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(StatusCode::NO_CONTENT)
}
