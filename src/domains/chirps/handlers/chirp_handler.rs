use crate::domains::chirps::models::{Chirp, CreateChirpRequest, ListChirpsQuery};
use crate::shared::errors::ChirpError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::middleware::json::{ApiJson, ApiQuery};
use crate::shared::services::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// Chirp 작성 핸들러
/// Note: user_id는 JWT 토큰에서 자동 추출됨
#[utoipa::path(
    post,
    path = "/api/chirps",
    request_body = CreateChirpRequest,
    responses(
        (status = 201, description = "Chirp created", body = Chirp),
        (status = 400, description = "Empty or too long (max 140 bytes)"),
        (status = 401, description = "Unauthorized (missing or invalid token)")
    ),
    tag = "Chirps",
    security(("BearerAuth" = []))
)]
pub async fn create_chirp(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    ApiJson(request): ApiJson<CreateChirpRequest>,
) -> Result<(StatusCode, Json<Chirp>), (StatusCode, Json<serde_json::Value>)> {
    let chirp = app_state
        .chirp_state
        .chirp_service
        .create_chirp(authenticated_user.user_id, &request.body)
        .await
        .map_err(|e: ChirpError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok((StatusCode::CREATED, Json(chirp)))
}

#[utoipa::path(
    get,
    path = "/api/chirps",
    params(ListChirpsQuery),
    responses(
        (status = 200, description = "Chirps ordered by creation time", body = Vec<Chirp>),
        (status = 404, description = "author_id is not a valid user id")
    ),
    tag = "Chirps"
)]
pub async fn list_chirps(
    State(app_state): State<AppState>,
    ApiQuery(query): ApiQuery<ListChirpsQuery>,
) -> Result<Json<Vec<Chirp>>, (StatusCode, Json<serde_json::Value>)> {
    let chirps = app_state
        .chirp_state
        .chirp_service
        .list_chirps(query.author_id.as_deref(), query.sort.unwrap_or_default())
        .await
        .map_err(|e: ChirpError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(chirps))
}

#[utoipa::path(
    get,
    path = "/api/chirps/{chirp_id}",
    params(("chirp_id" = String, Path, description = "Chirp ID")),
    responses(
        (status = 200, description = "Chirp found", body = Chirp),
        (status = 404, description = "Chirp not found")
    ),
    tag = "Chirps"
)]
pub async fn get_chirp(
    State(app_state): State<AppState>,
    Path(chirp_id): Path<String>,
) -> Result<Json<Chirp>, (StatusCode, Json<serde_json::Value>)> {
    let chirp = app_state
        .chirp_state
        .chirp_service
        .get_chirp(&chirp_id)
        .await
        .map_err(|e: ChirpError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(chirp))
}

/// Chirp 삭제 핸들러 (작성자 본인만)
#[utoipa::path(
    delete,
    path = "/api/chirps/{chirp_id}",
    params(("chirp_id" = String, Path, description = "Chirp ID")),
    responses(
        (status = 204, description = "Chirp deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Chirp belongs to another user"),
        (status = 404, description = "Chirp not found")
    ),
    tag = "Chirps",
    security(("BearerAuth" = []))
)]
pub async fn delete_chirp(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Path(chirp_id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<serde_json::Value>)> {
    app_state
        .chirp_state
        .chirp_service
        .delete_chirp(&chirp_id, authenticated_user.user_id)
        .await
        .map_err(|e: ChirpError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(StatusCode::NO_CONTENT)
}
