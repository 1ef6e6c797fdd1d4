use crate::domains::auth::models::{
    LoginRequest, LoginResponse, RefreshResponse, RegisterRequest, UpdateUserRequest, UserResponse,
};
use crate::shared::errors::AuthError;
use crate::shared::middleware::auth::{AuthenticatedUser, BearerToken};
use crate::shared::middleware::json::ApiJson;
use crate::shared::services::AppState;
use axum::{extract::State, http::StatusCode, Json};

// 회원가입 핸들러
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Bad request (missing email or password)"),
        (status = 409, description = "Email already registered"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(app_state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), (StatusCode, Json<serde_json::Value>)> {
    let user = app_state
        .auth_state
        .auth_service
        .register(&request.email, &request.password)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// 이메일/비밀번호 변경 핸들러
/// Update the caller's own email and password
#[utoipa::path(
    put,
    path = "/api/users",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Bad request (missing email or password)"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Email already registered")
    ),
    security(("BearerAuth" = [])),
    tag = "Auth"
)]
pub async fn update_user(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, (StatusCode, Json<serde_json::Value>)> {
    let user = app_state
        .auth_state
        .auth_service
        .update_credentials(authenticated_user.user_id, &request.email, &request.password)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(user.into()))
}

#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "User info retrieved successfully", body = UserResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User no longer exists")
    ),
    security(("BearerAuth" = [])),
    tag = "Auth"
)]
pub async fn get_me(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<UserResponse>, (StatusCode, Json<serde_json::Value>)> {
    let user = app_state
        .auth_state
        .auth_service
        .current_user(authenticated_user.user_id)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(user.into()))
}

// 로그인 핸들러
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing email or password"),
        (status = 401, description = "Incorrect email or password"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(app_state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<serde_json::Value>)> {
    // Service 호출 (비밀번호 검증 + Access/Refresh Token 발급)
    let result = app_state
        .auth_state
        .auth_service
        .login(&request.email, &request.password, request.expires_in_seconds)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(LoginResponse {
        user: result.user.into(),
        token: result.access_token,
        refresh_token: result.refresh_token,
    }))
}

/// 토큰 갱신 핸들러
/// Exchange a refresh token (sent as the bearer credential) for a new access token
#[utoipa::path(
    post,
    path = "/api/refresh",
    responses(
        (status = 200, description = "Token refreshed successfully", body = RefreshResponse),
        (status = 401, description = "Unknown, revoked or expired refresh token")
    ),
    security(("BearerAuth" = [])),
    tag = "Auth"
)]
pub async fn refresh(
    State(app_state): State<AppState>,
    BearerToken(refresh_token): BearerToken,
) -> Result<Json<RefreshResponse>, (StatusCode, Json<serde_json::Value>)> {
    let token = app_state
        .auth_state
        .auth_service
        .refresh(&refresh_token)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(RefreshResponse { token }))
}

/// 로그아웃 핸들러 (Refresh Token 무효화)
/// Revoke handler
#[utoipa::path(
    post,
    path = "/api/revoke",
    responses(
        (status = 204, description = "Refresh token revoked"),
        (status = 401, description = "Unknown refresh token")
    ),
    security(("BearerAuth" = [])),
    tag = "Auth"
)]
pub async fn revoke(
    State(app_state): State<AppState>,
    BearerToken(refresh_token): BearerToken,
) -> Result<StatusCode, (StatusCode, Json<serde_json::Value>)> {
    app_state
        .auth_state
        .auth_service
        .revoke(&refresh_token)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(StatusCode::NO_CONTENT)
}
