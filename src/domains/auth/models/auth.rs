use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use crate::domains::auth::models::user::UserResponse;

// 회원가입 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = RegisterRequest)]
pub struct RegisterRequest {
    /// Email address
    /// 이메일 주소
    #[schema(example = "user@example.com")]
    #[serde(default)]
    pub email: String,

    /// Password (will be hashed)
    /// 비밀번호 (해싱됨)
    #[schema(example = "password123")]
    #[serde(default)]
    pub password: String,
}

// 사용자 정보 수정 요청 모델 (PUT /api/users)
pub type UpdateUserRequest = RegisterRequest;

// 로그인 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = LoginRequest)]
pub struct LoginRequest {
    /// Email address
    /// 이메일 주소
    #[schema(example = "user@example.com")]
    #[serde(default)]
    pub email: String,

    /// Password
    /// 비밀번호
    #[schema(example = "password123")]
    #[serde(default)]
    pub password: String,

    /// Optional shorter access token lifetime; ignored unless 0 < value <= configured TTL
    #[schema(example = 600)]
    #[serde(default)]
    pub expires_in_seconds: Option<i64>,
}

// 로그인 응답 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = LoginResponse)]
pub struct LoginResponse {
    /// User information (without password)
    /// 사용자 정보 (비밀번호 제외)
    #[serde(flatten)]
    pub user: UserResponse,

    /// JWT Access Token (짧은 수명)
    /// JWT Access Token (short lifetime)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,

    /// Refresh Token (긴 수명, DB에 저장)
    /// Refresh Token (long lifetime, stored in database)
    #[schema(example = "56aa826d22baab4b5ec2cea41a59ecbba03e542aedbb31d9b80326ac8ffcfa2a")]
    pub refresh_token: String,
}

// 토큰 갱신 응답 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = RefreshResponse)]
pub struct RefreshResponse {
    /// 새 Access Token
    /// New Access Token
    pub token: String,
}
