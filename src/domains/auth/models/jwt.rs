use serde::{Deserialize, Serialize};

/// 토큰 발급자 (고정값)
/// Issuer claim stamped on every access token
pub const TOKEN_ISSUER: &str = "chirpy";

/// JWT Claims (토큰에 포함될 데이터)
/// JWT Claims (data to be included in token)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer
    pub iss: String,

    /// 사용자 ID (UUID 문자열)
    /// Subject: user id as a UUID string
    pub sub: String,

    /// 발급 시간 (Unix timestamp)
    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// 만료 시간 (Unix timestamp)
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}
