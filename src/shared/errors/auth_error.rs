use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;

use crate::shared::errors::StoreError;

/// 인증 관련 에러
/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// 잘못된 이메일 또는 비밀번호 (두 경우 모두 같은 메시지)
    /// Invalid email or password (same message for both cases)
    #[error("incorrect email or password")]
    InvalidCredentials,

    /// 이메일이 이미 존재함
    /// Email already exists
    #[error("email already registered")]
    EmailAlreadyExists,

    /// 요청 값 검증 실패
    /// Request validation failed
    #[error("{0}")]
    Validation(String),

    // Refresh token presentation
    #[error("unknown refresh token")]
    UnknownToken,

    #[error("revoked refresh token")]
    RevokedToken,

    #[error("expired refresh token")]
    ExpiredToken,

    // Access token verification
    #[error("invalid token signature")]
    InvalidSignature,

    #[error("token has expired")]
    TokenExpired,

    #[error("malformed token")]
    MalformedToken,

    #[error("malformed token subject")]
    MalformedSubject,

    #[error("invalid token parameters")]
    InvalidIssueParameters,

    // Authorization header
    #[error("authorization header not found")]
    MissingHeader,

    #[error("invalid authorization header value")]
    MalformedHeader,

    /// 웹훅 API 키 불일치
    /// Webhook caller presented the wrong API key
    #[error("invalid api key")]
    InvalidApiKey,

    /// 권한 없음 (소유자 불일치, 환경 제한)
    /// Caller is not allowed to perform the operation
    #[error("forbidden")]
    Forbidden,

    #[error("{0} not found")]
    NotFound(String),

    // Credential hasher
    #[error("failed to hash password")]
    HashingFailure,

    #[error("password does not match hash")]
    PasswordMismatch,

    #[error("stored password hash is malformed")]
    MalformedHash,

    /// OS 난수 생성기 실패
    /// Secure random source could not supply bytes
    #[error("entropy source failure")]
    EntropySourceFailure,

    /// 저장소 사용 불가
    /// Backing store failed or is unreachable
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// 내부 서버 에러
    /// Internal server error
    #[error("internal server error: {0}")]
    Internal(String),
}

impl AuthError {
    /// HTTP 상태 코드
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials
            | AuthError::UnknownToken
            | AuthError::RevokedToken
            | AuthError::ExpiredToken
            | AuthError::InvalidSignature
            | AuthError::TokenExpired
            | AuthError::MalformedToken
            | AuthError::MalformedSubject
            | AuthError::MissingHeader
            | AuthError::MalformedHeader
            | AuthError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::NotFound(_) => StatusCode::NOT_FOUND,
            AuthError::EmailAlreadyExists => StatusCode::CONFLICT,
            AuthError::InvalidIssueParameters
            | AuthError::HashingFailure
            | AuthError::PasswordMismatch
            | AuthError::MalformedHash
            | AuthError::EntropySourceFailure
            | AuthError::Unavailable(_)
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 클라이언트에게 보여줄 메시지 (내부 정보 노출 금지)
    /// Message safe to return to the caller
    /// Access/refresh token failures collapse to one message each; the variant stays in the log.
    pub fn client_message(&self) -> String {
        match self {
            AuthError::InvalidSignature
            | AuthError::TokenExpired
            | AuthError::MalformedToken
            | AuthError::MalformedSubject => "invalid token".to_string(),
            AuthError::UnknownToken | AuthError::RevokedToken | AuthError::ExpiredToken => {
                "invalid refresh token".to_string()
            }
            _ if self.status_code().is_server_error() => "Something went wrong".to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => AuthError::NotFound(what.to_string()),
            StoreError::Conflict(what) => AuthError::Internal(format!("unexpected conflict on {what}")),
            StoreError::Unavailable(msg) => AuthError::Unavailable(msg),
        }
    }
}

/// AuthError를 HTTP 응답으로 변환
impl From<AuthError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: AuthError) -> Self {
        let status = err.status_code();
        if status.is_server_error() {
            tracing::error!(error = %err, "request failed");
        } else {
            tracing::debug!(error = %err, status = status.as_u16(), "request rejected");
        }

        (status, Json(json!({ "error": err.client_message() })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_errors_are_unauthorized() {
        assert_eq!(AuthError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::RevokedToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::MissingHeader.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn forbidden_is_not_not_found() {
        assert_eq!(AuthError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AuthError::NotFound("chirp".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn client_message_hides_internal_details() {
        let err = AuthError::Unavailable("connection refused to postgres://root:1234@db".to_string());
        assert_eq!(err.client_message(), "Something went wrong");

        let err = AuthError::PasswordMismatch;
        assert_eq!(err.client_message(), "Something went wrong");
    }

    #[test]
    fn token_failures_share_one_client_message() {
        for err in [
            AuthError::InvalidSignature,
            AuthError::TokenExpired,
            AuthError::MalformedToken,
            AuthError::MalformedSubject,
        ] {
            assert_eq!(err.client_message(), "invalid token");
        }
        for err in [AuthError::UnknownToken, AuthError::RevokedToken, AuthError::ExpiredToken] {
            assert_eq!(err.client_message(), "invalid refresh token");
        }
    }

    #[test]
    fn store_not_found_maps_to_not_found() {
        let err: AuthError = StoreError::NotFound("user").into();
        assert_eq!(err, AuthError::NotFound("user".to_string()));

        let err: AuthError = StoreError::Unavailable("timeout".to_string()).into();
        assert!(matches!(err, AuthError::Unavailable(_)));
    }
}
