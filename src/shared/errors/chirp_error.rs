use thiserror::Error;
use axum::{http::StatusCode, Json};

use crate::shared::errors::{AuthError, StoreError};

/// Chirp 관련 에러
/// Chirp-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChirpError {
    #[error("Chirp cannot be empty")]
    EmptyBody,

    /// 최대 길이 초과
    /// Body longer than the allowed number of bytes
    #[error("Chirp is too long")]
    TooLong { length: usize, max: usize },

    #[error("Chirp not found")]
    NotFound,

    /// author_id 필터가 UUID가 아님
    #[error("Author not found")]
    AuthorNotFound,

    /// 작성자가 존재하지 않음 (토큰은 유효하지만 사용자가 삭제됨)
    #[error("Invalid user")]
    UnknownUser,

    /// 인증/권한 에러 (소유자 확인 실패 등)
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl ChirpError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ChirpError::EmptyBody | ChirpError::TooLong { .. } | ChirpError::UnknownUser => {
                StatusCode::BAD_REQUEST
            }
            ChirpError::NotFound | ChirpError::AuthorNotFound => StatusCode::NOT_FOUND,
            ChirpError::Auth(inner) => inner.status_code(),
            ChirpError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ChirpError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ChirpError::NotFound,
            other => ChirpError::DatabaseError(other.to_string()),
        }
    }
}

/// ChirpError를 HTTP 응답으로 변환
impl From<ChirpError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: ChirpError) -> Self {
        match err {
            ChirpError::Auth(inner) => inner.into(),
            ChirpError::DatabaseError(ref msg) => {
                tracing::error!(error = %msg, "chirp request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "Something went wrong" })),
                )
            }
            other => (other.status_code(), Json(serde_json::json!({ "error": other.to_string() }))),
        }
    }
}
