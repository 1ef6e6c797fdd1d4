use thiserror::Error;

/// 저장소 계층 에러
/// Store-layer errors returned by every repository
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// 조회 결과 없음
    /// No row matched the lookup
    #[error("{0} not found")]
    NotFound(&'static str),

    /// 유니크 제약 위반
    /// Unique constraint violated
    #[error("{0} already exists")]
    Conflict(&'static str),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// sqlx 에러를 저장소 에러로 변환
    /// `what` names the entity so callers get a readable NotFound/Conflict
    pub fn from_sqlx(err: sqlx::Error, what: &'static str) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound(what),
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
                StoreError::Conflict(what)
            }
            // foreign key violation: the referenced user is gone
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503") => {
                StoreError::NotFound("user")
            }
            other => StoreError::Unavailable(other.to_string()),
        }
    }
}
