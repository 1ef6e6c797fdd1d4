use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domains::auth::models::refresh_token::{RefreshToken, RefreshTokenCreate};
use crate::shared::errors::{StoreError, StoreResult};

/// Refresh Token 저장소 인터페이스 (세션 저장소)
/// Durable record of issued refresh tokens
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    async fn create_refresh_token(&self, data: RefreshTokenCreate) -> StoreResult<()>;

    /// `NotFound` when no row holds `token`
    async fn get_refresh_token(&self, token: &str) -> StoreResult<RefreshToken>;

    /// Marks the row revoked. An existing `revoked_at` is kept, never replaced or cleared.
    async fn set_refresh_token_revoked(
        &self,
        token: &str,
        revoked_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> StoreResult<()>;
}

/// Refresh Token Repository
/// Refresh Token 데이터베이스 작업 처리
pub struct RefreshTokenRepository {
    pool: PgPool,
}

impl RefreshTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenStore for RefreshTokenRepository {
    /// Refresh Token 생성 (저장)
    /// Create and store refresh token
    async fn create_refresh_token(&self, data: RefreshTokenCreate) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO refresh_tokens (token, user_id, created_at, updated_at, expires_at, revoked_at)
            VALUES ($1, $2, $3, $4, $5, NULL)
            "#,
        )
        .bind(&data.token)
        .bind(data.user_id)
        .bind(data.created_at)
        .bind(data.updated_at)
        .bind(data.expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx(e, "refresh token"))?;

        Ok(())
    }

    /// Refresh Token 조회
    /// Find refresh token
    async fn get_refresh_token(&self, token: &str) -> StoreResult<RefreshToken> {
        let row = sqlx::query(
            r#"
            SELECT token, user_id, created_at, updated_at, expires_at, revoked_at
            FROM refresh_tokens
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx(e, "refresh token"))?;

        Ok(RefreshToken {
            token: row.get("token"),
            user_id: row.get("user_id"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
            expires_at: row.get("expires_at"),
            revoked_at: row.get("revoked_at"),
        })
    }

    /// Refresh Token 무효화
    /// Revoke refresh token
    async fn set_refresh_token_revoked(
        &self,
        token: &str,
        revoked_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE refresh_tokens
            SET revoked_at = COALESCE(revoked_at, $2), updated_at = $3
            WHERE token = $1
            "#,
        )
        .bind(token)
        .bind(revoked_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx(e, "refresh token"))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("refresh token"));
        }

        Ok(())
    }
}
