use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domains::auth::models::user::User;
use crate::shared::errors::{StoreError, StoreResult};

/// 사용자 저장소 인터페이스
/// User record store consumed by the auth gateway
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, email: &str, hashed_password: &str) -> StoreResult<User>;

    // 이메일로 사용자 조회 (로그인용)
    async fn get_user_by_email(&self, email: &str) -> StoreResult<User>;

    async fn get_user_by_id(&self, id: Uuid) -> StoreResult<User>;

    async fn update_user(&self, id: Uuid, email: &str, hashed_password: &str) -> StoreResult<User>;

    async fn upgrade_to_chirpy_red(&self, id: Uuid) -> StoreResult<User>;

    /// Deletes every user; refresh tokens and chirps go with them. Returns the number of users removed.
    async fn delete_all_users(&self) -> StoreResult<u64>;
}

/// PostgreSQL 사용자 저장소
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn user_from_row(row: &PgRow) -> User {
    User {
        id: row.get("id"),
        email: row.get("email"),
        hashed_password: row.get("hashed_password"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        is_chirpy_red: row.get("is_chirpy_red"),
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create_user(&self, email: &str, hashed_password: &str) -> StoreResult<User> {
        let now = Utc::now();
        let row = sqlx::query(
            r#"
            INSERT INTO users (id, email, hashed_password, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, hashed_password, created_at, updated_at, is_chirpy_red
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(hashed_password)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx(e, "user"))?;

        Ok(user_from_row(&row))
    }

    async fn get_user_by_email(&self, email: &str) -> StoreResult<User> {
        let row = sqlx::query(
            r#"
            SELECT id, email, hashed_password, created_at, updated_at, is_chirpy_red
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx(e, "user"))?;

        Ok(user_from_row(&row))
    }

    async fn get_user_by_id(&self, id: Uuid) -> StoreResult<User> {
        let row = sqlx::query(
            r#"
            SELECT id, email, hashed_password, created_at, updated_at, is_chirpy_red
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx(e, "user"))?;

        Ok(user_from_row(&row))
    }

    async fn update_user(&self, id: Uuid, email: &str, hashed_password: &str) -> StoreResult<User> {
        let row = sqlx::query(
            r#"
            UPDATE users
            SET email = $2, hashed_password = $3, updated_at = $4
            WHERE id = $1
            RETURNING id, email, hashed_password, created_at, updated_at, is_chirpy_red
            "#,
        )
        .bind(id)
        .bind(email)
        .bind(hashed_password)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx(e, "user"))?;

        Ok(user_from_row(&row))
    }

    async fn upgrade_to_chirpy_red(&self, id: Uuid) -> StoreResult<User> {
        let row = sqlx::query(
            r#"
            UPDATE users
            SET is_chirpy_red = TRUE, updated_at = $2
            WHERE id = $1
            RETURNING id, email, hashed_password, created_at, updated_at, is_chirpy_red
            "#,
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx(e, "user"))?;

        Ok(user_from_row(&row))
    }

    async fn delete_all_users(&self) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::from_sqlx(e, "user"))?;

        Ok(result.rows_affected())
    }
}
