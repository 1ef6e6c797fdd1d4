use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domains::chirps::models::Chirp;
use crate::shared::errors::{StoreError, StoreResult};

/// Chirp 저장소 인터페이스
#[async_trait]
pub trait ChirpStore: Send + Sync {
    async fn create_chirp(&self, body: &str, user_id: Uuid) -> StoreResult<Chirp>;

    /// Oldest first. `author` narrows the list to one user.
    async fn list_chirps(&self, author: Option<Uuid>) -> StoreResult<Vec<Chirp>>;

    async fn get_chirp(&self, id: Uuid) -> StoreResult<Chirp>;

    async fn delete_chirp(&self, id: Uuid) -> StoreResult<()>;
}

pub struct ChirpRepository {
    pool: PgPool,
}

impl ChirpRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn chirp_from_row(row: &PgRow) -> Chirp {
    Chirp {
        id: row.get("id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        body: row.get("body"),
        user_id: row.get("user_id"),
    }
}

#[async_trait]
impl ChirpStore for ChirpRepository {
    async fn create_chirp(&self, body: &str, user_id: Uuid) -> StoreResult<Chirp> {
        let now = Utc::now();
        let row = sqlx::query(
            r#"
            INSERT INTO chirps (id, created_at, updated_at, body, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, created_at, updated_at, body, user_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(now)
        .bind(now)
        .bind(body)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx(e, "chirp"))?;

        Ok(chirp_from_row(&row))
    }

    async fn list_chirps(&self, author: Option<Uuid>) -> StoreResult<Vec<Chirp>> {
        // $1 IS NULL 이면 전체 조회
        let rows = sqlx::query(
            r#"
            SELECT id, created_at, updated_at, body, user_id
            FROM chirps
            WHERE $1::uuid IS NULL OR user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(author)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx(e, "chirp"))?;

        Ok(rows.iter().map(chirp_from_row).collect())
    }

    async fn get_chirp(&self, id: Uuid) -> StoreResult<Chirp> {
        let row = sqlx::query(
            r#"
            SELECT id, created_at, updated_at, body, user_id
            FROM chirps
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx(e, "chirp"))?;

        Ok(chirp_from_row(&row))
    }

    async fn delete_chirp(&self, id: Uuid) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM chirps WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::from_sqlx(e, "chirp"))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("chirp"));
        }

        Ok(())
    }
}
