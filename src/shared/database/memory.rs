// In-memory store
// 메모리 기반 저장소 (테스트 및 로컬 실행용)
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domains::auth::models::refresh_token::{RefreshToken, RefreshTokenCreate};
use crate::domains::auth::models::user::User;
use crate::domains::chirps::models::Chirp;
use crate::shared::database::repositories::{ChirpStore, RefreshTokenStore, UserStore};
use crate::shared::errors::{StoreError, StoreResult};

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    refresh_tokens: HashMap<String, RefreshToken>,
    // insertion order doubles as created_at order
    chirps: Vec<Chirp>,
}

/// Implements every store trait over process memory. Cloning shares the same tables.
///
/// Deleting users cascades to their refresh tokens and chirps, matching the
/// `ON DELETE CASCADE` foreign keys of the Postgres schema.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a row as-is, bypassing the gateway. Lets tests plant expired or revoked tokens.
    pub fn insert_refresh_token(&self, row: RefreshToken) {
        self.tables.write().refresh_tokens.insert(row.token.clone(), row);
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, email: &str, hashed_password: &str) -> StoreResult<User> {
        let mut tables = self.tables.write();
        if tables.users.values().any(|u| u.email == email) {
            return Err(StoreError::Conflict("user"));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            hashed_password: hashed_password.to_string(),
            created_at: now,
            updated_at: now,
            is_chirpy_red: false,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user_by_email(&self, email: &str) -> StoreResult<User> {
        self.tables
            .read()
            .users
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(StoreError::NotFound("user"))
    }

    async fn get_user_by_id(&self, id: Uuid) -> StoreResult<User> {
        self.tables
            .read()
            .users
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound("user"))
    }

    async fn update_user(&self, id: Uuid, email: &str, hashed_password: &str) -> StoreResult<User> {
        let mut tables = self.tables.write();
        if tables.users.values().any(|u| u.email == email && u.id != id) {
            return Err(StoreError::Conflict("user"));
        }

        let user = tables.users.get_mut(&id).ok_or(StoreError::NotFound("user"))?;
        user.email = email.to_string();
        user.hashed_password = hashed_password.to_string();
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn upgrade_to_chirpy_red(&self, id: Uuid) -> StoreResult<User> {
        let mut tables = self.tables.write();
        let user = tables.users.get_mut(&id).ok_or(StoreError::NotFound("user"))?;
        user.is_chirpy_red = true;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn delete_all_users(&self) -> StoreResult<u64> {
        let mut tables = self.tables.write();
        let deleted = tables.users.len() as u64;
        tables.users.clear();
        tables.refresh_tokens.clear();
        tables.chirps.clear();
        Ok(deleted)
    }
}

#[async_trait]
impl RefreshTokenStore for MemoryStore {
    async fn create_refresh_token(&self, data: RefreshTokenCreate) -> StoreResult<()> {
        let mut tables = self.tables.write();
        if !tables.users.contains_key(&data.user_id) {
            return Err(StoreError::NotFound("user"));
        }
        if tables.refresh_tokens.contains_key(&data.token) {
            return Err(StoreError::Conflict("refresh token"));
        }

        tables.refresh_tokens.insert(
            data.token.clone(),
            RefreshToken {
                token: data.token,
                user_id: data.user_id,
                created_at: data.created_at,
                updated_at: data.updated_at,
                expires_at: data.expires_at,
                revoked_at: None,
            },
        );
        Ok(())
    }

    async fn get_refresh_token(&self, token: &str) -> StoreResult<RefreshToken> {
        self.tables
            .read()
            .refresh_tokens
            .get(token)
            .cloned()
            .ok_or(StoreError::NotFound("refresh token"))
    }

    async fn set_refresh_token_revoked(
        &self,
        token: &str,
        revoked_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> StoreResult<()> {
        let mut tables = self.tables.write();
        let row = tables
            .refresh_tokens
            .get_mut(token)
            .ok_or(StoreError::NotFound("refresh token"))?;
        row.revoked_at.get_or_insert(revoked_at);
        row.updated_at = updated_at;
        Ok(())
    }
}

#[async_trait]
impl ChirpStore for MemoryStore {
    async fn create_chirp(&self, body: &str, user_id: Uuid) -> StoreResult<Chirp> {
        let mut tables = self.tables.write();
        if !tables.users.contains_key(&user_id) {
            return Err(StoreError::NotFound("user"));
        }

        let now = Utc::now();
        let chirp = Chirp {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            body: body.to_string(),
            user_id,
        };
        tables.chirps.push(chirp.clone());
        Ok(chirp)
    }

    async fn list_chirps(&self, author: Option<Uuid>) -> StoreResult<Vec<Chirp>> {
        Ok(self
            .tables
            .read()
            .chirps
            .iter()
            .filter(|c| author.map_or(true, |a| c.user_id == a))
            .cloned()
            .collect())
    }

    async fn get_chirp(&self, id: Uuid) -> StoreResult<Chirp> {
        self.tables
            .read()
            .chirps
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::NotFound("chirp"))
    }

    async fn delete_chirp(&self, id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write();
        let before = tables.chirps.len();
        tables.chirps.retain(|c| c.id != id);
        if tables.chirps.len() == before {
            return Err(StoreError::NotFound("chirp"));
        }
        Ok(())
    }
}
