use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Refresh Token 모델 (DB 저장용)
/// Refresh Token row. `revoked_at == None` means the token is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken {
    pub token: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

/// Refresh Token 생성 요청 (새 토큰 발급 시)
/// Refresh Token creation request (when issuing new token)
#[derive(Debug, Clone)]
pub struct RefreshTokenCreate {
    pub token: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Presentation-time state of a refresh token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTokenState {
    Active,
    Expired,
    Revoked,
}

impl RefreshToken {
    /// Revocation wins over expiry: a revoked token reports `Revoked` even once past `expires_at`.
    pub fn state_at(&self, now: DateTime<Utc>) -> RefreshTokenState {
        if self.revoked_at.is_some() {
            RefreshTokenState::Revoked
        } else if self.expires_at < now {
            RefreshTokenState::Expired
        } else {
            RefreshTokenState::Active
        }
    }
}
