// Auth domain state
// 인증 도메인 상태
use std::sync::Arc;
use std::time::Duration;

use crate::domains::auth::services::{AuthService, JwtService};
use crate::shared::database::{RefreshTokenStore, UserStore};

/// Auth domain state
/// 인증 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct AuthState {
    pub auth_service: AuthService,
}

impl AuthState {
    /// AuthState 생성 (저장소와 JWT 서비스 필요)
    pub fn new(
        users: Arc<dyn UserStore>,
        refresh_tokens: Arc<dyn RefreshTokenStore>,
        jwt_service: JwtService,
        refresh_token_ttl: Duration,
    ) -> Self {
        Self {
            auth_service: AuthService::new(users, refresh_tokens, jwt_service, refresh_token_ttl),
        }
    }
}
