use std::sync::Arc;

use anyhow::Result;

use crate::domains::admin::services::state::AdminState;
use crate::domains::auth::services::state::AuthState;
use crate::domains::auth::services::JwtService;
use crate::domains::chirps::services::state::ChirpState;
use crate::shared::config::Config;
use crate::shared::database::{
    ChirpRepository, ChirpStore, Database, MemoryStore, RefreshTokenRepository, RefreshTokenStore,
    UserRepository, UserStore,
};

/// 저장소 묶음
/// Store handles shared by every domain state
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub refresh_tokens: Arc<dyn RefreshTokenStore>,
    pub chirps: Arc<dyn ChirpStore>,
}

impl Stores {
    /// PostgreSQL 저장소
    pub fn postgres(db: &Database) -> Self {
        Self {
            users: Arc::new(UserRepository::new(db.pool().clone())),
            refresh_tokens: Arc::new(RefreshTokenRepository::new(db.pool().clone())),
            chirps: Arc::new(ChirpRepository::new(db.pool().clone())),
        }
    }

    /// 메모리 저장소 (모든 trait이 같은 테이블을 공유)
    pub fn memory(store: MemoryStore) -> Self {
        Self {
            users: Arc::new(store.clone()),
            refresh_tokens: Arc::new(store.clone()),
            chirps: Arc::new(store),
        }
    }
}

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 각 도메인의 State를 조합하여 전체 애플리케이션 상태를 관리
#[derive(Clone)]
pub struct AppState {
    pub auth_state: AuthState,
    pub chirp_state: ChirpState,
    pub admin_state: AdminState,
}

impl AppState {
    /// 모든 도메인 State를 초기화하고 조합
    pub fn new(config: &Config, stores: Stores) -> Result<Self> {
        // 1. 공유 서비스 생성 (JWT)
        let jwt_service = JwtService::new(&config.jwt_secret, config.access_token_ttl)?;

        // 2. 각 도메인 State 생성
        let auth_state = AuthState::new(
            stores.users.clone(),
            stores.refresh_tokens,
            jwt_service,
            config.refresh_token_ttl,
        );
        let chirp_state = ChirpState::new(stores.chirps);
        let admin_state = AdminState::new(
            stores.users,
            config.platform.clone(),
            config.polka_key.clone(),
        );

        Ok(Self {
            auth_state,
            chirp_state,
            admin_state,
        })
    }
}
