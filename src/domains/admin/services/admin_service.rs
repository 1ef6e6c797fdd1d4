use std::sync::Arc;

use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::domains::admin::models::USER_UPGRADED_EVENT;
use crate::domains::auth::services::authorization::ensure_environment;
use crate::shared::database::UserStore;
use crate::shared::errors::{AuthError, StoreError};

/// 전체 삭제가 허용되는 환경
pub const DEV_PLATFORM: &str = "dev";

/// 웹훅 처리 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookOutcome {
    Upgraded,
    Ignored,
}

// 관리자 서비스 (전체 삭제, 결제 웹훅)
#[derive(Clone)]
pub struct AdminService {
    users: Arc<dyn UserStore>,
    platform: String,
    polka_key: String,
}

impl AdminService {
    pub fn new(users: Arc<dyn UserStore>, platform: String, polka_key: String) -> Self {
        Self {
            users,
            platform,
            polka_key,
        }
    }

    /// 모든 사용자 삭제 (dev 환경 전용)
    /// Returns the number of deleted users.
    pub async fn reset(&self) -> Result<u64, AuthError> {
        ensure_environment(&self.platform, DEV_PLATFORM)?;

        let deleted = self.users.delete_all_users().await?;
        tracing::warn!(deleted, "all users deleted");
        Ok(deleted)
    }

    /// 결제 웹훅 처리
    /// Events other than `user.upgraded` are acknowledged and ignored.
    pub async fn handle_polka_event(
        &self,
        api_key: &str,
        event: &str,
        user_id: Option<Uuid>,
    ) -> Result<WebhookOutcome, AuthError> {
        if self.polka_key.is_empty() || !bool::from(api_key.as_bytes().ct_eq(self.polka_key.as_bytes())) {
            tracing::warn!("webhook rejected: api key mismatch");
            return Err(AuthError::InvalidApiKey);
        }

        if event != USER_UPGRADED_EVENT {
            tracing::debug!(event, "webhook event ignored");
            return Ok(WebhookOutcome::Ignored);
        }

        let user_id = user_id.ok_or_else(|| AuthError::NotFound("user".to_string()))?;
        self.users
            .upgrade_to_chirpy_red(user_id)
            .await
            .map_err(|e| match e {
                StoreError::NotFound(_) => AuthError::NotFound("user".to_string()),
                other => other.into(),
            })?;

        tracing::info!(%user_id, "user upgraded to chirpy red");
        Ok(WebhookOutcome::Upgraded)
    }
}
