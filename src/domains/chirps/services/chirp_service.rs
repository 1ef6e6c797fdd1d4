use std::sync::Arc;

use uuid::Uuid;

use crate::domains::auth::services::authorization::ensure_owner;
use crate::domains::chirps::models::{Chirp, SortOrder, MAX_CHIRP_LENGTH};
use crate::shared::database::ChirpStore;
use crate::shared::errors::{ChirpError, StoreError};

/// Chirp 본문 검증 (1..=140 바이트)
pub fn validate_chirp_body(body: &str) -> Result<(), ChirpError> {
    if body.is_empty() {
        return Err(ChirpError::EmptyBody);
    }
    if body.len() > MAX_CHIRP_LENGTH {
        return Err(ChirpError::TooLong {
            length: body.len(),
            max: MAX_CHIRP_LENGTH,
        });
    }
    Ok(())
}

// Chirp 서비스
#[derive(Clone)]
pub struct ChirpService {
    chirps: Arc<dyn ChirpStore>,
}

impl ChirpService {
    pub fn new(chirps: Arc<dyn ChirpStore>) -> Self {
        Self { chirps }
    }

    pub async fn create_chirp(&self, user_id: Uuid, body: &str) -> Result<Chirp, ChirpError> {
        validate_chirp_body(body)?;

        let chirp = self
            .chirps
            .create_chirp(body, user_id)
            .await
            .map_err(|e| match e {
                StoreError::NotFound(_) => ChirpError::UnknownUser,
                other => other.into(),
            })?;

        tracing::debug!(chirp_id = %chirp.id, %user_id, "chirp created");
        Ok(chirp)
    }

    /// 목록 조회
    /// `author_id` must parse as a UUID; anything else reports `AuthorNotFound`.
    pub async fn list_chirps(
        &self,
        author_id: Option<&str>,
        sort: SortOrder,
    ) -> Result<Vec<Chirp>, ChirpError> {
        let author = author_id
            .filter(|raw| !raw.is_empty())
            .map(|raw| Uuid::parse_str(raw).map_err(|_| ChirpError::AuthorNotFound))
            .transpose()?;

        let mut chirps = self.chirps.list_chirps(author).await?;
        if sort == SortOrder::Desc {
            chirps.reverse();
        }
        Ok(chirps)
    }

    pub async fn get_chirp(&self, chirp_id: &str) -> Result<Chirp, ChirpError> {
        let id = Uuid::parse_str(chirp_id).map_err(|_| ChirpError::NotFound)?;
        Ok(self.chirps.get_chirp(id).await?)
    }

    /// 삭제 (작성자 본인만)
    /// Missing chirp is `NotFound`; someone else's chirp is `Forbidden`.
    pub async fn delete_chirp(&self, chirp_id: &str, caller: Uuid) -> Result<(), ChirpError> {
        let chirp = self.get_chirp(chirp_id).await?;

        ensure_owner(chirp.user_id, caller)?;

        self.chirps.delete_chirp(chirp.id).await?;
        tracing::info!(chirp_id = %chirp.id, user_id = %caller, "chirp deleted");
        Ok(())
    }
}
