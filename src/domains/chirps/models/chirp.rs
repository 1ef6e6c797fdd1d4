use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Chirp 최대 길이 (바이트)
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Chirp 모델
/// A short post authored by one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = Chirp)]
pub struct Chirp {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[schema(example = "I had something interesting for breakfast")]
    pub body: String,
    pub user_id: Uuid,
}

// Chirp 작성 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = CreateChirpRequest)]
pub struct CreateChirpRequest {
    #[schema(example = "I had something interesting for breakfast")]
    #[serde(default)]
    pub body: String,
}

/// 정렬 방향 (created_at 기준)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

// GET /api/chirps 쿼리 파라미터
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListChirpsQuery {
    /// Only chirps written by this user (UUID)
    pub author_id: Option<String>,
    /// created_at ordering, `asc` by default
    pub sort: Option<SortOrder>,
}
