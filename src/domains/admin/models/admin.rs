use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// 업그레이드 이벤트 이름
pub const USER_UPGRADED_EVENT: &str = "user.upgraded";

// 전체 삭제 응답
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = ResetResponse)]
pub struct ResetResponse {
    #[schema(example = "All 3 users deleted")]
    pub result: String,
}

/// Polka 웹훅 요청
/// Payment provider notification
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = PolkaWebhookRequest)]
pub struct PolkaWebhookRequest {
    #[schema(example = "user.upgraded")]
    pub event: String,
    #[serde(default)]
    pub data: PolkaWebhookData,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[schema(as = PolkaWebhookData)]
pub struct PolkaWebhookData {
    #[serde(default)]
    pub user_id: Option<Uuid>,
}
