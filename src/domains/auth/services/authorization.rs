// Authorization checks consumed by handlers
use uuid::Uuid;

use crate::shared::errors::AuthError;

/// 리소스 소유자 확인
/// Only the owner may mutate the resource. A mismatch is always `Forbidden`;
/// callers report a missing resource as `NotFound` before reaching this check.
pub fn ensure_owner(resource_owner: Uuid, caller: Uuid) -> Result<(), AuthError> {
    if resource_owner == caller {
        Ok(())
    } else {
        tracing::warn!(%caller, %resource_owner, "ownership check failed");
        Err(AuthError::Forbidden)
    }
}

/// 실행 환경 확인 (예: "dev"에서만 전체 삭제 허용)
/// Gate destructive operations on the configured platform label.
pub fn ensure_environment(current: &str, required: &str) -> Result<(), AuthError> {
    if current == required {
        Ok(())
    } else {
        tracing::warn!(current, required, "environment gate denied operation");
        Err(AuthError::Forbidden)
    }
}
