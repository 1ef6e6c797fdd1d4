// Refresh token issuer
use rand::rngs::OsRng;
use rand::RngCore;

use crate::shared::errors::AuthError;

/// Refresh Token 길이 (바이트, 256 bits)
/// Raw entropy per refresh token
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Refresh Token 생성 (OS 난수, hex 인코딩)
/// Generate an opaque refresh token: 32 random bytes from the OS, hex encoded (64 chars).
pub fn generate_refresh_token() -> Result<String, AuthError> {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng.try_fill_bytes(&mut bytes).map_err(|e| {
        tracing::error!(error = %e, "OS random source failed");
        AuthError::EntropySourceFailure
    })?;

    Ok(hex::encode(bytes))
}
