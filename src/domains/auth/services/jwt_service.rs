// src/domains/auth/services/jwt_service.rs
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domains::auth::models::jwt::{Claims, TOKEN_ISSUER};
use crate::shared::errors::AuthError;

/// Access Token 기본 수명 (1시간)
/// Default access token lifetime
pub const DEFAULT_ACCESS_TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

/// Refresh Token 기본 수명 (1440시간 = 60일)
/// Default refresh token lifetime
pub const DEFAULT_REFRESH_TOKEN_TTL: Duration = Duration::from_secs(1440 * 60 * 60);

/// Access Token 발급 (secret 기반 HS256)
/// Issue an HS256 access token for `user_id`, valid for `ttl`.
///
/// Fails with `InvalidIssueParameters` for the nil UUID or an empty secret.
pub fn issue_access_token(user_id: Uuid, secret: &str, ttl: Duration) -> Result<String, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::InvalidIssueParameters);
    }
    sign(user_id, &EncodingKey::from_secret(secret.as_bytes()), ttl)
}

/// Access Token 검증
/// Verify an access token signed with `secret` and return its subject.
///
/// Checks run in order: structure and signature, expiry, subject.
pub fn verify_access_token(token: &str, secret: &str) -> Result<Uuid, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::InvalidSignature);
    }
    verify(token, &DecodingKey::from_secret(secret.as_bytes()))
}

fn sign(user_id: Uuid, key: &EncodingKey, ttl: Duration) -> Result<String, AuthError> {
    if user_id.is_nil() {
        return Err(AuthError::InvalidIssueParameters);
    }

    let issued_at = Utc::now();
    let ttl = chrono::Duration::from_std(ttl).map_err(|_| AuthError::InvalidIssueParameters)?;
    let expires_at = issued_at
        .checked_add_signed(ttl)
        .ok_or(AuthError::InvalidIssueParameters)?;

    // exp is truncated to whole seconds, so a token never outlives issued_at + ttl
    let claims = Claims {
        iss: TOKEN_ISSUER.to_string(),
        sub: user_id.to_string(),
        iat: issued_at.timestamp(),
        exp: expires_at.timestamp(),
    };

    encode(&Header::new(Algorithm::HS256), &claims, key)
        .map_err(|e| AuthError::Internal(format!("Failed to generate access token: {}", e)))
}

fn verify(token: &str, key: &DecodingKey) -> Result<Uuid, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // expiry is checked below with zero leeway
    validation.validate_exp = false;
    validation.leeway = 0;
    validation.set_issuer(&[TOKEN_ISSUER]);
    validation.set_required_spec_claims(&["exp", "iat", "iss", "sub"]);

    let token_data = decode::<Claims>(token, key, &validation).map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => {
            tracing::debug!(error = %e, "rejecting malformed access token");
            AuthError::MalformedToken
        }
    })?;
    let claims = token_data.claims;

    if Utc::now().timestamp() >= claims.exp {
        return Err(AuthError::TokenExpired);
    }

    match Uuid::parse_str(&claims.sub) {
        Ok(user_id) if !user_id.is_nil() => Ok(user_id),
        _ => Err(AuthError::MalformedSubject),
    }
}

/// JWT 서비스
/// JWT Service for token generation and verification. Keys are built once from the configured secret.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_ttl: Duration,
}

impl JwtService {
    /// JWT Service 생성
    /// Create JWT Service; an empty secret is rejected.
    pub fn new(secret: &str, access_token_ttl: Duration) -> Result<Self, AuthError> {
        if secret.is_empty() {
            return Err(AuthError::InvalidIssueParameters);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_ttl,
        })
    }

    pub fn access_token_ttl(&self) -> Duration {
        self.access_token_ttl
    }

    /// 클라이언트 요청 만료 시간 적용 (설정값 이하일 때만)
    /// Client-requested lifetime is honoured only when 0 < requested <= configured TTL.
    pub fn effective_ttl(&self, requested_secs: Option<i64>) -> Duration {
        match requested_secs {
            Some(secs) if secs > 0 && (secs as u64) <= self.access_token_ttl.as_secs() => {
                Duration::from_secs(secs as u64)
            }
            _ => self.access_token_ttl,
        }
    }

    /// Access Token 발급 (설정된 수명)
    /// Generate Access Token with the configured lifetime
    pub fn generate_access_token(&self, user_id: Uuid) -> Result<String, AuthError> {
        sign(user_id, &self.encoding_key, self.access_token_ttl)
    }

    pub fn generate_access_token_with_ttl(&self, user_id: Uuid, ttl: Duration) -> Result<String, AuthError> {
        sign(user_id, &self.encoding_key, ttl)
    }

    /// Access Token 검증
    /// Verify Access Token
    pub fn verify_access_token(&self, token: &str) -> Result<Uuid, AuthError> {
        verify(token, &self.decoding_key)
    }
}
