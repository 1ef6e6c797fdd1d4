use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use crate::domains::auth::models::{RefreshTokenCreate, RefreshTokenState, User};
use crate::domains::auth::services::jwt_service::JwtService;
use crate::domains::auth::services::password::{hash_password, verify_password};
use crate::domains::auth::services::refresh_token::generate_refresh_token;
use crate::shared::database::{RefreshTokenStore, UserStore};
use crate::shared::errors::{AuthError, StoreError};

/// 로그인 결과
/// Tokens and profile returned by a successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

// 인증 서비스
// AuthService: login, refresh, revoke and access token verification.
// Holds no mutable state of its own; every check-then-act sequence is left to the stores.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    refresh_tokens: Arc<dyn RefreshTokenStore>,
    jwt_service: JwtService,
    refresh_token_ttl: Duration,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        refresh_tokens: Arc<dyn RefreshTokenStore>,
        jwt_service: JwtService,
        refresh_token_ttl: Duration,
    ) -> Self {
        Self {
            users,
            refresh_tokens,
            jwt_service,
            refresh_token_ttl,
        }
    }

    // 회원가입 (비즈니스 로직)
    pub async fn register(&self, email: &str, password: &str) -> Result<User, AuthError> {
        validate_credentials_input(email, password)?;

        let hashed_password = hash_password(password)?;

        let user = self
            .users
            .create_user(email, &hashed_password)
            .await
            .map_err(|e| match e {
                StoreError::Conflict(_) => AuthError::EmailAlreadyExists,
                other => other.into(),
            })?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// 로그인
    /// Unknown email and wrong password both surface as `InvalidCredentials`;
    /// the actual cause only reaches the debug log.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        requested_ttl_secs: Option<i64>,
    ) -> Result<LoginResult, AuthError> {
        if email.is_empty() {
            return Err(AuthError::Validation("Email must not be blank".to_string()));
        }
        if password.is_empty() {
            return Err(AuthError::Validation("Password required".to_string()));
        }

        // 1. 이메일로 사용자 조회
        let user = match self.users.get_user_by_email(email).await {
            Ok(user) => user,
            Err(StoreError::NotFound(_)) => {
                tracing::debug!("login rejected: no such user");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(e.into()),
        };

        // 2. 비밀번호 검증
        match verify_password(password, &user.hashed_password) {
            Ok(()) => {}
            Err(AuthError::PasswordMismatch) => {
                tracing::debug!(user_id = %user.id, "login rejected: password mismatch");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(user_id = %user.id, error = %e, "stored password hash unusable");
                return Err(AuthError::InvalidCredentials);
            }
        }

        // 3. Access Token 발급
        let ttl = self.jwt_service.effective_ttl(requested_ttl_secs);
        let access_token = self.jwt_service.generate_access_token_with_ttl(user.id, ttl)?;

        // 4. Refresh Token 생성 및 저장
        let refresh_token = self.create_refresh_token(user.id).await?;

        tracing::info!(user_id = %user.id, "user logged in");
        Ok(LoginResult {
            user,
            access_token,
            refresh_token,
        })
    }

    /// Refresh Token 생성 및 DB 저장
    /// Create and store refresh token
    async fn create_refresh_token(&self, user_id: Uuid) -> Result<String, AuthError> {
        let token = generate_refresh_token()?;

        let now = Utc::now();
        let ttl = chrono::Duration::from_std(self.refresh_token_ttl)
            .map_err(|e| AuthError::Internal(format!("refresh token ttl out of range: {}", e)))?;

        self.refresh_tokens
            .create_refresh_token(RefreshTokenCreate {
                token: token.clone(),
                user_id,
                created_at: now,
                updated_at: now,
                expires_at: now + ttl,
            })
            .await?;

        Ok(token)
    }

    /// Refresh Token 검증 및 새 Access Token 발급
    /// The presented refresh token is left untouched (no rotation).
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, AuthError> {
        let stored = self
            .refresh_tokens
            .get_refresh_token(refresh_token)
            .await
            .map_err(unknown_token)?;

        match stored.state_at(Utc::now()) {
            RefreshTokenState::Active => {}
            RefreshTokenState::Revoked => {
                tracing::debug!(user_id = %stored.user_id, "refresh rejected: token revoked");
                return Err(AuthError::RevokedToken);
            }
            RefreshTokenState::Expired => {
                tracing::debug!(user_id = %stored.user_id, "refresh rejected: token expired");
                return Err(AuthError::ExpiredToken);
            }
        }

        self.jwt_service.generate_access_token(stored.user_id)
    }

    /// 로그아웃 - Refresh Token 무효화
    /// Revoking an already revoked token succeeds and keeps the original `revoked_at`.
    pub async fn revoke(&self, refresh_token: &str) -> Result<(), AuthError> {
        let stored = self
            .refresh_tokens
            .get_refresh_token(refresh_token)
            .await
            .map_err(unknown_token)?;

        if stored.revoked_at.is_some() {
            tracing::debug!(user_id = %stored.user_id, "refresh token already revoked");
            return Ok(());
        }

        let now = Utc::now();
        self.refresh_tokens
            .set_refresh_token_revoked(refresh_token, now, now)
            .await
            .map_err(unknown_token)?;

        tracing::info!(user_id = %stored.user_id, "refresh token revoked");
        Ok(())
    }

    /// Access Token 검증 (모든 보호된 엔드포인트에서 사용)
    pub fn verify_access_token(&self, token: &str) -> Result<Uuid, AuthError> {
        self.jwt_service.verify_access_token(token)
    }

    /// 이메일/비밀번호 변경 (토큰 소유자 본인)
    pub async fn update_credentials(
        &self,
        user_id: Uuid,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        validate_credentials_input(email, password)?;

        let hashed_password = hash_password(password)?;

        self.users
            .update_user(user_id, email, &hashed_password)
            .await
            .map_err(|e| match e {
                StoreError::Conflict(_) => AuthError::EmailAlreadyExists,
                other => other.into(),
            })
    }

    pub async fn current_user(&self, user_id: Uuid) -> Result<User, AuthError> {
        Ok(self.users.get_user_by_id(user_id).await?)
    }
}

fn validate_credentials_input(email: &str, password: &str) -> Result<(), AuthError> {
    if email.is_empty() {
        return Err(AuthError::Validation("Email required".to_string()));
    }
    if password.is_empty() {
        return Err(AuthError::Validation("Password required".to_string()));
    }
    Ok(())
}

fn unknown_token(err: StoreError) -> AuthError {
    match err {
        StoreError::NotFound(_) => AuthError::UnknownToken,
        other => other.into(),
    }
}
