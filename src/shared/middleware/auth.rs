use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, StatusCode},
    Json,
};
use uuid::Uuid;

use crate::shared::errors::AuthError;
use crate::shared::services::AppState;

const BEARER_SCHEME: &str = "Bearer";
const API_KEY_SCHEME: &str = "ApiKey";

/// `Authorization: Bearer <token>` 값에서 토큰 추출
/// The value must be exactly the scheme, one space, and a token without whitespace.
pub fn extract_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    extract_credential(header, BEARER_SCHEME)
}

/// `Authorization: ApiKey <key>` 값에서 키 추출
pub fn extract_api_key(header: Option<&str>) -> Result<&str, AuthError> {
    extract_credential(header, API_KEY_SCHEME)
}

fn extract_credential<'a>(header: Option<&'a str>, scheme: &str) -> Result<&'a str, AuthError> {
    let value = match header {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AuthError::MissingHeader),
    };

    let credential = value
        .strip_prefix(scheme)
        .and_then(|rest| rest.strip_prefix(' '))
        .ok_or(AuthError::MalformedHeader)?;

    if credential.is_empty() || credential.chars().any(char::is_whitespace) {
        return Err(AuthError::MalformedHeader);
    }

    Ok(credential)
}

fn authorization_header(headers: &HeaderMap) -> Result<Option<&str>, AuthError> {
    headers
        .get(AUTHORIZATION)
        .map(|value| value.to_str().map_err(|_| AuthError::MalformedHeader))
        .transpose()
}

/// 헤더 맵에서 Bearer 토큰 추출
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    extract_bearer(authorization_header(headers)?)
}

/// 헤더 맵에서 API 키 추출
pub fn api_key(headers: &HeaderMap) -> Result<&str, AuthError> {
    extract_api_key(authorization_header(headers)?)
}

/// 인증된 사용자 정보 (JWT 토큰에서 추출)
/// Authenticated user information (extracted from JWT token)
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// AuthenticatedUser를 Axum Extractor로 구현
///
/// 사용법:
/// ```rust,ignore
/// pub async fn create_chirp(
///     State(app_state): State<AppState>,
///     authenticated_user: AuthenticatedUser,
/// ) -> Result<...> {
///     let user_id = authenticated_user.user_id;
///     // ...
/// }
/// ```
#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // 1. Authorization 헤더에서 토큰 추출
        let token = bearer_token(&parts.headers)?;

        // 2. 토큰 검증 후 subject 반환
        let user_id = state.auth_state.auth_service.verify_access_token(token)?;

        Ok(AuthenticatedUser { user_id })
    }
}

/// Raw bearer credential, for endpoints that take a refresh token instead of a JWT
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for BearerToken {
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(BearerToken(bearer_token(&parts.headers)?.to_string()))
    }
}

/// `ApiKey` credential presented by webhook callers
#[derive(Debug, Clone)]
pub struct ApiKey(pub String);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ApiKey {
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ApiKey(api_key(&parts.headers)?.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_is_extracted() {
        assert_eq!(extract_bearer(Some("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
    }

    #[test]
    fn absent_or_empty_header_is_missing() {
        assert_eq!(extract_bearer(None), Err(AuthError::MissingHeader));
        assert_eq!(extract_bearer(Some("")), Err(AuthError::MissingHeader));
    }

    #[test]
    fn malformed_bearer_values() {
        for value in [
            "abc123",
            "Bearer",
            "Bearer ",
            "Bearer  abc",
            "bearer abc",
            "Basic abc",
            "Bearerabc",
            "Bearer abc def",
            "Bearer abc ",
            "ApiKey abc",
        ] {
            assert_eq!(extract_bearer(Some(value)), Err(AuthError::MalformedHeader), "{value:?}");
        }
    }

    #[test]
    fn api_key_is_extracted() {
        assert_eq!(extract_api_key(Some("ApiKey f271c81ff7084ee5b99a5091b42d486e")), Ok("f271c81ff7084ee5b99a5091b42d486e"));
        assert_eq!(extract_api_key(Some("Bearer abc")), Err(AuthError::MalformedHeader));
        assert_eq!(extract_api_key(None), Err(AuthError::MissingHeader));
    }

    #[test]
    fn header_map_lookup() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), Err(AuthError::MissingHeader));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer tok"));
        assert_eq!(bearer_token(&headers), Ok("tok"));
        assert_eq!(api_key(&headers), Err(AuthError::MalformedHeader));
    }
}
