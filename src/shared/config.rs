use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};

use crate::domains::auth::services::jwt_service::{DEFAULT_ACCESS_TOKEN_TTL, DEFAULT_REFRESH_TOKEN_TTL};

/// 서버 설정
/// Server configuration, read from the environment (and `.env` when present)
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL 접속 URL (`DB_URL`, 필수)
    pub database_url: String,

    /// JWT 서명 비밀키 (`JWT_SECRET`, 필수)
    pub jwt_secret: String,

    /// 실행 환경 (`PLATFORM`); "dev"일 때만 /admin/reset 허용
    pub platform: String,

    /// 결제 웹훅 API 키 (`POLKA_KEY`)
    pub polka_key: String,

    /// `ACCESS_TOKEN_TTL_SECS`, 기본 1시간
    pub access_token_ttl: Duration,

    /// `REFRESH_TOKEN_TTL_HOURS`, 기본 60일
    pub refresh_token_ttl: Duration,

    /// `BIND_ADDR`, 기본 0.0.0.0:8080
    pub bind_addr: String,
}

impl Config {
    /// 환경변수에서 설정 로드
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            match lookup(key) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                _ => Err(anyhow!("{key} must be set")),
            }
        };

        let access_token_ttl = match lookup("ACCESS_TOKEN_TTL_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .with_context(|| format!("ACCESS_TOKEN_TTL_SECS is not a number: {raw}"))?;
                if secs == 0 {
                    bail!("ACCESS_TOKEN_TTL_SECS must be positive");
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_ACCESS_TOKEN_TTL,
        };

        let refresh_token_ttl = match lookup("REFRESH_TOKEN_TTL_HOURS") {
            Some(raw) => {
                let hours: u64 = raw
                    .parse()
                    .with_context(|| format!("REFRESH_TOKEN_TTL_HOURS is not a number: {raw}"))?;
                if hours == 0 {
                    bail!("REFRESH_TOKEN_TTL_HOURS must be positive");
                }
                Duration::from_secs(hours * 60 * 60)
            }
            None => DEFAULT_REFRESH_TOKEN_TTL,
        };

        Ok(Self {
            database_url: required("DB_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            platform: lookup("PLATFORM").unwrap_or_else(|| "prod".to_string()),
            polka_key: lookup("POLKA_KEY").unwrap_or_default(),
            access_token_ttl,
            refresh_token_ttl,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply() {
        let config = Config::from_lookup(lookup_from(&[
            ("DB_URL", "postgres://localhost/chirpy"),
            ("JWT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.platform, "prod");
        assert_eq!(config.polka_key, "");
        assert_eq!(config.access_token_ttl, DEFAULT_ACCESS_TOKEN_TTL);
        assert_eq!(config.refresh_token_ttl, DEFAULT_REFRESH_TOKEN_TTL);
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
    }

    #[test]
    fn empty_secret_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("DB_URL", "postgres://localhost/chirpy"),
            ("JWT_SECRET", ""),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn ttl_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DB_URL", "postgres://localhost/chirpy"),
            ("JWT_SECRET", "secret"),
            ("ACCESS_TOKEN_TTL_SECS", "600"),
            ("REFRESH_TOKEN_TTL_HOURS", "24"),
            ("PLATFORM", "dev"),
        ]))
        .unwrap();
        assert_eq!(config.access_token_ttl, Duration::from_secs(600));
        assert_eq!(config.refresh_token_ttl, Duration::from_secs(24 * 3600));
        assert_eq!(config.platform, "dev");

        assert!(Config::from_lookup(lookup_from(&[
            ("DB_URL", "x"),
            ("JWT_SECRET", "secret"),
            ("ACCESS_TOKEN_TTL_SECS", "soon"),
        ]))
        .is_err());
    }
}
