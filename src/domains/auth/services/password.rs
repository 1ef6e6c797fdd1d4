// Credential hasher
// 비밀번호 해싱/검증 (Argon2)
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use argon2::password_hash::{rand_core::OsRng, Error as PasswordHashError, SaltString};

use crate::shared::errors::AuthError;

/// 비밀번호 해싱 (매번 새로운 salt 사용)
/// Hash a password with a fresh random salt; returns a PHC string
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!(error = %e, "argon2 hashing failed");
            AuthError::HashingFailure
        })
}

/// 비밀번호 검증 (constant-time 비교는 argon2가 수행)
/// Verify `password` against a stored PHC hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(password_hash).map_err(|_| AuthError::MalformedHash)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|e| match e {
            PasswordHashError::Password => AuthError::PasswordMismatch,
            _ => AuthError::MalformedHash,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_its_own_plaintext() {
        let hash = hash_password("abc123password").unwrap();
        assert_ne!(hash, "abc123password");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("abc123password", &hash).is_ok());
    }

    #[test]
    fn wrong_password_is_mismatch() {
        let hash = hash_password("pw1").unwrap();
        assert_eq!(verify_password("pw2", &hash), Err(AuthError::PasswordMismatch));
        assert_eq!(verify_password("", &hash), Err(AuthError::PasswordMismatch));
    }

    #[test]
    fn same_password_hashes_differently() {
        let first = hash_password("abc123").unwrap();
        let second = hash_password("abc123").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("abc123", &first).is_ok());
        assert!(verify_password("abc123", &second).is_ok());
    }

    #[test]
    fn malformed_hash_is_distinct_from_mismatch() {
        assert_eq!(verify_password("pw", "not-a-phc-string"), Err(AuthError::MalformedHash));
        assert_eq!(verify_password("pw", ""), Err(AuthError::MalformedHash));
    }
}
