//! Password value object - policy validation and hashing.
//!
//! Encapsulates the registration password policy and Argon2 hashing
//! behind a single type so a plaintext password never leaves the
//! domain layer unhashed.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::config::MIN_PASSWORD_LENGTH;
use crate::errors::{AppError, AppResult};

/// Password value object that handles policy checks, hashing and
/// verification.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Validate a plaintext password against the policy and hash it.
    ///
    /// Policy checks run in a fixed order and each failure maps to
    /// its own reason string:
    /// - fewer than 6 characters: `length error`
    /// - no lowercase latin letter: `no latin symbols`
    /// - no digit: `no numbers`
    ///
    /// Hashing uses Argon2 with a fresh random salt per call, so the
    /// same plaintext yields a different stored hash every time.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        if plain_text.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::validation("length error"));
        }
        if !plain_text.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(AppError::validation("no latin symbols"));
        }
        if !plain_text.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::validation("no numbers"));
        }

        let hash = Self::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plaintext password against this hash.
    ///
    /// Recomputes and compares; nothing is ever decrypted.
    pub fn verify(&self, plain_text: &str) -> bool {
        Self::verify_hash(plain_text, &self.hash).unwrap_or(false)
    }

    fn hash(plain_text: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify_hash(plain_text: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid hash format: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok())
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(err: AppError) -> String {
        match err {
            AppError::Validation(msg) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_too_short_password_rejected() {
        let err = Password::new("abc").unwrap_err();
        assert_eq!(reason(err), "length error");
    }

    #[test]
    fn test_password_without_letters_rejected() {
        let err = Password::new("123456").unwrap_err();
        assert_eq!(reason(err), "no latin symbols");
    }

    #[test]
    fn test_password_without_digits_rejected() {
        let err = Password::new("abcdef").unwrap_err();
        assert_eq!(reason(err), "no numbers");
    }

    #[test]
    fn test_uppercase_only_letters_rejected() {
        // Policy wants lowercase latin letters specifically
        let err = Password::new("ABCDEF1").unwrap_err();
        assert_eq!(reason(err), "no latin symbols");
    }

    #[test]
    fn test_minimal_valid_password_accepted() {
        let password = Password::new("abc123").unwrap();
        assert!(password.verify("abc123"));
    }

    #[test]
    fn test_length_checked_before_composition() {
        // "12345" fails both length and letter checks; length wins
        let err = Password::new("12345").unwrap_err();
        assert_eq!(reason(err), "length error");
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let plain = "b4nana777";
        let password = Password::new(plain).unwrap();
        assert_ne!(password.as_str(), plain);
    }

    #[test]
    fn test_password_hash_and_verify() {
        let plain = "s3cret4me";
        let password = Password::new(plain).unwrap();

        assert!(password.verify(plain));
        assert!(!password.verify("wr0ngpass"));
    }

    #[test]
    fn test_password_from_hash() {
        let plain = "restore1me";
        let hash = Password::new(plain).unwrap().into_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify(plain));
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "same1password";
        let pass1 = Password::new(plain).unwrap();
        let pass2 = Password::new(plain).unwrap();

        // Different salts produce different hashes
        assert_ne!(pass1.as_str(), pass2.as_str());
        // But both verify correctly
        assert!(pass1.verify(plain));
        assert!(pass2.verify(plain));
    }
}
