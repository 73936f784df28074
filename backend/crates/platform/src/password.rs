//! Password Hashing and Verification
//!
//! Credential hashing built on Argon2id with:
//! - Salted one-way digests (same input hashes differently each call)
//! - Zeroization of cleartext material
//! - Constant-time verification
//! - Optional application-wide pepper
//!
//! A malformed stored digest is treated as a verification failure, not a
//! distinct error: `verify` returns `false` for anything that does not match.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Maximum password length in Unicode code points
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password contains only whitespace or nothing at all
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Raw Password (Zeroized on drop)
// ============================================================================

/// Cleartext password with automatic memory zeroization
///
/// Not `Clone`, and its Debug output is redacted: the cleartext never
/// outlives the request that carried it.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct RawPassword(String);

impl RawPassword {
    /// Create a raw password, NFKC-normalized and length-checked
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.nfkc().collect();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        Ok(Self(normalized))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id
    ///
    /// Generates a fresh random salt on every call, so hashing the same
    /// input twice yields two different digests.
    ///
    /// ## Arguments
    /// * `pepper` - Optional application-wide secret mixed into the digest
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<PasswordDigest, PasswordHashError> {
        let password_bytes = peppered(self.as_bytes(), pepper);

        let salt = SaltString::generate(OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(PasswordDigest {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Password Digest (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// The PHC string carries the algorithm, parameters, salt, and hash, so
/// verification needs nothing beyond the stored value itself.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    hash: String,
}

impl PasswordDigest {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this digest
    ///
    /// Returns `false` on any mismatch, including a malformed stored
    /// digest. Argon2 compares in constant time internally.
    pub fn verify(&self, password: &RawPassword, pepper: Option<&[u8]>) -> bool {
        let password_bytes = peppered(password.as_bytes(), pepper);

        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(&password_bytes, &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordDigest")
            .field("hash", &"[HASH]")
            .finish()
    }
}

fn peppered(password: &[u8], pepper: Option<&[u8]>) -> Vec<u8> {
    match pepper {
        Some(p) => {
            let mut combined = password.to_vec();
            combined.extend_from_slice(p);
            combined
        }
        None => password.to_vec(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_empty() {
        let result = RawPassword::new("".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::EmptyOrWhitespace)));
    }

    #[test]
    fn test_password_whitespace_only() {
        let result = RawPassword::new("        ".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::EmptyOrWhitespace)));
    }

    #[test]
    fn test_password_too_long() {
        let long_password = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        let result = RawPassword::new(long_password);
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_unicode_password() {
        let result = RawPassword::new("パスワード安全です!".to_string());
        assert!(result.is_ok());
    }

    #[test]
    fn test_hash_and_verify() {
        let password = RawPassword::new("correct horse battery".to_string()).unwrap();
        let digest = password.hash(None).unwrap();

        assert!(digest.verify(&password, None));

        let wrong = RawPassword::new("wrong horse battery".to_string()).unwrap();
        assert!(!digest.verify(&wrong, None));
    }

    #[test]
    fn test_hash_is_salted() {
        let password = RawPassword::new("repeatable input".to_string()).unwrap();
        let first = password.hash(None).unwrap();
        let second = password.hash(None).unwrap();

        assert_ne!(first.as_phc_string(), second.as_phc_string());
        assert!(first.verify(&password, None));
        assert!(second.verify(&password, None));
    }

    #[test]
    fn test_hash_with_pepper() {
        let password = RawPassword::new("peppered input".to_string()).unwrap();
        let pepper = b"application_pepper";
        let digest = password.hash(Some(pepper)).unwrap();

        assert!(digest.verify(&password, Some(pepper)));
        assert!(!digest.verify(&password, None));
        assert!(!digest.verify(&password, Some(b"wrong_pepper")));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = RawPassword::new("roundtrip input".to_string()).unwrap();
        let digest = password.hash(None).unwrap();

        let phc = digest.as_phc_string().to_string();
        let restored = PasswordDigest::from_phc_string(phc).unwrap();

        assert!(restored.verify(&password, None));
    }

    #[test]
    fn test_invalid_phc_string() {
        assert!(PasswordDigest::from_phc_string("not_a_valid_hash").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let password = RawPassword::new("super secret".to_string()).unwrap();
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}
