//! Account Password Value Object
//!
//! Stored password digest for an account. Hashing and verification are
//! delegated to `platform::password`; this wrapper keeps the domain layer
//! free of algorithm details and the digest out of any serialized output.

use platform::password::{PasswordDigest, PasswordHashError, RawPassword};

/// Stored password digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountPassword(PasswordDigest);

impl AccountPassword {
    /// Hash a raw password into a storable digest
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> Result<Self, PasswordHashError> {
        raw.hash(pepper).map(Self)
    }

    /// Restore from a PHC string loaded from the database
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        PasswordDigest::from_phc_string(s).map(Self)
    }

    /// Verify a raw password against this digest
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw, pepper)
    }

    /// PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_and_verify() {
        let raw = RawPassword::new("a sufficiently good password".to_string()).unwrap();
        let stored = AccountPassword::from_raw(&raw, None).unwrap();

        assert!(stored.verify(&raw, None));

        let other = RawPassword::new("a different password".to_string()).unwrap();
        assert!(!stored.verify(&other, None));
    }

    #[test]
    fn test_db_roundtrip() {
        let raw = RawPassword::new("roundtrip password".to_string()).unwrap();
        let stored = AccountPassword::from_raw(&raw, None).unwrap();

        let restored = AccountPassword::from_phc_string(stored.as_phc_string()).unwrap();
        assert!(restored.verify(&raw, None));
    }
}
