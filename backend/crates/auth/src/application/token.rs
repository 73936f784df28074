//! Access Token Service
//!
//! Issues and verifies the signed, time-limited bearer tokens that carry a
//! caller's identity and role between requests. Tokens are stateless: the
//! guard trusts the role claim as of issuance and never re-reads the
//! account, so a role change only takes effect once the old token expires.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::value_object::role::Role;
use crate::error::{AuthError, AuthResult};

/// Claims embedded in an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject - account ID
    pub sub: Uuid,
    /// Account email
    pub email: String,
    /// Role as of issuance
    pub role: Role,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// Token issuing and verification service
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: std::time::Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::default();
        // No expiry grace window: an expired token is expired
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(&config.token_secret),
            decoding_key: DecodingKey::from_secret(&config.token_secret),
            validation,
            ttl: config.token_ttl,
        }
    }

    /// Issue a signed access token for an account
    pub fn issue(&self, account: &Account) -> AuthResult<String> {
        let ttl = chrono::Duration::from_std(self.ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid token TTL: {e}")))?;
        let expires_at = Utc::now() + ttl;

        let claims = AccessClaims {
            sub: *account.account_id.as_uuid(),
            email: account.email.as_str().to_string(),
            role: account.role,
            exp: expires_at.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Token signing failed: {e}")))
    }

    /// Verify a token and return its claims unchanged
    ///
    /// Bad signature, malformed structure, and passed expiry all collapse
    /// into `InvalidToken`.
    pub fn verify(&self, token: &str) -> AuthResult<AccessClaims> {
        decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{account_password::AccountPassword, email::Email};
    use platform::password::RawPassword;

    fn account_with_role(role: Role) -> Account {
        let raw = RawPassword::new("a test password".to_string()).unwrap();
        let hash = AccountPassword::from_raw(&raw, None).unwrap();
        let mut account = Account::new(
            "Grace",
            "Hopper",
            Email::new("grace@example.com").unwrap(),
            hash,
        );
        account.set_role(role);
        account
    }

    fn service() -> TokenService {
        TokenService::new(&AuthConfig::with_random_secret())
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let service = service();
        let account = account_with_role(Role::Editor);

        let token = service.issue(&account).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, *account.account_id.as_uuid());
        assert_eq!(claims.email, "grace@example.com");
        assert_eq!(claims.role, Role::Editor);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = AuthConfig::with_random_secret();
        let service = TokenService::new(&config);

        let claims = AccessClaims {
            sub: Uuid::new_v4(),
            email: "grace@example.com".to_string(),
            role: Role::User,
            exp: Utc::now().timestamp() - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(&config.token_secret),
        )
        .unwrap();

        assert!(matches!(
            service.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = service();
        let account = account_with_role(Role::User);

        let token = service.issue(&account).unwrap();
        let mut tampered = token.into_bytes();
        let last = tampered.len() - 1;
        tampered[last] = if tampered[last] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(tampered).unwrap();

        assert!(matches!(
            service.verify(&tampered),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuing = service();
        let verifying = service();
        let account = account_with_role(Role::Admin);

        let token = issuing.issue(&account).unwrap();
        assert!(matches!(
            verifying.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = service();
        assert!(matches!(
            service.verify("not.a.token"),
            Err(AuthError::InvalidToken)
        ));
        assert!(matches!(service.verify(""), Err(AuthError::InvalidToken)));
    }
}
