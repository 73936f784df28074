//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::update_account::AccountPatch;
use crate::domain::entity::account::Account;
use crate::domain::value_object::role::Role;

// ============================================================================
// Sign Up / Log In
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Log in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInRequest {
    pub email: String,
    pub password: String,
}

/// Log in response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInResponse {
    pub access_token: String,
    pub role: Role,
}

// ============================================================================
// Accounts
// ============================================================================

/// Account as exposed over HTTP
///
/// There is deliberately no password field of any kind: the stored digest
/// stays behind this boundary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.account_id.to_string(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            email: account.email.as_str().to_string(),
            role: account.role,
        }
    }
}

/// Paginated account list response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountListResponse {
    pub users: Vec<AccountResponse>,
    pub total_users: i64,
}

/// Partial account update request
///
/// Accepted on both the self-service and the admin route; which fields
/// actually apply is decided by the route's allow-list, not by the DTO.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

impl From<UpdateAccountRequest> for AccountPatch {
    fn from(req: UpdateAccountRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
            role: req.role,
        }
    }
}

/// Email lookup query
#[derive(Debug, Clone, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{account_password::AccountPassword, email::Email};
    use platform::password::RawPassword;

    #[test]
    fn test_account_response_never_carries_password_material() {
        let raw = RawPassword::new("boundary test password".to_string()).unwrap();
        let hash = AccountPassword::from_raw(&raw, None).unwrap();
        let account = Account::new("Ada", "Lovelace", Email::new("ada@example.com").unwrap(), hash);

        let json = serde_json::to_string(&AccountResponse::from(&account)).unwrap();

        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
        assert!(json.contains("\"firstName\":\"Ada\""));
        assert!(json.contains("\"role\":\"user\""));
    }

    #[test]
    fn test_update_request_unknown_fields_do_not_deserialize_role() {
        let req: UpdateAccountRequest =
            serde_json::from_str(r#"{"firstName":"Eve","role":"admin"}"#).unwrap();
        let patch = AccountPatch::from(req);
        assert_eq!(patch.first_name.as_deref(), Some("Eve"));
        assert_eq!(patch.role, Some(Role::Admin));
        assert!(patch.email.is_none());
    }
}
