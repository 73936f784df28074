//! Update Account Use Case
//!
//! Partial account updates behind a caller-supplied field allow-list. The
//! allow-list is what separates a self-service profile edit from an
//! admin-driven role change: the filter is pure with respect to its inputs
//! and never decides on its own which fields a route may touch.

use std::sync::Arc;

use platform::password::RawPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_id::AccountId, account_password::AccountPassword, email::Email, role::Role,
};
use crate::error::{AuthError, AuthResult};

/// Fields an update operation may touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateField {
    FirstName,
    LastName,
    Email,
    Password,
    Role,
}

/// Allow-list for self-service profile edits
pub const SELF_EDIT_FIELDS: &[UpdateField] = &[
    UpdateField::FirstName,
    UpdateField::LastName,
    UpdateField::Email,
    UpdateField::Password,
];

/// Allow-list for admin-driven edits (role changes only)
pub const ADMIN_EDIT_FIELDS: &[UpdateField] = &[UpdateField::Role];

/// Caller-provided partial update
#[derive(Debug, Clone, Default)]
pub struct AccountPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

/// The surviving, validated fields of a filtered patch
///
/// A plaintext password never survives filtering; it leaves as a digest.
#[derive(Debug)]
pub struct SanitizedPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<Email>,
    pub password_hash: Option<AccountPassword>,
    pub role: Option<Role>,
}

impl SanitizedPatch {
    fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.password_hash.is_none()
            && self.role.is_none()
    }
}

/// Filter a patch down to its allow-listed fields
///
/// Absent fields and fields outside `allowed` are dropped silently. When
/// nothing survives the update is rejected with `EmptyUpdate`, which the
/// boundary renders as "operation not permitted" rather than a validation
/// error, so responses do not reveal which fields a route accepts.
pub fn sanitize_patch(
    patch: AccountPatch,
    allowed: &[UpdateField],
    pepper: Option<&[u8]>,
) -> AuthResult<SanitizedPatch> {
    let keep = |field: UpdateField| allowed.contains(&field);

    let email = match patch.email.filter(|_| keep(UpdateField::Email)) {
        Some(raw) => {
            Some(Email::new(raw).map_err(|e| AuthError::Validation(e.message().to_string()))?)
        }
        None => None,
    };

    let password_hash = match patch.password.filter(|_| keep(UpdateField::Password)) {
        Some(plain) => {
            let raw = RawPassword::new(plain)?;
            Some(AccountPassword::from_raw(&raw, pepper)?)
        }
        None => None,
    };

    let sanitized = SanitizedPatch {
        first_name: patch.first_name.filter(|_| keep(UpdateField::FirstName)),
        last_name: patch.last_name.filter(|_| keep(UpdateField::LastName)),
        email,
        password_hash,
        role: patch.role.filter(|_| keep(UpdateField::Role)),
    };

    if sanitized.is_empty() {
        return Err(AuthError::EmptyUpdate);
    }

    Ok(sanitized)
}

/// Update account use case
pub struct UpdateAccountUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> UpdateAccountUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Apply an allow-list-filtered patch to an account
    pub async fn execute(
        &self,
        account_id: &AccountId,
        patch: AccountPatch,
        allowed: &[UpdateField],
    ) -> AuthResult<Account> {
        let sanitized = sanitize_patch(patch, allowed, self.config.pepper())?;

        let mut account = self
            .repo
            .find_by_id(account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        if let Some(first_name) = sanitized.first_name {
            account.set_first_name(first_name);
        }
        if let Some(last_name) = sanitized.last_name {
            account.set_last_name(last_name);
        }
        if let Some(email) = sanitized.email {
            account.set_email(email);
        }
        if let Some(password_hash) = sanitized.password_hash {
            account.set_password(password_hash);
        }
        if let Some(role) = sanitized.role {
            account.set_role(role);
        }

        self.repo.update(&account).await?;

        tracing::info!(
            account_id = %account.account_id,
            "Account updated"
        );

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_keeps_allowed_field_only() {
        let patch = AccountPatch {
            role: Some(Role::Admin),
            email: Some("probe@example.com".to_string()),
            ..Default::default()
        };

        let sanitized = sanitize_patch(patch, ADMIN_EDIT_FIELDS, None).unwrap();

        assert_eq!(sanitized.role, Some(Role::Admin));
        assert!(sanitized.email.is_none());
        assert!(sanitized.first_name.is_none());
    }

    #[test]
    fn test_empty_patch_rejected() {
        let result = sanitize_patch(AccountPatch::default(), ADMIN_EDIT_FIELDS, None);
        assert!(matches!(result, Err(AuthError::EmptyUpdate)));
    }

    #[test]
    fn test_patch_with_only_disallowed_fields_rejected() {
        let patch = AccountPatch {
            first_name: Some("Mallory".to_string()),
            ..Default::default()
        };
        let result = sanitize_patch(patch, ADMIN_EDIT_FIELDS, None);
        assert!(matches!(result, Err(AuthError::EmptyUpdate)));
    }

    #[test]
    fn test_role_dropped_from_self_service_edit() {
        // A user smuggling a role into a profile edit must not escalate
        let patch = AccountPatch {
            first_name: Some("Eve".to_string()),
            role: Some(Role::Admin),
            ..Default::default()
        };

        let sanitized = sanitize_patch(patch, SELF_EDIT_FIELDS, None).unwrap();

        assert_eq!(sanitized.first_name.as_deref(), Some("Eve"));
        assert!(sanitized.role.is_none());
    }

    #[test]
    fn test_password_leaves_as_digest() {
        let patch = AccountPatch {
            password: Some("brand new password".to_string()),
            ..Default::default()
        };

        let sanitized = sanitize_patch(patch, SELF_EDIT_FIELDS, None).unwrap();

        let digest = sanitized.password_hash.expect("password should survive");
        let raw = RawPassword::new("brand new password".to_string()).unwrap();
        assert!(digest.verify(&raw, None));
        assert!(digest.as_phc_string().starts_with("$argon2"));
    }

    #[test]
    fn test_email_revalidated() {
        let patch = AccountPatch {
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        let result = sanitize_patch(patch, SELF_EDIT_FIELDS, None);
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }
}
