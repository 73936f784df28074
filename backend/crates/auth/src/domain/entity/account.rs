//! Account Entity
//!
//! A registered user of the adoption service: immutable identity, mutable
//! profile fields, stored password digest, and a role.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    account_id::AccountId, account_password::AccountPassword, email::Email, role::Role,
};

/// Account entity
///
/// The password digest travels with the entity for verification but must
/// never reach a serialized response; the DTO layer enforces that.
#[derive(Debug, Clone)]
pub struct Account {
    /// Internal UUID identifier
    pub account_id: AccountId,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Email (unique, used for login)
    pub email: Email,
    /// Stored password digest
    pub password_hash: AccountPassword,
    /// Role (User, Editor, Admin)
    pub role: Role,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account; signup always starts at the User role
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: Email,
        password_hash: AccountPassword,
    ) -> Self {
        let now = Utc::now();

        Self {
            account_id: AccountId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email,
            password_hash,
            role: Role::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
        self.updated_at = Utc::now();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
        self.updated_at = Utc::now();
    }

    pub fn set_email(&mut self, email: Email) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    pub fn set_password(&mut self, password_hash: AccountPassword) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.updated_at = Utc::now();
    }
}
