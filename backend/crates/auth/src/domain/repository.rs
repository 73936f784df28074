//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::pagination::PageParams;

use crate::domain::entity::account::Account;
use crate::domain::value_object::{account_id::AccountId, email::Email};
use crate::error::AuthResult;

/// Account repository trait
///
/// `Option` return values distinguish "not found" from a hard failure.
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Create a new account
    async fn create(&self, account: &Account) -> AuthResult<()>;

    /// Find account by ID
    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>>;

    /// Find account by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>>;

    /// List accounts with the total count
    async fn list(&self, page: &PageParams) -> AuthResult<(Vec<Account>, i64)>;

    /// Update account
    async fn update(&self, account: &Account) -> AuthResult<()>;

    /// Delete account; `false` when no such account existed
    async fn delete(&self, account_id: &AccountId) -> AuthResult<bool>;
}
