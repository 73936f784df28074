//! Sign Up Use Case
//!
//! Creates a new account.

use std::sync::Arc;

use platform::password::RawPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{account_password::AccountPassword, email::Email};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignUpUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<Account> {
        // Validate email
        let email = Email::new(input.email)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        // Check if email is taken. Not atomic with the create below; the
        // unique index on email catches the losing racer.
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)?;
        let password_hash = AccountPassword::from_raw(&raw_password, self.config.pepper())?;

        // Create and persist; signup always yields a plain User
        let account = Account::new(input.first_name, input.last_name, email, password_hash);
        self.repo.create(&account).await?;

        tracing::info!(
            account_id = %account.account_id,
            "Account signed up"
        );

        Ok(account)
    }
}
