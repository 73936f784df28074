//! Sign In Use Case
//!
//! Authenticates an account and issues an access token.

use std::sync::Arc;

use platform::password::RawPassword;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{email::Email, role::Role};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Signed bearer token
    pub access_token: String,
    /// Role at the time of issuance
    pub role: Role,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<R> SignInUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            repo,
            tokens,
            config,
        }
    }

    /// Authenticate and issue a token.
    ///
    /// An unknown email and a wrong password both yield `InvalidCredentials`
    /// so callers cannot probe which addresses are registered.
    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let account = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !account
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = self.tokens.issue(&account)?;

        tracing::info!(
            account_id = %account.account_id,
            role = %account.role,
            "Account signed in"
        );

        Ok(SignInOutput {
            access_token,
            role: account.role,
        })
    }
}
