//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod sign_in;
pub mod sign_up;
pub mod token;
pub mod update_account;

// Re-exports
pub use config::AuthConfig;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpUseCase};
pub use token::{AccessClaims, TokenService};
pub use update_account::{
    ADMIN_EDIT_FIELDS, AccountPatch, SELF_EDIT_FIELDS, UpdateAccountUseCase, UpdateField,
    sanitize_patch,
};
