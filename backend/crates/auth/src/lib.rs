//! Auth (Authentication & Accounts) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, routers, guard middleware
//!
//! ## Features
//! - Account signup/login with email + password
//! - Stateless bearer tokens carrying id, email, and role claims
//! - Role-based route access (User, Editor, Admin)
//! - Allow-list-filtered partial account updates
//!
//! ## Security Model
//! - Passwords hashed with salted Argon2id, optional pepper
//! - Unknown email and wrong password are indistinguishable to callers
//! - Role claims are trusted until token expiry (no per-request re-read);
//!   the short token lifetime bounds the staleness window

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::{AccessClaims, TokenService};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAccountRepository;
pub use presentation::router::{account_router, auth_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
