//! Dogs (Adoption Catalog) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Dog entity, value objects, repository trait
//! - `application/` - Create/update/delete use cases over repository + storage
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Public, paginated catalog reads
//! - Editor/admin-gated create, update, delete
//! - Image upload to object storage; dogs carry opaque locators only

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{DogError, DogResult};
pub use infra::postgres::PgDogRepository;
pub use presentation::router::dog_router;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
