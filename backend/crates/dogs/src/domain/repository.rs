//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::pagination::PageParams;

use crate::domain::entity::dog::Dog;
use crate::domain::value_object::dog_id::DogId;
use crate::error::DogResult;

/// Dog repository trait
///
/// `Option` return values distinguish "not found" from a hard failure.
#[trait_variant::make(DogRepository: Send)]
pub trait LocalDogRepository {
    /// Create a new dog
    async fn create(&self, dog: &Dog) -> DogResult<()>;

    /// Find dog by ID
    async fn find_by_id(&self, dog_id: &DogId) -> DogResult<Option<Dog>>;

    /// List dogs with the total count
    async fn list(&self, page: &PageParams) -> DogResult<(Vec<Dog>, i64)>;

    /// Update dog
    async fn update(&self, dog: &Dog) -> DogResult<()>;

    /// Delete dog; `false` when no such dog existed
    async fn delete(&self, dog_id: &DogId) -> DogResult<bool>;
}
