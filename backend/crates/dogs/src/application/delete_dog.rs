//! Delete Dog Use Case
//!
//! Removes the stored image, then the record.

use std::sync::Arc;

use platform::storage::ObjectStore;

use crate::domain::repository::DogRepository;
use crate::domain::value_object::dog_id::DogId;
use crate::error::{DogError, DogResult};

/// Delete dog use case
pub struct DeleteDogUseCase<R, S>
where
    R: DogRepository,
    S: ObjectStore,
{
    repo: Arc<R>,
    store: Arc<S>,
}

impl<R, S> DeleteDogUseCase<R, S>
where
    R: DogRepository,
    S: ObjectStore,
{
    pub fn new(repo: Arc<R>, store: Arc<S>) -> Self {
        Self { repo, store }
    }

    pub async fn execute(&self, dog_id: &DogId) -> DogResult<()> {
        let dog = self
            .repo
            .find_by_id(dog_id)
            .await?
            .ok_or(DogError::DogNotFound)?;

        self.store.remove(&dog.img_url).await?;
        self.repo.delete(dog_id).await?;

        tracing::info!(dog_id = %dog_id, "Dog deleted");

        Ok(())
    }
}
