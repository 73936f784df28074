//! Create Dog Use Case
//!
//! Stores the uploaded image first, then persists the dog carrying the
//! returned locator.

use std::sync::Arc;

use platform::storage::ObjectStore;

use crate::application::image::{ImageUpload, object_key};
use crate::domain::entity::dog::Dog;
use crate::domain::repository::DogRepository;
use crate::domain::value_object::dog_sex::DogSex;
use crate::error::DogResult;

/// Create dog input
pub struct CreateDogInput {
    pub name: String,
    pub sex: DogSex,
    pub breed: String,
    pub description: String,
    pub image: ImageUpload,
}

/// Create dog use case
pub struct CreateDogUseCase<R, S>
where
    R: DogRepository,
    S: ObjectStore,
{
    repo: Arc<R>,
    store: Arc<S>,
}

impl<R, S> CreateDogUseCase<R, S>
where
    R: DogRepository,
    S: ObjectStore,
{
    pub fn new(repo: Arc<R>, store: Arc<S>) -> Self {
        Self { repo, store }
    }

    pub async fn execute(&self, input: CreateDogInput) -> DogResult<Dog> {
        let key = object_key(&input.image.file_name);
        let locator = self
            .store
            .store(&key, input.image.bytes, &input.image.content_type)
            .await?;

        let dog = Dog::new(
            input.name,
            input.sex,
            input.breed,
            input.description,
            locator,
        );
        self.repo.create(&dog).await?;

        tracing::info!(dog_id = %dog.dog_id, "Dog created");

        Ok(dog)
    }
}
