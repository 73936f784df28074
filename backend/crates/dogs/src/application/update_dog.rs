//! Update Dog Use Case
//!
//! Applies a partial field patch and/or an image replacement. When an
//! image arrives, the previous one leaves storage before its replacement
//! is uploaded, so a dog never references two stored objects at once.

use std::sync::Arc;

use platform::storage::ObjectStore;

use crate::application::image::{ImageUpload, object_key};
use crate::domain::entity::dog::Dog;
use crate::domain::repository::DogRepository;
use crate::domain::value_object::{dog_id::DogId, dog_sex::DogSex};
use crate::error::{DogError, DogResult};

/// Partial dog field update
#[derive(Debug, Clone, Default)]
pub struct DogPatch {
    pub name: Option<String>,
    pub sex: Option<DogSex>,
    pub breed: Option<String>,
    pub description: Option<String>,
}

impl DogPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.sex.is_none()
            && self.breed.is_none()
            && self.description.is_none()
    }
}

/// Update dog input
pub struct UpdateDogInput {
    pub patch: DogPatch,
    pub image: Option<ImageUpload>,
}

/// Update dog use case
pub struct UpdateDogUseCase<R, S>
where
    R: DogRepository,
    S: ObjectStore,
{
    repo: Arc<R>,
    store: Arc<S>,
}

impl<R, S> UpdateDogUseCase<R, S>
where
    R: DogRepository,
    S: ObjectStore,
{
    pub fn new(repo: Arc<R>, store: Arc<S>) -> Self {
        Self { repo, store }
    }

    pub async fn execute(&self, dog_id: &DogId, input: UpdateDogInput) -> DogResult<Dog> {
        if input.image.is_none() && input.patch.is_empty() {
            return Err(DogError::NothingToUpdate);
        }

        let mut dog = self
            .repo
            .find_by_id(dog_id)
            .await?
            .ok_or(DogError::DogNotFound)?;

        if let Some(image) = input.image {
            self.store.remove(&dog.img_url).await?;

            let key = object_key(&image.file_name);
            let locator = self
                .store
                .store(&key, image.bytes, &image.content_type)
                .await?;
            dog.set_img_url(locator);
        }

        let patch = input.patch;
        if let Some(name) = patch.name {
            dog.set_name(name);
        }
        if let Some(sex) = patch.sex {
            dog.set_sex(sex);
        }
        if let Some(breed) = patch.breed {
            dog.set_breed(breed);
        }
        if let Some(description) = patch.description {
            dog.set_description(description);
        }

        self.repo.update(&dog).await?;

        tracing::info!(dog_id = %dog.dog_id, "Dog updated");

        Ok(dog)
    }
}
