//! Cross-module tests for the dogs crate
//!
//! Exercises the catalog use cases against an in-memory repository and an
//! in-memory object store, including the storage/database ordering rules.

use std::sync::{Arc, Mutex};

use kernel::pagination::PageParams;
use platform::storage::{ObjectStore, StorageError};

use crate::application::image::ImageUpload;
use crate::application::update_dog::{DogPatch, UpdateDogInput};
use crate::application::{CreateDogInput, CreateDogUseCase, DeleteDogUseCase, UpdateDogUseCase};
use crate::domain::entity::dog::Dog;
use crate::domain::repository::DogRepository;
use crate::domain::value_object::{dog_id::DogId, dog_sex::DogSex};
use crate::error::{DogError, DogResult};

// ============================================================================
// In-memory repository and store
// ============================================================================

#[derive(Clone, Default)]
struct MemoryDogRepository {
    dogs: Arc<Mutex<Vec<Dog>>>,
}

impl DogRepository for MemoryDogRepository {
    async fn create(&self, dog: &Dog) -> DogResult<()> {
        self.dogs.lock().unwrap().push(dog.clone());
        Ok(())
    }

    async fn find_by_id(&self, dog_id: &DogId) -> DogResult<Option<Dog>> {
        Ok(self
            .dogs
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.dog_id == *dog_id)
            .cloned())
    }

    async fn list(&self, page: &PageParams) -> DogResult<(Vec<Dog>, i64)> {
        let dogs = self.dogs.lock().unwrap();
        let total = dogs.len() as i64;

        let skip = page.offset().max(0) as usize;
        let window: Vec<Dog> = match page.limit() {
            Some(take) => dogs.iter().skip(skip).take(take as usize).cloned().collect(),
            None => dogs.iter().skip(skip).cloned().collect(),
        };

        Ok((window, total))
    }

    async fn update(&self, dog: &Dog) -> DogResult<()> {
        let mut dogs = self.dogs.lock().unwrap();
        match dogs.iter_mut().find(|d| d.dog_id == dog.dog_id) {
            Some(slot) => {
                *slot = dog.clone();
                Ok(())
            }
            None => Err(DogError::DogNotFound),
        }
    }

    async fn delete(&self, dog_id: &DogId) -> DogResult<bool> {
        let mut dogs = self.dogs.lock().unwrap();
        let before = dogs.len();
        dogs.retain(|d| d.dog_id != *dog_id);
        Ok(dogs.len() < before)
    }
}

/// Object store keeping locators in memory
#[derive(Clone, Default)]
struct MemoryObjectStore {
    objects: Arc<Mutex<Vec<String>>>,
}

impl MemoryObjectStore {
    fn locators(&self) -> Vec<String> {
        self.objects.lock().unwrap().clone()
    }
}

impl ObjectStore for MemoryObjectStore {
    async fn store(
        &self,
        key: &str,
        _bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, StorageError> {
        let locator = format!("mem://dogs/{key}");
        self.objects.lock().unwrap().push(locator.clone());
        Ok(locator)
    }

    async fn remove(&self, locator: &str) -> Result<(), StorageError> {
        let mut objects = self.objects.lock().unwrap();
        let before = objects.len();
        objects.retain(|l| l != locator);
        if objects.len() == before {
            return Err(StorageError::Delete(format!("unknown locator: {locator}")));
        }
        Ok(())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn image(file_name: &str) -> ImageUpload {
    ImageUpload {
        file_name: file_name.to_string(),
        content_type: "image/jpeg".to_string(),
        bytes: vec![0xFF, 0xD8, 0xFF],
    }
}

struct Harness {
    repo: Arc<MemoryDogRepository>,
    store: Arc<MemoryObjectStore>,
}

impl Harness {
    fn new() -> Self {
        Self {
            repo: Arc::new(MemoryDogRepository::default()),
            store: Arc::new(MemoryObjectStore::default()),
        }
    }

    async fn create_dog(&self, name: &str) -> Dog {
        CreateDogUseCase::new(self.repo.clone(), self.store.clone())
            .execute(CreateDogInput {
                name: name.to_string(),
                sex: DogSex::Male,
                breed: "Labrador".to_string(),
                description: "Friendly".to_string(),
                image: image("photo.jpg"),
            })
            .await
            .unwrap()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_create_stores_image_and_persists_locator() {
    let harness = Harness::new();

    let dog = harness.create_dog("Rex").await;

    assert_eq!(dog.name, "Rex");
    assert!(dog.img_url.starts_with("mem://dogs/"));
    assert!(dog.img_url.ends_with("-photo.jpg"));
    assert_eq!(harness.store.locators(), vec![dog.img_url.clone()]);

    let stored = harness.repo.find_by_id(&dog.dog_id).await.unwrap().unwrap();
    assert_eq!(stored.img_url, dog.img_url);
}

#[tokio::test]
async fn test_update_fields_without_image() {
    let harness = Harness::new();
    let dog = harness.create_dog("Rex").await;

    let use_case = UpdateDogUseCase::new(harness.repo.clone(), harness.store.clone());
    let updated = use_case
        .execute(
            &dog.dog_id,
            UpdateDogInput {
                patch: DogPatch {
                    name: Some("Max".to_string()),
                    sex: Some(DogSex::Female),
                    ..Default::default()
                },
                image: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Max");
    assert_eq!(updated.sex, DogSex::Female);
    assert_eq!(updated.breed, "Labrador"); // untouched
    assert_eq!(updated.img_url, dog.img_url); // image untouched
}

#[tokio::test]
async fn test_update_image_replaces_stored_object() {
    let harness = Harness::new();
    let dog = harness.create_dog("Rex").await;
    let old_locator = dog.img_url.clone();

    let use_case = UpdateDogUseCase::new(harness.repo.clone(), harness.store.clone());
    let updated = use_case
        .execute(
            &dog.dog_id,
            UpdateDogInput {
                patch: DogPatch::default(),
                image: Some(image("newer.jpg")),
            },
        )
        .await
        .unwrap();

    assert_ne!(updated.img_url, old_locator);
    assert!(updated.img_url.ends_with("-newer.jpg"));

    // Exactly one object remains, and it is the new one
    assert_eq!(harness.store.locators(), vec![updated.img_url.clone()]);
}

#[tokio::test]
async fn test_empty_update_rejected() {
    let harness = Harness::new();
    let dog = harness.create_dog("Rex").await;

    let use_case = UpdateDogUseCase::new(harness.repo.clone(), harness.store.clone());
    let result = use_case
        .execute(
            &dog.dog_id,
            UpdateDogInput {
                patch: DogPatch::default(),
                image: None,
            },
        )
        .await;

    assert!(matches!(result, Err(DogError::NothingToUpdate)));
}

#[tokio::test]
async fn test_update_unknown_dog() {
    let harness = Harness::new();

    let use_case = UpdateDogUseCase::new(harness.repo.clone(), harness.store.clone());
    let result = use_case
        .execute(
            &DogId::new(),
            UpdateDogInput {
                patch: DogPatch {
                    name: Some("Ghost".to_string()),
                    ..Default::default()
                },
                image: None,
            },
        )
        .await;

    assert!(matches!(result, Err(DogError::DogNotFound)));
}

#[tokio::test]
async fn test_delete_removes_image_then_row() {
    let harness = Harness::new();
    let dog = harness.create_dog("Rex").await;

    DeleteDogUseCase::new(harness.repo.clone(), harness.store.clone())
        .execute(&dog.dog_id)
        .await
        .unwrap();

    assert!(harness.store.locators().is_empty());
    assert!(harness.repo.find_by_id(&dog.dog_id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_unknown_dog() {
    let harness = Harness::new();

    let result = DeleteDogUseCase::new(harness.repo.clone(), harness.store.clone())
        .execute(&DogId::new())
        .await;

    assert!(matches!(result, Err(DogError::DogNotFound)));
}

#[tokio::test]
async fn test_list_pagination_window() {
    let harness = Harness::new();
    for name in ["A", "B", "C", "D", "E"] {
        harness.create_dog(name).await;
    }

    let page = PageParams {
        skip: Some(1),
        take: Some(2),
    };
    let (dogs, total) = harness.repo.list(&page).await.unwrap();

    assert_eq!(total, 5);
    assert_eq!(dogs.len(), 2);
    assert_eq!(dogs[0].name, "B");
    assert_eq!(dogs[1].name, "C");
}
