//! Application Layer
//!
//! Use cases and application services.

pub mod create_dog;
pub mod delete_dog;
pub mod image;
pub mod update_dog;

// Re-exports
pub use create_dog::{CreateDogInput, CreateDogUseCase};
pub use delete_dog::DeleteDogUseCase;
pub use image::{ImageUpload, object_key};
pub use update_dog::{DogPatch, UpdateDogInput, UpdateDogUseCase};
