//! Dog Entity
//!
//! A dog listed for adoption. The image itself lives in object storage;
//! the entity carries only the opaque locator.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{dog_id::DogId, dog_sex::DogSex};

/// Dog entity
#[derive(Debug, Clone)]
pub struct Dog {
    /// Internal UUID identifier
    pub dog_id: DogId,
    /// Display name
    pub name: String,
    /// Sex (male, female)
    pub sex: DogSex,
    /// Breed
    pub breed: String,
    /// Locator of the stored image
    pub img_url: String,
    /// Free-form description
    pub description: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Dog {
    pub fn new(
        name: impl Into<String>,
        sex: DogSex,
        breed: impl Into<String>,
        description: impl Into<String>,
        img_url: impl Into<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            dog_id: DogId::new(),
            name: name.into(),
            sex,
            breed: breed.into(),
            img_url: img_url.into(),
            description: description.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    pub fn set_sex(&mut self, sex: DogSex) {
        self.sex = sex;
        self.updated_at = Utc::now();
    }

    pub fn set_breed(&mut self, breed: impl Into<String>) {
        self.breed = breed.into();
        self.updated_at = Utc::now();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.updated_at = Utc::now();
    }

    pub fn set_img_url(&mut self, img_url: impl Into<String>) {
        self.img_url = img_url.into();
        self.updated_at = Utc::now();
    }
}
