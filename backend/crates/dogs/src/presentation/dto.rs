//! API DTOs (Data Transfer Objects)

use serde::Serialize;

use crate::domain::entity::dog::Dog;
use crate::domain::value_object::dog_sex::DogSex;

/// Dog as exposed over HTTP
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DogResponse {
    pub id: String,
    pub name: String,
    pub sex: DogSex,
    pub breed: String,
    pub img_url: String,
    pub description: String,
}

impl From<&Dog> for DogResponse {
    fn from(dog: &Dog) -> Self {
        Self {
            id: dog.dog_id.to_string(),
            name: dog.name.clone(),
            sex: dog.sex,
            breed: dog.breed.clone(),
            img_url: dog.img_url.clone(),
            description: dog.description.clone(),
        }
    }
}

/// Paginated dog list response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DogListResponse {
    pub dogs: Vec<DogResponse>,
    pub total_dogs: i64,
}
