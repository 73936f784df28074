//! HTTP Handlers
//!
//! Create and update arrive as multipart forms: text fields for the dog's
//! attributes plus an optional `image` part carrying the file.

use axum::Json;
use axum::extract::multipart::{Field, Multipart};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::pagination::PageParams;
use platform::storage::ObjectStore;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::image::ImageUpload;
use crate::application::update_dog::{DogPatch, UpdateDogInput};
use crate::application::{CreateDogInput, CreateDogUseCase, DeleteDogUseCase, UpdateDogUseCase};
use crate::domain::repository::DogRepository;
use crate::domain::value_object::{dog_id::DogId, dog_sex::DogSex};
use crate::error::{DogError, DogResult};
use crate::presentation::dto::{DogListResponse, DogResponse};

/// Shared state for dog handlers
#[derive(Clone)]
pub struct DogAppState<R, S>
where
    R: DogRepository + Clone + Send + Sync + 'static,
    S: ObjectStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub store: Arc<S>,
}

// ============================================================================
// Queries (public)
// ============================================================================

/// GET /api/dog/all
pub async fn list_dogs<R, S>(
    State(state): State<DogAppState<R, S>>,
    Query(page): Query<PageParams>,
) -> DogResult<Json<DogListResponse>>
where
    R: DogRepository + Clone + Send + Sync + 'static,
    S: ObjectStore + Clone + Send + Sync + 'static,
{
    page.validate()
        .map_err(|e| DogError::Validation(e.message().to_string()))?;

    let (dogs, total_dogs) = state.repo.list(&page).await?;

    Ok(Json(DogListResponse {
        dogs: dogs.iter().map(DogResponse::from).collect(),
        total_dogs,
    }))
}

/// GET /api/dog/{id}
pub async fn get_dog<R, S>(
    State(state): State<DogAppState<R, S>>,
    Path(id): Path<Uuid>,
) -> DogResult<Json<DogResponse>>
where
    R: DogRepository + Clone + Send + Sync + 'static,
    S: ObjectStore + Clone + Send + Sync + 'static,
{
    let dog = state
        .repo
        .find_by_id(&DogId::from_uuid(id))
        .await?
        .ok_or(DogError::DogNotFound)?;

    Ok(Json(DogResponse::from(&dog)))
}

// ============================================================================
// Mutations (editor/admin)
// ============================================================================

/// POST /api/dog/create
pub async fn create_dog<R, S>(
    State(state): State<DogAppState<R, S>>,
    multipart: Multipart,
) -> DogResult<impl IntoResponse>
where
    R: DogRepository + Clone + Send + Sync + 'static,
    S: ObjectStore + Clone + Send + Sync + 'static,
{
    let form = DogForm::from_multipart(multipart).await?;

    let input = CreateDogInput {
        name: form.name.ok_or_else(|| required("name"))?,
        sex: form.sex.ok_or_else(|| required("sex"))?,
        breed: form.breed.ok_or_else(|| required("breed"))?,
        description: form.description.unwrap_or_default(),
        image: form.image.ok_or_else(|| required("image"))?,
    };

    let use_case = CreateDogUseCase::new(state.repo.clone(), state.store.clone());
    let dog = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(DogResponse::from(&dog))))
}

/// PATCH /api/dog/{id}
pub async fn update_dog<R, S>(
    State(state): State<DogAppState<R, S>>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> DogResult<Json<DogResponse>>
where
    R: DogRepository + Clone + Send + Sync + 'static,
    S: ObjectStore + Clone + Send + Sync + 'static,
{
    let form = DogForm::from_multipart(multipart).await?;

    let input = UpdateDogInput {
        patch: DogPatch {
            name: form.name,
            sex: form.sex,
            breed: form.breed,
            description: form.description,
        },
        image: form.image,
    };

    let use_case = UpdateDogUseCase::new(state.repo.clone(), state.store.clone());
    let dog = use_case.execute(&DogId::from_uuid(id), input).await?;

    Ok(Json(DogResponse::from(&dog)))
}

/// DELETE /api/dog/{id}
pub async fn delete_dog<R, S>(
    State(state): State<DogAppState<R, S>>,
    Path(id): Path<Uuid>,
) -> DogResult<StatusCode>
where
    R: DogRepository + Clone + Send + Sync + 'static,
    S: ObjectStore + Clone + Send + Sync + 'static,
{
    let use_case = DeleteDogUseCase::new(state.repo.clone(), state.store.clone());
    use_case.execute(&DogId::from_uuid(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Multipart form
// ============================================================================

/// Fields collected from a dog create/update form
#[derive(Default)]
struct DogForm {
    name: Option<String>,
    sex: Option<DogSex>,
    breed: Option<String>,
    description: Option<String>,
    image: Option<ImageUpload>,
}

impl DogForm {
    async fn from_multipart(mut multipart: Multipart) -> DogResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| DogError::Validation(e.to_string()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match name.as_str() {
                "name" => form.name = Some(text(field).await?),
                "sex" => {
                    let code = text(field).await?;
                    let sex = DogSex::from_code(&code)
                        .ok_or_else(|| DogError::Validation(format!("Invalid sex: {code}")))?;
                    form.sex = Some(sex);
                }
                "breed" => form.breed = Some(text(field).await?),
                "description" => form.description = Some(text(field).await?),
                "image" => {
                    let file_name = field.file_name().unwrap_or("image").to_string();
                    let content_type = field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_string();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| DogError::Validation(e.to_string()))?
                        .to_vec();

                    form.image = Some(ImageUpload {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
                // Unknown parts are dropped, mirroring the account patch filter
                _ => {}
            }
        }

        Ok(form)
    }
}

async fn text(field: Field<'_>) -> DogResult<String> {
    field
        .text()
        .await
        .map_err(|e| DogError::Validation(e.to_string()))
}

fn required(field: &str) -> DogError {
    DogError::Validation(format!("{field} is required"))
}
