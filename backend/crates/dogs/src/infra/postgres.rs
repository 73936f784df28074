//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::pagination::PageParams;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::dog::Dog;
use crate::domain::repository::DogRepository;
use crate::domain::value_object::{dog_id::DogId, dog_sex::DogSex};
use crate::error::{DogError, DogResult};

/// PostgreSQL-backed dog repository
#[derive(Clone)]
pub struct PgDogRepository {
    pool: PgPool,
}

impl PgDogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw database row for a dog
#[derive(sqlx::FromRow)]
struct DogRow {
    dog_id: Uuid,
    name: String,
    sex: String,
    breed: String,
    img_url: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DogRow {
    fn into_dog(self) -> DogResult<Dog> {
        let sex = DogSex::from_code(&self.sex)
            .ok_or_else(|| DogError::Internal(format!("Invalid sex code: {}", self.sex)))?;

        Ok(Dog {
            dog_id: DogId::from_uuid(self.dog_id),
            name: self.name,
            sex,
            breed: self.breed,
            img_url: self.img_url,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

const DOG_COLUMNS: &str = r#"
    dog_id,
    name,
    sex,
    breed,
    img_url,
    description,
    created_at,
    updated_at
"#;

impl DogRepository for PgDogRepository {
    async fn create(&self, dog: &Dog) -> DogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO dogs (
                dog_id,
                name,
                sex,
                breed,
                img_url,
                description,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(dog.dog_id.as_uuid())
        .bind(&dog.name)
        .bind(dog.sex.code())
        .bind(&dog.breed)
        .bind(&dog.img_url)
        .bind(&dog.description)
        .bind(dog.created_at)
        .bind(dog.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, dog_id: &DogId) -> DogResult<Option<Dog>> {
        let row = sqlx::query_as::<_, DogRow>(&format!(
            "SELECT {DOG_COLUMNS} FROM dogs WHERE dog_id = $1"
        ))
        .bind(dog_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_dog()).transpose()
    }

    async fn list(&self, page: &PageParams) -> DogResult<(Vec<Dog>, i64)> {
        let rows = sqlx::query_as::<_, DogRow>(&format!(
            r#"
            SELECT {DOG_COLUMNS}
            FROM dogs
            ORDER BY created_at
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dogs")
            .fetch_one(&self.pool)
            .await?;

        let dogs = rows
            .into_iter()
            .map(DogRow::into_dog)
            .collect::<DogResult<Vec<_>>>()?;

        Ok((dogs, total))
    }

    async fn update(&self, dog: &Dog) -> DogResult<()> {
        sqlx::query(
            r#"
            UPDATE dogs SET
                name = $2,
                sex = $3,
                breed = $4,
                img_url = $5,
                description = $6,
                updated_at = $7
            WHERE dog_id = $1
            "#,
        )
        .bind(dog.dog_id.as_uuid())
        .bind(&dog.name)
        .bind(dog.sex.code())
        .bind(&dog.breed)
        .bind(&dog.img_url)
        .bind(&dog.description)
        .bind(dog.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, dog_id: &DogId) -> DogResult<bool> {
        let deleted = sqlx::query("DELETE FROM dogs WHERE dog_id = $1")
            .bind(dog_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}
