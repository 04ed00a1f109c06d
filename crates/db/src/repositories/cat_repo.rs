//! Repository for the `cats` table.

use async_trait::async_trait;
use spycat_core::types::DbId;
use sqlx::PgPool;

use crate::models::cat::{Cat, CreateCat};

/// Column list for `cats` queries.
const CAT_COLUMNS: &str = "id, name, years_experience, breed, salary, created_at, updated_at";

/// Data-access contract for cats.
#[async_trait]
pub trait CatRepository: Send + Sync {
    /// Insert a new cat row, returning it with generated id and timestamps.
    async fn create(&self, dto: &CreateCat) -> Result<Cat, sqlx::Error>;

    /// Update only the salary, bumping `updated_at`. Returns `None` if the
    /// cat does not exist.
    async fn update_salary(&self, id: DbId, salary: f64) -> Result<Option<Cat>, sqlx::Error>;

    /// Delete a cat by id. Returns `true` if a row was deleted.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Cat>, sqlx::Error>;

    /// List all cats in ascending id order.
    async fn list(&self) -> Result<Vec<Cat>, sqlx::Error>;
}

/// PostgreSQL-backed [`CatRepository`].
pub struct PgCatRepo {
    pool: PgPool,
}

impl PgCatRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatRepository for PgCatRepo {
    async fn create(&self, dto: &CreateCat) -> Result<Cat, sqlx::Error> {
        let query = format!(
            "INSERT INTO cats (name, years_experience, breed, salary) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {CAT_COLUMNS}"
        );
        sqlx::query_as::<_, Cat>(&query)
            .bind(&dto.name)
            .bind(dto.years_experience)
            .bind(&dto.breed)
            .bind(dto.salary)
            .fetch_one(&self.pool)
            .await
    }

    async fn update_salary(&self, id: DbId, salary: f64) -> Result<Option<Cat>, sqlx::Error> {
        let query = format!(
            "UPDATE cats SET salary = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {CAT_COLUMNS}"
        );
        sqlx::query_as::<_, Cat>(&query)
            .bind(id)
            .bind(salary)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cats WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Cat>, sqlx::Error> {
        let query = format!("SELECT {CAT_COLUMNS} FROM cats WHERE id = $1");
        sqlx::query_as::<_, Cat>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list(&self) -> Result<Vec<Cat>, sqlx::Error> {
        let query = format!("SELECT {CAT_COLUMNS} FROM cats ORDER BY id");
        sqlx::query_as::<_, Cat>(&query).fetch_all(&self.pool).await
    }
}
