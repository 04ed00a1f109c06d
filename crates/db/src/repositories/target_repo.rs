//! Repository for the `targets` table.

use async_trait::async_trait;
use spycat_core::types::DbId;
use sqlx::PgPool;

use crate::models::target::{CreateTarget, Target, UpdateTarget};

/// Column list for `targets` queries. Shared with the mission repository,
/// which inserts targets inside the mission-creation transaction.
pub(crate) const TARGET_COLUMNS: &str =
    "id, mission_id, name, country, notes, completed, created_at, updated_at";

/// Data-access contract for targets.
#[async_trait]
pub trait TargetRepository: Send + Sync {
    /// Insert a target owned by the given mission.
    async fn create(&self, mission_id: DbId, dto: &CreateTarget) -> Result<Target, sqlx::Error>;

    /// Overwrite notes and completion together, bumping `updated_at`.
    /// Returns `None` if the target does not exist.
    async fn update(&self, id: DbId, dto: &UpdateTarget) -> Result<Option<Target>, sqlx::Error>;

    /// Delete a target by id. Returns `true` if a row was deleted.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Target>, sqlx::Error>;

    /// List a mission's targets in ascending id order.
    async fn list_by_mission(&self, mission_id: DbId) -> Result<Vec<Target>, sqlx::Error>;
}

/// PostgreSQL-backed [`TargetRepository`].
pub struct PgTargetRepo {
    pool: PgPool,
}

impl PgTargetRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TargetRepository for PgTargetRepo {
    async fn create(&self, mission_id: DbId, dto: &CreateTarget) -> Result<Target, sqlx::Error> {
        let query = format!(
            "INSERT INTO targets (mission_id, name, country, notes) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {TARGET_COLUMNS}"
        );
        sqlx::query_as::<_, Target>(&query)
            .bind(mission_id)
            .bind(&dto.name)
            .bind(&dto.country)
            .bind(&dto.notes)
            .fetch_one(&self.pool)
            .await
    }

    async fn update(&self, id: DbId, dto: &UpdateTarget) -> Result<Option<Target>, sqlx::Error> {
        let query = format!(
            "UPDATE targets SET notes = $2, completed = $3, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {TARGET_COLUMNS}"
        );
        sqlx::query_as::<_, Target>(&query)
            .bind(id)
            .bind(&dto.notes)
            .bind(dto.completed)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM targets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Target>, sqlx::Error> {
        let query = format!("SELECT {TARGET_COLUMNS} FROM targets WHERE id = $1");
        sqlx::query_as::<_, Target>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list_by_mission(&self, mission_id: DbId) -> Result<Vec<Target>, sqlx::Error> {
        let query = format!("SELECT {TARGET_COLUMNS} FROM targets WHERE mission_id = $1 ORDER BY id");
        sqlx::query_as::<_, Target>(&query)
            .bind(mission_id)
            .fetch_all(&self.pool)
            .await
    }
}
