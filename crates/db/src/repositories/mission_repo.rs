//! Repository for the `missions` table.

use async_trait::async_trait;
use spycat_core::types::DbId;
use sqlx::PgPool;

use crate::models::mission::{CreateMission, Mission};
use crate::models::target::Target;
use crate::repositories::target_repo::TARGET_COLUMNS;

/// Column list for `missions` queries.
const MISSION_COLUMNS: &str = "id, name, cat_id, completed, created_at, updated_at";

/// Data-access contract for missions.
#[async_trait]
pub trait MissionRepository: Send + Sync {
    /// Insert a mission together with its initial targets, in submission
    /// order, as one atomic operation. Returns the mission with the created
    /// targets populated.
    async fn create_with_targets(&self, dto: &CreateMission) -> Result<Mission, sqlx::Error>;

    /// Set the completion flag, bumping `updated_at`. Returns `None` if the
    /// mission does not exist.
    async fn set_completed(&self, id: DbId, completed: bool)
        -> Result<Option<Mission>, sqlx::Error>;

    /// Overwrite the mission's cat reference. Returns `true` if the mission
    /// exists. `cat_id` 0 unassigns.
    async fn assign_cat(&self, mission_id: DbId, cat_id: DbId) -> Result<bool, sqlx::Error>;

    /// Delete a mission by id. Returns `true` if a row was deleted.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Mission>, sqlx::Error>;

    /// List all missions in ascending id order, without their sub-objects.
    async fn list(&self) -> Result<Vec<Mission>, sqlx::Error>;
}

/// PostgreSQL-backed [`MissionRepository`].
pub struct PgMissionRepo {
    pool: PgPool,
}

impl PgMissionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MissionRepository for PgMissionRepo {
    async fn create_with_targets(&self, dto: &CreateMission) -> Result<Mission, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let mission_query = format!(
            "INSERT INTO missions (name, cat_id) \
             VALUES ($1, $2) \
             RETURNING {MISSION_COLUMNS}"
        );
        let mut mission = sqlx::query_as::<_, Mission>(&mission_query)
            .bind(&dto.name)
            .bind(dto.cat_id)
            .fetch_one(&mut *tx)
            .await?;

        let target_query = format!(
            "INSERT INTO targets (mission_id, name, country, notes) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {TARGET_COLUMNS}"
        );
        for target in &dto.targets {
            let row = sqlx::query_as::<_, Target>(&target_query)
                .bind(mission.id)
                .bind(&target.name)
                .bind(&target.country)
                .bind(&target.notes)
                .fetch_one(&mut *tx)
                .await?;
            mission.targets.push(row);
        }

        tx.commit().await?;
        Ok(mission)
    }

    async fn set_completed(
        &self,
        id: DbId,
        completed: bool,
    ) -> Result<Option<Mission>, sqlx::Error> {
        let query = format!(
            "UPDATE missions SET completed = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {MISSION_COLUMNS}"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .bind(completed)
            .fetch_optional(&self.pool)
            .await
    }

    async fn assign_cat(&self, mission_id: DbId, cat_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE missions SET cat_id = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(mission_id)
        .bind(cat_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM missions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Mission>, sqlx::Error> {
        let query = format!("SELECT {MISSION_COLUMNS} FROM missions WHERE id = $1");
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list(&self) -> Result<Vec<Mission>, sqlx::Error> {
        let query = format!("SELECT {MISSION_COLUMNS} FROM missions ORDER BY id");
        sqlx::query_as::<_, Mission>(&query)
            .fetch_all(&self.pool)
            .await
    }
}
