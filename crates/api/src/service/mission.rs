//! Mission and target lifecycle.
//!
//! This is the invariant engine: one cat per mission, 1-3 targets per
//! mission, completed entities are locked, assigned missions cannot be
//! deleted.

use std::sync::Arc;

use spycat_core::error::CoreError;
use spycat_core::types::DbId;
use spycat_db::models::mission::{CreateMission, Mission};
use spycat_db::models::target::{CreateTarget, Target, UpdateTarget};
use spycat_db::repositories::{CatRepository, MissionRepository, TargetRepository};

use crate::error::{AppError, AppResult};

/// A mission holds at most this many targets, counting both creation-time
/// targets and later additions.
pub const MAX_TARGETS_PER_MISSION: usize = 3;

pub struct MissionService {
    missions: Arc<dyn MissionRepository>,
    targets: Arc<dyn TargetRepository>,
    cats: Arc<dyn CatRepository>,
}

impl MissionService {
    pub fn new(
        missions: Arc<dyn MissionRepository>,
        targets: Arc<dyn TargetRepository>,
        cats: Arc<dyn CatRepository>,
    ) -> Self {
        Self {
            missions,
            targets,
            cats,
        }
    }

    /// Create a mission together with its 1-3 targets.
    ///
    /// The assigned cat must exist at creation time. The mission row and its
    /// target rows are written in submission order inside one transaction.
    pub async fn create(&self, input: &CreateMission) -> AppResult<Mission> {
        self.cats
            .find_by_id(input.cat_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Cat",
                id: input.cat_id,
            }))?;

        Ok(self.missions.create_with_targets(input).await?)
    }

    /// Toggle the completion flag. There is no check that the mission's
    /// targets are resolved.
    pub async fn update_completion(&self, id: DbId, completed: bool) -> AppResult<Mission> {
        self.missions
            .set_completed(id, completed)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Mission",
                id,
            }))
    }

    /// Delete a mission. Only unassigned missions may be deleted; targets of
    /// a deleted mission are left in place.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        let mission = self.find_mission(id).await?;
        if mission.cat_id != 0 {
            return Err(AppError::Core(CoreError::MissionAssigned { id }));
        }
        self.missions.delete(id).await?;
        Ok(())
    }

    /// Reassign a mission to a cat, overwriting any previous assignment.
    /// `cat_id` 0 unassigns.
    ///
    /// Unlike creation, reassignment does not check that the cat exists;
    /// a stale id simply surfaces as a null cat on reads.
    pub async fn assign_cat(&self, mission_id: DbId, cat_id: DbId) -> AppResult<()> {
        if self.missions.assign_cat(mission_id, cat_id).await? {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::NotFound {
                entity: "Mission",
                id: mission_id,
            }))
        }
    }

    /// Fetch a mission with its cat and targets populated.
    pub async fn get_by_id(&self, id: DbId) -> AppResult<Mission> {
        let mut mission = self.find_mission(id).await?;
        mission.targets = self.targets.list_by_mission(id).await?;
        if mission.cat_id != 0 {
            // A dangling reference (cat deleted after assignment) yields None.
            mission.cat = self.cats.find_by_id(mission.cat_id).await?;
        }
        Ok(mission)
    }

    /// List all missions, without their sub-objects.
    pub async fn list(&self) -> AppResult<Vec<Mission>> {
        Ok(self.missions.list().await?)
    }

    /// Add a target to an existing, uncompleted mission.
    pub async fn add_target(&self, mission_id: DbId, input: &CreateTarget) -> AppResult<Target> {
        let mission = self.find_mission(mission_id).await?;
        if mission.completed {
            return Err(AppError::Core(CoreError::MissionCompleted { id: mission_id }));
        }

        // Fresh read: the creation-time count may be stale.
        let existing = self.targets.list_by_mission(mission_id).await?;
        if existing.len() >= MAX_TARGETS_PER_MISSION {
            return Err(AppError::Core(CoreError::TargetLimitExceeded {
                id: mission_id,
                limit: MAX_TARGETS_PER_MISSION,
            }));
        }

        Ok(self.targets.create(mission_id, input).await?)
    }

    /// Delete a target. Completed targets cannot be deleted.
    pub async fn delete_target(&self, target_id: DbId) -> AppResult<()> {
        let target = self.find_target(target_id).await?;
        if target.completed {
            return Err(AppError::Core(CoreError::TargetCompleted { id: target_id }));
        }
        self.targets.delete(target_id).await?;
        Ok(())
    }

    /// Overwrite a target's notes and completion flag together.
    ///
    /// Once the target or its parent mission is completed the target is
    /// locked for good: even `completed = false` is rejected.
    pub async fn update_target(&self, target_id: DbId, input: &UpdateTarget) -> AppResult<Target> {
        let target = self.find_target(target_id).await?;
        let mission = self.find_mission(target.mission_id).await?;
        if mission.completed || target.completed {
            return Err(AppError::Core(CoreError::TargetLocked { id: target_id }));
        }

        self.targets
            .update(target_id, input)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Target",
                id: target_id,
            }))
    }

    async fn find_mission(&self, id: DbId) -> AppResult<Mission> {
        self.missions
            .find_by_id(id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Mission",
                id,
            }))
    }

    async fn find_target(&self, id: DbId) -> AppResult<Target> {
        self.targets
            .find_by_id(id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Target",
                id,
            }))
    }
}
