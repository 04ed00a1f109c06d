use crate::types::DbId;

/// Business-rule violations and lookup misses raised by the lifecycle
/// services. The HTTP layer owns the mapping to status codes; nothing in
/// here knows about transports.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("invalid cat breed: {0}")]
    InvalidBreed(String),

    #[error("cannot delete mission {id}: mission is assigned to a cat")]
    MissionAssigned { id: DbId },

    #[error("cannot add target to completed mission {id}")]
    MissionCompleted { id: DbId },

    #[error("cannot delete completed target {id}")]
    TargetCompleted { id: DbId },

    #[error("cannot update target {id}: target or its mission is completed")]
    TargetLocked { id: DbId },

    #[error("mission {id} already has the maximum of {limit} targets")]
    TargetLimitExceeded { id: DbId, limit: usize },

    #[error("validation failed: {0}")]
    Validation(String),
}
