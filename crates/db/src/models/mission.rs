//! Mission models and DTOs.

use serde::{Deserialize, Serialize};
use spycat_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::models::cat::Cat;
use crate::models::target::{CreateTarget, Target};

/// A row from the `missions` table.
///
/// `cat` and `targets` are not columns; the single-mission read path
/// populates them with secondary fetches. List responses leave them empty.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mission {
    pub id: DbId,
    pub name: String,
    /// Assigned cat id; `0` means unassigned.
    pub cat_id: DbId,
    #[sqlx(skip)]
    pub cat: Option<Cat>,
    #[sqlx(skip)]
    pub targets: Vec<Target>,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a mission together with its initial targets.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMission {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub cat_id: DbId,
    #[validate(nested, length(min = 1, max = 3, message = "a mission requires 1 to 3 targets"))]
    pub targets: Vec<CreateTarget>,
}

/// DTO for toggling mission completion.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMission {
    #[serde(default)]
    pub completed: bool,
}

/// DTO for assigning a cat to a mission. `cat_id` 0 unassigns.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignCat {
    pub cat_id: DbId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(name: &str) -> CreateTarget {
        CreateTarget {
            name: name.to_string(),
            country: "FR".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn one_to_three_targets_pass() {
        for count in 1..=3 {
            let input = CreateMission {
                name: "M1".to_string(),
                cat_id: 1,
                targets: (0..count).map(|i| target(&format!("T{i}"))).collect(),
            };
            assert!(input.validate().is_ok(), "{count} targets should be valid");
        }
    }

    #[test]
    fn zero_targets_are_rejected() {
        let input = CreateMission {
            name: "M1".to_string(),
            cat_id: 1,
            targets: vec![],
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn four_targets_are_rejected() {
        let input = CreateMission {
            name: "M1".to_string(),
            cat_id: 1,
            targets: (0..4).map(|i| target(&format!("T{i}"))).collect(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn nested_target_validation_runs() {
        let input = CreateMission {
            name: "M1".to_string(),
            cat_id: 1,
            targets: vec![CreateTarget {
                name: String::new(),
                country: "FR".to_string(),
                notes: String::new(),
            }],
        };
        assert!(input.validate().is_err());
    }
}
