//! Target models and DTOs.

use serde::{Deserialize, Serialize};
use spycat_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `targets` table. Owned by exactly one mission.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Target {
    pub id: DbId,
    pub mission_id: DbId,
    pub name: String,
    pub country: String,
    pub notes: String,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a target, standalone or as part of mission creation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTarget {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "country is required"))]
    pub country: String,
    #[serde(default)]
    pub notes: String,
}

/// DTO for updating a target.
///
/// Notes and completion are always overwritten together; omitted fields
/// fall back to their zero values.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTarget {
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notes_are_optional_in_create() {
        let input: CreateTarget =
            serde_json::from_str(r#"{"name": "T1", "country": "FR"}"#).unwrap();
        assert!(input.validate().is_ok());
        assert_eq!(input.notes, "");
    }

    #[test]
    fn empty_country_is_rejected() {
        let input = CreateTarget {
            name: "T1".to_string(),
            country: String::new(),
            notes: String::new(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn update_fields_default_to_zero_values() {
        let update: UpdateTarget = serde_json::from_str("{}").unwrap();
        assert_eq!(update.notes, "");
        assert!(!update.completed);
    }
}
