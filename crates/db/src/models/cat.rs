//! Cat models and DTOs.

use serde::{Deserialize, Serialize};
use spycat_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `cats` table.
///
/// Only `salary` is mutable after creation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cat {
    pub id: DbId,
    pub name: String,
    pub years_experience: i32,
    pub breed: String,
    pub salary: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for hiring a new cat.
///
/// The breed is additionally checked against the external catalog by the
/// cat service; this type only enforces shape.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCat {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(range(min = 0))]
    pub years_experience: i32,
    #[validate(length(min = 1, message = "breed is required"))]
    pub breed: String,
    #[validate(range(min = 0.0))]
    pub salary: f64,
}

/// DTO for a salary review.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCatSalary {
    #[validate(range(min = 0.0))]
    pub salary: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateCat {
        CreateCat {
            name: "Tom".to_string(),
            years_experience: 3,
            breed: "Persian".to_string(),
            salary: 1000.0,
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut input = valid_create();
        input.name.clear();
        assert!(input.validate().is_err());
    }

    #[test]
    fn negative_experience_is_rejected() {
        let mut input = valid_create();
        input.years_experience = -1;
        assert!(input.validate().is_err());
    }

    #[test]
    fn negative_salary_is_rejected() {
        let mut input = valid_create();
        input.salary = -0.01;
        assert!(input.validate().is_err());

        let update = UpdateCatSalary { salary: -500.0 };
        assert!(update.validate().is_err());
    }

    #[test]
    fn zero_salary_is_allowed() {
        let update = UpdateCatSalary { salary: 0.0 };
        assert!(update.validate().is_ok());
    }
}
