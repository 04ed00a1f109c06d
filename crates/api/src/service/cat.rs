//! Cat lifecycle: hiring, salary review, retirement.

use std::sync::Arc;

use spycat_breeds::BreedValidator;
use spycat_core::error::CoreError;
use spycat_core::types::DbId;
use spycat_db::models::cat::{Cat, CreateCat};
use spycat_db::repositories::CatRepository;

use crate::error::{AppError, AppResult};

pub struct CatService {
    repo: Arc<dyn CatRepository>,
    breeds: Arc<dyn BreedValidator>,
}

impl CatService {
    pub fn new(repo: Arc<dyn CatRepository>, breeds: Arc<dyn BreedValidator>) -> Self {
        Self { repo, breeds }
    }

    /// Hire a new cat.
    ///
    /// The breed is checked against the external catalog before anything is
    /// written; an unknown breed aborts with no row persisted.
    pub async fn create(&self, input: &CreateCat) -> AppResult<Cat> {
        if !self.breeds.validate_breed(&input.breed).await? {
            return Err(AppError::Core(CoreError::InvalidBreed(input.breed.clone())));
        }
        Ok(self.repo.create(input).await?)
    }

    /// Update a cat's salary. Salary is the only mutable field.
    pub async fn update_salary(&self, id: DbId, salary: f64) -> AppResult<Cat> {
        self.repo
            .update_salary(id, salary)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Cat", id }))
    }

    /// Retire a cat. Deletion is unconditional: missions still pointing at
    /// this cat keep their dangling `cat_id`.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::NotFound { entity: "Cat", id }))
        }
    }

    pub async fn get_by_id(&self, id: DbId) -> AppResult<Cat> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Cat", id }))
    }

    pub async fn list(&self) -> AppResult<Vec<Cat>> {
        Ok(self.repo.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use chrono::Utc;
    use spycat_breeds::BreedApiError;

    use super::*;

    /// Minimal repo fake: records creates, everything else is empty.
    #[derive(Default)]
    struct RecordingRepo {
        created: Mutex<Vec<Cat>>,
    }

    #[async_trait]
    impl CatRepository for RecordingRepo {
        async fn create(&self, dto: &CreateCat) -> Result<Cat, sqlx::Error> {
            let now = Utc::now();
            let cat = Cat {
                id: 1,
                name: dto.name.clone(),
                years_experience: dto.years_experience,
                breed: dto.breed.clone(),
                salary: dto.salary,
                created_at: now,
                updated_at: now,
            };
            self.created.lock().unwrap().push(cat.clone());
            Ok(cat)
        }

        async fn update_salary(&self, _: DbId, _: f64) -> Result<Option<Cat>, sqlx::Error> {
            Ok(None)
        }

        async fn delete(&self, _: DbId) -> Result<bool, sqlx::Error> {
            Ok(false)
        }

        async fn find_by_id(&self, _: DbId) -> Result<Option<Cat>, sqlx::Error> {
            Ok(None)
        }

        async fn list(&self) -> Result<Vec<Cat>, sqlx::Error> {
            Ok(Vec::new())
        }
    }

    struct FixedCatalog(&'static [&'static str]);

    #[async_trait]
    impl BreedValidator for FixedCatalog {
        async fn validate_breed(&self, breed: &str) -> Result<bool, BreedApiError> {
            Ok(self.0.contains(&breed))
        }
    }

    fn service(repo: Arc<RecordingRepo>) -> CatService {
        CatService::new(repo, Arc::new(FixedCatalog(&["Persian"])))
    }

    fn tom(breed: &str) -> CreateCat {
        CreateCat {
            name: "Tom".to_string(),
            years_experience: 3,
            breed: breed.to_string(),
            salary: 1000.0,
        }
    }

    #[tokio::test]
    async fn unknown_breed_aborts_before_persisting() {
        let repo = Arc::new(RecordingRepo::default());
        let err = service(repo.clone()).create(&tom("Dragon Li")).await;

        assert_matches!(err, Err(AppError::Core(CoreError::InvalidBreed(b))) if b == "Dragon Li");
        assert!(repo.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn known_breed_is_persisted() {
        let repo = Arc::new(RecordingRepo::default());
        let cat = service(repo.clone()).create(&tom("Persian")).await.unwrap();

        assert_eq!(cat.breed, "Persian");
        assert_eq!(repo.created.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_cat_maps_to_not_found() {
        let repo = Arc::new(RecordingRepo::default());
        let svc = service(repo);

        assert_matches!(
            svc.update_salary(7, 100.0).await,
            Err(AppError::Core(CoreError::NotFound { entity: "Cat", id: 7 }))
        );
        assert_matches!(
            svc.delete(7).await,
            Err(AppError::Core(CoreError::NotFound { entity: "Cat", id: 7 }))
        );
    }
}
