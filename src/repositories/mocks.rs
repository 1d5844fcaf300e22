//! mockall doubles for the repository traits.

use super::{CrudRepository, OwnerRepository, VisitRepository};
use crate::{
    entities::{owner, speciality, visit},
    errors::Result,
};
use async_trait::async_trait;
use mockall::mock;

mock! {
    pub SpecialtyRepo {}

    #[async_trait]
    impl CrudRepository for SpecialtyRepo {
        type Model = speciality::Model;

        async fn find_all(&self) -> Result<Vec<speciality::Model>>;
        async fn find_by_id(&self, id: i64) -> Result<Option<speciality::Model>>;
        async fn save(&self, entity: speciality::Model) -> Result<speciality::Model>;
        async fn delete(&self, entity: speciality::Model) -> Result<()>;
        async fn delete_by_id(&self, id: i64) -> Result<()>;
    }
}

mock! {
    pub VisitRepo {}

    #[async_trait]
    impl CrudRepository for VisitRepo {
        type Model = visit::Model;

        async fn find_all(&self) -> Result<Vec<visit::Model>>;
        async fn find_by_id(&self, id: i64) -> Result<Option<visit::Model>>;
        async fn save(&self, entity: visit::Model) -> Result<visit::Model>;
        async fn delete(&self, entity: visit::Model) -> Result<()>;
        async fn delete_by_id(&self, id: i64) -> Result<()>;
    }

    #[async_trait]
    impl VisitRepository for VisitRepo {
        async fn find_all_by_pet_id(&self, pet_id: i64) -> Result<Vec<visit::Model>>;
    }
}

mock! {
    pub OwnerRepo {}

    #[async_trait]
    impl CrudRepository for OwnerRepo {
        type Model = owner::Model;

        async fn find_all(&self) -> Result<Vec<owner::Model>>;
        async fn find_by_id(&self, id: i64) -> Result<Option<owner::Model>>;
        async fn save(&self, entity: owner::Model) -> Result<owner::Model>;
        async fn delete(&self, entity: owner::Model) -> Result<()>;
        async fn delete_by_id(&self, id: i64) -> Result<()>;
    }

    #[async_trait]
    impl OwnerRepository for OwnerRepo {
        async fn find_by_last_name(&self, last_name: &str) -> Result<Option<owner::Model>>;
        async fn find_all_by_last_name_like(&self, pattern: &str) -> Result<Vec<owner::Model>>;
    }
}
