//! mockall doubles for the service traits, used by controller tests.

use super::{CrudService, OwnerService, PetService, VetService, VisitService};
use crate::{
    entities::{owner, pet, pet_type, speciality, vet, visit},
    errors::Result,
};
use async_trait::async_trait;
use mockall::mock;

mock! {
    pub OwnerSvc {}

    #[async_trait]
    impl CrudService for OwnerSvc {
        type Model = owner::Model;

        async fn find_all(&self) -> Result<Vec<owner::Model>>;
        async fn find_by_id(&self, id: i64) -> Result<Option<owner::Model>>;
        async fn save(&self, entity: owner::Model) -> Result<owner::Model>;
        async fn delete(&self, entity: owner::Model) -> Result<()>;
        async fn delete_by_id(&self, id: i64) -> Result<()>;
    }

    #[async_trait]
    impl OwnerService for OwnerSvc {
        async fn find_by_last_name(&self, last_name: &str) -> Result<Option<owner::Model>>;
        async fn find_all_by_last_name_like(&self, pattern: &str) -> Result<Vec<owner::Model>>;
    }
}

mock! {
    pub PetSvc {}

    #[async_trait]
    impl CrudService for PetSvc {
        type Model = pet::Model;

        async fn find_all(&self) -> Result<Vec<pet::Model>>;
        async fn find_by_id(&self, id: i64) -> Result<Option<pet::Model>>;
        async fn save(&self, entity: pet::Model) -> Result<pet::Model>;
        async fn delete(&self, entity: pet::Model) -> Result<()>;
        async fn delete_by_id(&self, id: i64) -> Result<()>;
    }

    #[async_trait]
    impl PetService for PetSvc {
        async fn find_all_by_owner_id(&self, owner_id: i64) -> Result<Vec<pet::Model>>;
    }
}

mock! {
    pub VisitSvc {}

    #[async_trait]
    impl CrudService for VisitSvc {
        type Model = visit::Model;

        async fn find_all(&self) -> Result<Vec<visit::Model>>;
        async fn find_by_id(&self, id: i64) -> Result<Option<visit::Model>>;
        async fn save(&self, entity: visit::Model) -> Result<visit::Model>;
        async fn delete(&self, entity: visit::Model) -> Result<()>;
        async fn delete_by_id(&self, id: i64) -> Result<()>;
    }

    #[async_trait]
    impl VisitService for VisitSvc {
        async fn find_all_by_pet_id(&self, pet_id: i64) -> Result<Vec<visit::Model>>;
    }
}

mock! {
    pub PetTypeSvc {}

    #[async_trait]
    impl CrudService for PetTypeSvc {
        type Model = pet_type::Model;

        async fn find_all(&self) -> Result<Vec<pet_type::Model>>;
        async fn find_by_id(&self, id: i64) -> Result<Option<pet_type::Model>>;
        async fn save(&self, entity: pet_type::Model) -> Result<pet_type::Model>;
        async fn delete(&self, entity: pet_type::Model) -> Result<()>;
        async fn delete_by_id(&self, id: i64) -> Result<()>;
    }
}

mock! {
    pub VetSvc {}

    #[async_trait]
    impl CrudService for VetSvc {
        type Model = vet::Model;

        async fn find_all(&self) -> Result<Vec<vet::Model>>;
        async fn find_by_id(&self, id: i64) -> Result<Option<vet::Model>>;
        async fn save(&self, entity: vet::Model) -> Result<vet::Model>;
        async fn delete(&self, entity: vet::Model) -> Result<()>;
        async fn delete_by_id(&self, id: i64) -> Result<()>;
    }

    #[async_trait]
    impl VetService for VetSvc {
        async fn find_specialities(&self, vet_id: i64) -> Result<Vec<speciality::Model>>;
        async fn add_speciality(&self, vet_id: i64, speciality_id: i64) -> Result<()>;
    }
}
