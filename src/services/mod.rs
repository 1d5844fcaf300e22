//! Service layer - the operations controllers depend on.
//!
//! Every service is a [`RepositoryService`] forwarding each call to its repository
//! without touching arguments or results. Controllers hold the services as trait
//! objects so tests can substitute mocks.

mod repository_service;

#[cfg(test)]
pub mod mocks;

pub use repository_service::RepositoryService;

use crate::{
    entities::{owner, pet, pet_type, speciality, vet, visit},
    errors::Result,
    repositories::{
        SeaOrmOwnerRepository, SeaOrmPetRepository, SeaOrmPetTypeRepository,
        SeaOrmSpecialityRepository, SeaOrmVetRepository, SeaOrmVisitRepository,
    },
};
use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Basic create/read/delete operations offered to controllers.
#[async_trait]
pub trait CrudService: Send + Sync {
    /// The managed model type
    type Model: Send + Sync + 'static;

    /// Every stored model
    async fn find_all(&self) -> Result<Vec<Self::Model>>;

    /// The model with `id`, or `None` on a miss
    async fn find_by_id(&self, id: i64) -> Result<Option<Self::Model>>;

    /// Persists `entity` and returns the stored version
    async fn save(&self, entity: Self::Model) -> Result<Self::Model>;

    /// Removes `entity`
    async fn delete(&self, entity: Self::Model) -> Result<()>;

    /// Removes the model with `id`
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}

/// Owner operations
#[async_trait]
pub trait OwnerService: CrudService<Model = owner::Model> {
    /// First owner with exactly this last name
    async fn find_by_last_name(&self, last_name: &str) -> Result<Option<owner::Model>>;

    /// Owners whose last name matches a `LIKE` pattern such as `%Weston%`
    async fn find_all_by_last_name_like(&self, pattern: &str) -> Result<Vec<owner::Model>>;
}

/// Pet operations
#[async_trait]
pub trait PetService: CrudService<Model = pet::Model> {
    /// Pets of one owner
    async fn find_all_by_owner_id(&self, owner_id: i64) -> Result<Vec<pet::Model>>;
}

/// Visit operations
#[async_trait]
pub trait VisitService: CrudService<Model = visit::Model> {
    /// Visits of one pet
    async fn find_all_by_pet_id(&self, pet_id: i64) -> Result<Vec<visit::Model>>;
}

/// Vet operations
#[async_trait]
pub trait VetService: CrudService<Model = vet::Model> {
    /// Specialities of one vet
    async fn find_specialities(&self, vet_id: i64) -> Result<Vec<speciality::Model>>;

    /// Links a vet to a speciality
    async fn add_speciality(&self, vet_id: i64, speciality_id: i64) -> Result<()>;
}

/// Pet type operations
pub trait PetTypeService: CrudService<Model = pet_type::Model> {}

impl<T> PetTypeService for T where T: CrudService<Model = pet_type::Model> {}

/// Speciality operations
pub trait SpecialityService: CrudService<Model = speciality::Model> {}

impl<T> SpecialityService for T where T: CrudService<Model = speciality::Model> {}

/// The full set of services, shared by the web layer and bootstrap.
#[derive(Clone)]
pub struct Services {
    /// Owner service
    pub owners: Arc<dyn OwnerService>,
    /// Pet service
    pub pets: Arc<dyn PetService>,
    /// Pet type service
    pub pet_types: Arc<dyn PetTypeService>,
    /// Visit service
    pub visits: Arc<dyn VisitService>,
    /// Vet service
    pub vets: Arc<dyn VetService>,
    /// Speciality service
    pub specialities: Arc<dyn SpecialityService>,
}

impl Services {
    /// Wires every service to its `SeaORM` repository on a shared connection.
    #[must_use]
    pub fn sea_orm(db: &DatabaseConnection) -> Self {
        Self {
            owners: Arc::new(RepositoryService::new(SeaOrmOwnerRepository::new(
                db.clone(),
            ))),
            pets: Arc::new(RepositoryService::new(SeaOrmPetRepository::new(db.clone()))),
            pet_types: Arc::new(RepositoryService::new(SeaOrmPetTypeRepository::new(
                db.clone(),
            ))),
            visits: Arc::new(RepositoryService::new(SeaOrmVisitRepository::new(
                db.clone(),
            ))),
            vets: Arc::new(RepositoryService::new(SeaOrmVetRepository::new(db.clone()))),
            specialities: Arc::new(RepositoryService::new(SeaOrmSpecialityRepository::new(
                db.clone(),
            ))),
        }
    }
}
