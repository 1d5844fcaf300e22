//! Persistence contracts.
//!
//! [`CrudRepository`] is the common shape every entity store offers; the
//! entity-specific traits add the few lookups the controllers need. The
//! `SeaOrm*` types implement them over a [`sea_orm::DatabaseConnection`].

mod owner;
mod pet;
mod pet_type;
mod speciality;
mod vet;
mod visit;

#[cfg(test)]
pub mod mocks;

pub use owner::SeaOrmOwnerRepository;
pub use pet::SeaOrmPetRepository;
pub use pet_type::SeaOrmPetTypeRepository;
pub use speciality::SeaOrmSpecialityRepository;
pub use vet::SeaOrmVetRepository;
pub use visit::SeaOrmVisitRepository;

use crate::{entities as model, errors::Result};
use async_trait::async_trait;

/// Basic create/read/delete operations keyed by the surrogate id.
#[async_trait]
pub trait CrudRepository: Send + Sync {
    /// The stored model type
    type Model: Send + Sync + 'static;

    /// Every stored model
    async fn find_all(&self) -> Result<Vec<Self::Model>>;

    /// The model with `id`, or `None` when nothing is stored under it
    async fn find_by_id(&self, id: i64) -> Result<Option<Self::Model>>;

    /// Inserts a new model (id `0`) or updates the stored one, returning what was persisted
    async fn save(&self, entity: Self::Model) -> Result<Self::Model>;

    /// Removes the stored copy of `entity`
    async fn delete(&self, entity: Self::Model) -> Result<()>;

    /// Removes the model with `id`; a missing id is not an error
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}

/// Owner store
#[async_trait]
pub trait OwnerRepository: CrudRepository<Model = model::owner::Model> {
    /// First owner with exactly this last name
    async fn find_by_last_name(&self, last_name: &str) -> Result<Option<model::owner::Model>>;

    /// Owners whose last name matches a SQL `LIKE` pattern such as `%Weston%`
    async fn find_all_by_last_name_like(&self, pattern: &str) -> Result<Vec<model::owner::Model>>;
}

/// Pet store
#[async_trait]
pub trait PetRepository: CrudRepository<Model = model::pet::Model> {
    /// Pets belonging to one owner, ordered by name
    async fn find_all_by_owner_id(&self, owner_id: i64) -> Result<Vec<model::pet::Model>>;
}

/// Visit store
#[async_trait]
pub trait VisitRepository: CrudRepository<Model = model::visit::Model> {
    /// Visits of one pet, oldest first
    async fn find_all_by_pet_id(&self, pet_id: i64) -> Result<Vec<model::visit::Model>>;
}

/// Vet store
#[async_trait]
pub trait VetRepository: CrudRepository<Model = model::vet::Model> {
    /// Specialities linked to a vet
    async fn find_specialities(&self, vet_id: i64) -> Result<Vec<model::speciality::Model>>;

    /// Links a vet to a speciality
    async fn add_speciality(&self, vet_id: i64, speciality_id: i64) -> Result<()>;
}

/// Pet type store
pub trait PetTypeRepository: CrudRepository<Model = model::pet_type::Model> {}

impl<T> PetTypeRepository for T where T: CrudRepository<Model = model::pet_type::Model> {}

/// Speciality store
pub trait SpecialtyRepository: CrudRepository<Model = model::speciality::Model> {}

impl<T> SpecialtyRepository for T where T: CrudRepository<Model = model::speciality::Model> {}
