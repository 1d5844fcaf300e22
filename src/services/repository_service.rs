use super::{CrudService, OwnerService, PetService, VetService, VisitService};
use crate::{
    entities::{owner, pet, speciality, visit},
    errors::Result,
    repositories::{CrudRepository, OwnerRepository, PetRepository, VetRepository, VisitRepository},
};
use async_trait::async_trait;

/// Service that hands every call straight to a repository.
///
/// Arguments reach the repository unchanged and whatever the repository returns,
/// including `None` or an error, is handed back as is.
#[derive(Clone, Debug)]
pub struct RepositoryService<R> {
    repository: R,
}

impl<R> RepositoryService<R> {
    /// Wraps a repository
    #[must_use]
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CrudService for RepositoryService<R>
where
    R: CrudRepository,
{
    type Model = R::Model;

    async fn find_all(&self) -> Result<Vec<R::Model>> {
        self.repository.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<R::Model>> {
        self.repository.find_by_id(id).await
    }

    async fn save(&self, entity: R::Model) -> Result<R::Model> {
        self.repository.save(entity).await
    }

    async fn delete(&self, entity: R::Model) -> Result<()> {
        self.repository.delete(entity).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.repository.delete_by_id(id).await
    }
}

#[async_trait]
impl<R> OwnerService for RepositoryService<R>
where
    R: OwnerRepository,
{
    async fn find_by_last_name(&self, last_name: &str) -> Result<Option<owner::Model>> {
        self.repository.find_by_last_name(last_name).await
    }

    async fn find_all_by_last_name_like(&self, pattern: &str) -> Result<Vec<owner::Model>> {
        self.repository.find_all_by_last_name_like(pattern).await
    }
}

#[async_trait]
impl<R> PetService for RepositoryService<R>
where
    R: PetRepository,
{
    async fn find_all_by_owner_id(&self, owner_id: i64) -> Result<Vec<pet::Model>> {
        self.repository.find_all_by_owner_id(owner_id).await
    }
}

#[async_trait]
impl<R> VisitService for RepositoryService<R>
where
    R: VisitRepository,
{
    async fn find_all_by_pet_id(&self, pet_id: i64) -> Result<Vec<visit::Model>> {
        self.repository.find_all_by_pet_id(pet_id).await
    }
}

#[async_trait]
impl<R> VetService for RepositoryService<R>
where
    R: VetRepository,
{
    async fn find_specialities(&self, vet_id: i64) -> Result<Vec<speciality::Model>> {
        self.repository.find_specialities(vet_id).await
    }

    async fn add_speciality(&self, vet_id: i64, speciality_id: i64) -> Result<()> {
        self.repository.add_speciality(vet_id, speciality_id).await
    }
}
