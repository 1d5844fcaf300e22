use super::{CrudRepository, PetRepository};
use crate::{
    entities::{BaseEntity, Pet, pet},
    errors::Result,
};
use async_trait::async_trait;
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set, prelude::*};
use tracing::{debug, instrument};

/// Pet repository backed by `SeaORM`
#[derive(Clone, Debug)]
pub struct SeaOrmPetRepository {
    db: DatabaseConnection,
}

impl SeaOrmPetRepository {
    /// Creates a repository using the given connection
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository for SeaOrmPetRepository {
    type Model = pet::Model;

    async fn find_all(&self) -> Result<Vec<pet::Model>> {
        Pet::find()
            .order_by_asc(pet::Column::Id)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<pet::Model>> {
        Pet::find_by_id(id).one(&self.db).await.map_err(Into::into)
    }

    #[instrument(skip(self, entity), fields(id = entity.id, owner_id = entity.owner_id))]
    async fn save(&self, entity: pet::Model) -> Result<pet::Model> {
        let is_new = entity.is_new();
        let active = pet::ActiveModel {
            id: if is_new { NotSet } else { Set(entity.id) },
            name: Set(entity.name),
            birth_date: Set(entity.birth_date),
            pet_type_id: Set(entity.pet_type_id),
            owner_id: Set(entity.owner_id),
        };

        let saved = if is_new {
            active.insert(&self.db).await?
        } else {
            active.update(&self.db).await?
        };
        debug!("Saved pet {}", saved.id);
        Ok(saved)
    }

    async fn delete(&self, entity: pet::Model) -> Result<()> {
        self.delete_by_id(entity.id).await
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i64) -> Result<()> {
        Pet::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}

#[async_trait]
impl PetRepository for SeaOrmPetRepository {
    async fn find_all_by_owner_id(&self, owner_id: i64) -> Result<Vec<pet::Model>> {
        Pet::find()
            .filter(pet::Column::OwnerId.eq(owner_id))
            .order_by_asc(pet::Column::Name)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }
}
