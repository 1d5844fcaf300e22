use super::CrudRepository;
use crate::{
    entities::{BaseEntity, PetType, pet_type},
    errors::Result,
};
use async_trait::async_trait;
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set, prelude::*};

/// Pet type repository backed by `SeaORM`
#[derive(Clone, Debug)]
pub struct SeaOrmPetTypeRepository {
    db: DatabaseConnection,
}

impl SeaOrmPetTypeRepository {
    /// Creates a repository using the given connection
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository for SeaOrmPetTypeRepository {
    type Model = pet_type::Model;

    async fn find_all(&self) -> Result<Vec<pet_type::Model>> {
        PetType::find()
            .order_by_asc(pet_type::Column::Name)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<pet_type::Model>> {
        PetType::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn save(&self, entity: pet_type::Model) -> Result<pet_type::Model> {
        let is_new = entity.is_new();
        let active = pet_type::ActiveModel {
            id: if is_new { NotSet } else { Set(entity.id) },
            name: Set(entity.name),
        };

        if is_new {
            active.insert(&self.db).await.map_err(Into::into)
        } else {
            active.update(&self.db).await.map_err(Into::into)
        }
    }

    async fn delete(&self, entity: pet_type::Model) -> Result<()> {
        self.delete_by_id(entity.id).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        PetType::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
