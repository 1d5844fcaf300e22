use super::{CrudRepository, VisitRepository};
use crate::{
    entities::{BaseEntity, Visit, visit},
    errors::Result,
};
use async_trait::async_trait;
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set, prelude::*};
use tracing::instrument;

/// Visit repository backed by `SeaORM`
#[derive(Clone, Debug)]
pub struct SeaOrmVisitRepository {
    db: DatabaseConnection,
}

impl SeaOrmVisitRepository {
    /// Creates a repository using the given connection
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository for SeaOrmVisitRepository {
    type Model = visit::Model;

    async fn find_all(&self) -> Result<Vec<visit::Model>> {
        Visit::find()
            .order_by_asc(visit::Column::Id)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<visit::Model>> {
        Visit::find_by_id(id).one(&self.db).await.map_err(Into::into)
    }

    #[instrument(skip(self, entity), fields(id = entity.id, pet_id = entity.pet_id))]
    async fn save(&self, entity: visit::Model) -> Result<visit::Model> {
        let is_new = entity.is_new();
        let active = visit::ActiveModel {
            id: if is_new { NotSet } else { Set(entity.id) },
            date: Set(entity.date),
            description: Set(entity.description),
            pet_id: Set(entity.pet_id),
        };

        if is_new {
            active.insert(&self.db).await.map_err(Into::into)
        } else {
            active.update(&self.db).await.map_err(Into::into)
        }
    }

    async fn delete(&self, entity: visit::Model) -> Result<()> {
        self.delete_by_id(entity.id).await
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i64) -> Result<()> {
        Visit::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}

#[async_trait]
impl VisitRepository for SeaOrmVisitRepository {
    async fn find_all_by_pet_id(&self, pet_id: i64) -> Result<Vec<visit::Model>> {
        Visit::find()
            .filter(visit::Column::PetId.eq(pet_id))
            .order_by_asc(visit::Column::Date)
            .order_by_asc(visit::Column::Id)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }
}
