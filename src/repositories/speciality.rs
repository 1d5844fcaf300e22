use super::CrudRepository;
use crate::{
    entities::{BaseEntity, Speciality, speciality},
    errors::Result,
};
use async_trait::async_trait;
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set, prelude::*};
use tracing::instrument;

/// Speciality repository backed by `SeaORM`
#[derive(Clone, Debug)]
pub struct SeaOrmSpecialityRepository {
    db: DatabaseConnection,
}

impl SeaOrmSpecialityRepository {
    /// Creates a repository using the given connection
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository for SeaOrmSpecialityRepository {
    type Model = speciality::Model;

    async fn find_all(&self) -> Result<Vec<speciality::Model>> {
        Speciality::find()
            .order_by_asc(speciality::Column::Description)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<speciality::Model>> {
        Speciality::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn save(&self, entity: speciality::Model) -> Result<speciality::Model> {
        let is_new = entity.is_new();
        let active = speciality::ActiveModel {
            id: if is_new { NotSet } else { Set(entity.id) },
            description: Set(entity.description),
        };

        if is_new {
            active.insert(&self.db).await.map_err(Into::into)
        } else {
            active.update(&self.db).await.map_err(Into::into)
        }
    }

    async fn delete(&self, entity: speciality::Model) -> Result<()> {
        self.delete_by_id(entity.id).await
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i64) -> Result<()> {
        Speciality::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
