use super::{CrudRepository, OwnerRepository};
use crate::{
    entities::{BaseEntity, Owner, owner},
    errors::Result,
};
use async_trait::async_trait;
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set, prelude::*};
use tracing::{debug, instrument};

/// Owner repository backed by `SeaORM`
#[derive(Clone, Debug)]
pub struct SeaOrmOwnerRepository {
    db: DatabaseConnection,
}

impl SeaOrmOwnerRepository {
    /// Creates a repository using the given connection
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository for SeaOrmOwnerRepository {
    type Model = owner::Model;

    async fn find_all(&self) -> Result<Vec<owner::Model>> {
        Owner::find()
            .order_by_asc(owner::Column::Id)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<owner::Model>> {
        Owner::find_by_id(id).one(&self.db).await.map_err(Into::into)
    }

    #[instrument(skip(self, entity), fields(id = entity.id))]
    async fn save(&self, entity: owner::Model) -> Result<owner::Model> {
        let is_new = entity.is_new();
        let active = owner::ActiveModel {
            id: if is_new { NotSet } else { Set(entity.id) },
            first_name: Set(entity.first_name),
            last_name: Set(entity.last_name),
            address: Set(entity.address),
            city: Set(entity.city),
            telephone: Set(entity.telephone),
        };

        let saved = if is_new {
            active.insert(&self.db).await?
        } else {
            active.update(&self.db).await?
        };
        debug!("Saved owner {}", saved.id);
        Ok(saved)
    }

    async fn delete(&self, entity: owner::Model) -> Result<()> {
        self.delete_by_id(entity.id).await
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let result = Owner::delete_by_id(id).exec(&self.db).await?;
        debug!("Deleted {} owner row(s)", result.rows_affected);
        Ok(())
    }
}

#[async_trait]
impl OwnerRepository for SeaOrmOwnerRepository {
    async fn find_by_last_name(&self, last_name: &str) -> Result<Option<owner::Model>> {
        Owner::find()
            .filter(owner::Column::LastName.eq(last_name))
            .order_by_asc(owner::Column::Id)
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    #[instrument(skip(self))]
    async fn find_all_by_last_name_like(&self, pattern: &str) -> Result<Vec<owner::Model>> {
        let owners = Owner::find()
            .filter(owner::Column::LastName.like(pattern))
            .order_by_asc(owner::Column::LastName)
            .order_by_asc(owner::Column::Id)
            .all(&self.db)
            .await?;
        debug!("Pattern '{}' matched {} owner(s)", pattern, owners.len());
        Ok(owners)
    }
}
