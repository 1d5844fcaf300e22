use super::{CrudRepository, VetRepository};
use crate::{
    entities::{BaseEntity, Speciality, Vet, speciality, vet, vet_speciality},
    errors::Result,
};
use async_trait::async_trait;
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set, prelude::*};
use tracing::{debug, instrument};

/// Vet repository backed by `SeaORM`
#[derive(Clone, Debug)]
pub struct SeaOrmVetRepository {
    db: DatabaseConnection,
}

impl SeaOrmVetRepository {
    /// Creates a repository using the given connection
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository for SeaOrmVetRepository {
    type Model = vet::Model;

    async fn find_all(&self) -> Result<Vec<vet::Model>> {
        Vet::find()
            .order_by_asc(vet::Column::LastName)
            .order_by_asc(vet::Column::FirstName)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<vet::Model>> {
        Vet::find_by_id(id).one(&self.db).await.map_err(Into::into)
    }

    #[instrument(skip(self, entity), fields(id = entity.id))]
    async fn save(&self, entity: vet::Model) -> Result<vet::Model> {
        let is_new = entity.is_new();
        let active = vet::ActiveModel {
            id: if is_new { NotSet } else { Set(entity.id) },
            first_name: Set(entity.first_name),
            last_name: Set(entity.last_name),
        };

        if is_new {
            active.insert(&self.db).await.map_err(Into::into)
        } else {
            active.update(&self.db).await.map_err(Into::into)
        }
    }

    async fn delete(&self, entity: vet::Model) -> Result<()> {
        self.delete_by_id(entity.id).await
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i64) -> Result<()> {
        // Speciality links cascade with the vet
        let result = Vet::delete_by_id(id).exec(&self.db).await?;
        debug!("Deleted {} vet row(s)", result.rows_affected);
        Ok(())
    }
}

#[async_trait]
impl VetRepository for SeaOrmVetRepository {
    async fn find_specialities(&self, vet_id: i64) -> Result<Vec<speciality::Model>> {
        Speciality::find()
            .inner_join(vet_speciality::Entity)
            .filter(vet_speciality::Column::VetId.eq(vet_id))
            .order_by_asc(speciality::Column::Description)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    #[instrument(skip(self))]
    async fn add_speciality(&self, vet_id: i64, speciality_id: i64) -> Result<()> {
        let link = vet_speciality::ActiveModel {
            vet_id: Set(vet_id),
            speciality_id: Set(speciality_id),
        };
        vet_speciality::Entity::insert(link)
            .exec_without_returning(&self.db)
            .await?;
        debug!("Linked vet {} to speciality {}", vet_id, speciality_id);
        Ok(())
    }
}
