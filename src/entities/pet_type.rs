//! Pet type entity - The kind of animal (dog, cat, ...).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Pet type database model
#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pet_types")]
pub struct Model {
    /// Unique identifier for the pet type
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Dog", "Cat")
    pub name: String,
}

/// Defines relationships between `PetType` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One pet type is shared by many pets
    #[sea_orm(has_many = "super::pet::Entity")]
    Pets,
}

impl Related<super::pet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
