//! Pet entity - An animal owned by a clinic customer.
//!
//! Each pet belongs to exactly one owner, has one pet type and accumulates visits.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Pet database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pets")]
pub struct Model {
    /// Unique identifier for the pet
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name the pet answers to
    pub name: String,
    /// Date of birth
    pub birth_date: Date,
    /// ID of the pet's type
    pub pet_type_id: i64,
    /// ID of the owning customer
    pub owner_id: i64,
}

/// Defines relationships between Pet and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each pet belongs to one owner
    #[sea_orm(
        belongs_to = "super::owner::Entity",
        from = "Column::OwnerId",
        to = "super::owner::Column::Id",
        on_delete = "Cascade"
    )]
    Owner,
    /// Each pet has one type
    #[sea_orm(
        belongs_to = "super::pet_type::Entity",
        from = "Column::PetTypeId",
        to = "super::pet_type::Column::Id"
    )]
    PetType,
    /// One pet has many visits
    #[sea_orm(has_many = "super::visit::Entity")]
    Visits,
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::pet_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PetType.def()
    }
}

impl Related<super::visit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Visits.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
