//! Link table between vets and specialities.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One vet/speciality pairing
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vet_specialities")]
pub struct Model {
    /// ID of the vet
    #[sea_orm(primary_key, auto_increment = false)]
    pub vet_id: i64,
    /// ID of the speciality
    #[sea_orm(primary_key, auto_increment = false)]
    pub speciality_id: i64,
}

/// Both sides of the many-to-many link
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Link belongs to one vet
    #[sea_orm(
        belongs_to = "super::vet::Entity",
        from = "Column::VetId",
        to = "super::vet::Column::Id",
        on_delete = "Cascade"
    )]
    Vet,
    /// Link belongs to one speciality
    #[sea_orm(
        belongs_to = "super::speciality::Entity",
        from = "Column::SpecialityId",
        to = "super::speciality::Column::Id",
        on_delete = "Cascade"
    )]
    Speciality,
}

impl Related<super::vet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vet.def()
    }
}

impl Related<super::speciality::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Speciality.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
