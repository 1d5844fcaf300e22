//! Vet entity - A veterinarian working at the clinic.
//!
//! Vets are linked to their specialities through the `vet_specialities` table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Vet database model
#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vets")]
pub struct Model {
    /// Unique identifier for the vet
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
}

/// Vet has no foreign keys; specialities are reached through the link table
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Rows of the vet/speciality link table
    #[sea_orm(has_many = "super::vet_speciality::Entity")]
    VetSpecialities,
}

impl Related<super::vet_speciality::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VetSpecialities.def()
    }
}

impl Related<super::speciality::Entity> for Entity {
    fn to() -> RelationDef {
        super::vet_speciality::Relation::Speciality.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::vet_speciality::Relation::Vet.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
