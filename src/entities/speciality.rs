//! Speciality entity - A veterinarian's area of expertise.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Speciality database model
#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "specialities")]
pub struct Model {
    /// Unique identifier for the speciality
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the field (e.g., "radiology", "surgery")
    pub description: String,
}

/// Speciality has no foreign keys of its own
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

impl Related<super::vet::Entity> for Entity {
    fn to() -> RelationDef {
        super::vet_speciality::Relation::Vet.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::vet_speciality::Relation::Speciality.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
