//! Visit entity - A pet's appointment at the clinic.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Visit database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "visits")]
pub struct Model {
    /// Unique identifier for the visit
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Day of the appointment
    pub date: Date,
    /// Reason for the visit or treatment notes
    pub description: String,
    /// ID of the visiting pet
    pub pet_id: i64,
}

/// Defines relationships between Visit and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each visit belongs to one pet
    #[sea_orm(
        belongs_to = "super::pet::Entity",
        from = "Column::PetId",
        to = "super::pet::Column::Id",
        on_delete = "Cascade"
    )]
    Pet,
}

impl Related<super::pet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
