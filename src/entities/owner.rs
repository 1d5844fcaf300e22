//! Owner entity - A clinic customer.
//!
//! Each owner has contact details and zero or more pets.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Owner database model
#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "owners")]
pub struct Model {
    /// Unique identifier for the owner
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Given name
    pub first_name: String,
    /// Family name, used by the owner search
    pub last_name: String,
    /// Street address
    pub address: String,
    /// City of residence
    pub city: String,
    /// Telephone number, digits only
    pub telephone: String,
}

/// Defines relationships between Owner and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One owner has many pets
    #[sea_orm(has_many = "super::pet::Entity")]
    Pets,
}

impl Related<super::pet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
