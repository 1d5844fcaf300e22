//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod owner;
pub mod pet;
pub mod pet_type;
pub mod speciality;
pub mod vet;
pub mod vet_speciality;
pub mod visit;

// Re-export specific types to avoid conflicts
pub use owner::{Column as OwnerColumn, Entity as Owner, Model as OwnerModel};
pub use pet::{Column as PetColumn, Entity as Pet, Model as PetModel};
pub use pet_type::{Column as PetTypeColumn, Entity as PetType, Model as PetTypeModel};
pub use speciality::{Column as SpecialityColumn, Entity as Speciality, Model as SpecialityModel};
pub use vet::{Column as VetColumn, Entity as Vet, Model as VetModel};
pub use vet_speciality::{Entity as VetSpeciality, Model as VetSpecialityModel};
pub use visit::{Column as VisitColumn, Entity as Visit, Model as VisitModel};

/// Identity shared by every model with a surrogate key.
///
/// Models that have not been stored yet carry the id `0`.
pub trait BaseEntity {
    /// The primary key value
    fn id(&self) -> i64;

    /// Whether the model has never been persisted
    fn is_new(&self) -> bool {
        self.id() == 0
    }
}

impl BaseEntity for owner::Model {
    fn id(&self) -> i64 {
        self.id
    }
}

impl BaseEntity for pet::Model {
    fn id(&self) -> i64 {
        self.id
    }
}

impl BaseEntity for pet_type::Model {
    fn id(&self) -> i64 {
        self.id
    }
}

impl BaseEntity for speciality::Model {
    fn id(&self) -> i64 {
        self.id
    }
}

impl BaseEntity for vet::Model {
    fn id(&self) -> i64 {
        self.id
    }
}

impl BaseEntity for visit::Model {
    fn id(&self) -> i64 {
        self.id
    }
}
