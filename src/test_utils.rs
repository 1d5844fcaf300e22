//! Shared test utilities for the pet clinic.
//!
//! Provides an in-memory database and models with sensible defaults.

use crate::{
    entities::{owner, pet, pet_type, vet, visit},
    errors::Result,
    repositories::{
        CrudRepository, SeaOrmOwnerRepository, SeaOrmPetRepository, SeaOrmPetTypeRepository,
    },
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output through the test harness; safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// An unsaved owner.
///
/// # Defaults
/// * `address`: `"110 W. Liberty St."`
/// * `city`: `"Madison"`
/// * `telephone`: `"6085551023"`
pub fn owner_model(first_name: &str, last_name: &str) -> owner::Model {
    owner::Model {
        id: 0,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        address: "110 W. Liberty St.".to_string(),
        city: "Madison".to_string(),
        telephone: "6085551023".to_string(),
    }
}

/// An unsaved pet born on 2019-03-14
pub fn pet_model(name: &str, pet_type_id: i64, owner_id: i64) -> pet::Model {
    pet::Model {
        id: 0,
        name: name.to_string(),
        birth_date: NaiveDate::from_ymd_opt(2019, 3, 14).unwrap_or_default(),
        pet_type_id,
        owner_id,
    }
}

/// An unsaved visit
pub fn visit_model(date: NaiveDate, description: &str, pet_id: i64) -> visit::Model {
    visit::Model {
        id: 0,
        date,
        description: description.to_string(),
        pet_id,
    }
}

/// An unsaved vet
pub fn vet_model(first_name: &str, last_name: &str) -> vet::Model {
    vet::Model {
        id: 0,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    }
}

/// Stores an owner built by [`owner_model`]
pub async fn create_test_owner(
    db: &DatabaseConnection,
    first_name: &str,
    last_name: &str,
) -> Result<owner::Model> {
    SeaOrmOwnerRepository::new(db.clone())
        .save(owner_model(first_name, last_name))
        .await
}

/// Stores a pet type
pub async fn create_test_pet_type(db: &DatabaseConnection, name: &str) -> Result<pet_type::Model> {
    SeaOrmPetTypeRepository::new(db.clone())
        .save(pet_type::Model {
            id: 0,
            name: name.to_string(),
        })
        .await
}

/// Sets up an owner with one dog.
/// Returns (owner, pet) for visit-related tests.
pub async fn setup_with_pet(db: &DatabaseConnection) -> Result<(owner::Model, pet::Model)> {
    let owner = create_test_owner(db, "Michael", "Weston").await?;
    let dog = create_test_pet_type(db, "Dog").await?;
    let pet = SeaOrmPetRepository::new(db.clone())
        .save(pet_model("Rosco", dog.id, owner.id))
        .await?;
    Ok((owner, pet))
}
