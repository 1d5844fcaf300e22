//! Database configuration module for the pet clinic.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the database schema always matches the Rust structs without hand-written SQL.

use crate::entities::{Owner, Pet, PetType, Speciality, Vet, VetSpeciality, Visit};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityName, EntityTrait, Schema};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Fallback used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/petclinic.sqlite?mode=rwc";

/// Gets the database URL from environment variable or returns default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database named by `DATABASE_URL`.
///
/// Falls back to a local `SQLite` file if no environment variable is set.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    if let Some(dir) = sqlite_file_dir(&database_url) {
        std::fs::create_dir_all(dir)?;
    }
    info!("Connecting to database at {database_url}");
    Database::connect(&database_url).await.map_err(Into::into)
}

/// Directory holding the database file of a `sqlite://` URL, if it names one
fn sqlite_file_dir(database_url: &str) -> Option<&Path> {
    let path = database_url.strip_prefix("sqlite://")?;
    let path = path.split('?').next().unwrap_or(path);
    Path::new(path)
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
}

/// Creates every table that does not exist yet.
///
/// Parents are created before children so that foreign keys resolve.
#[instrument(skip(db))]
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    create_table(db, Owner).await?;
    create_table(db, PetType).await?;
    create_table(db, Pet).await?;
    create_table(db, Visit).await?;
    create_table(db, Vet).await?;
    create_table(db, Speciality).await?;
    create_table(db, VetSpeciality).await?;

    info!("Database tables ensured.");
    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, entity: E) -> Result<()>
where
    E: EntityTrait,
{
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();

    debug!("Ensuring table {}", entity.table_name());
    db.execute(builder.build(&statement)).await?;
    Ok(())
}
