//! Seed data loading from config.toml
//!
//! The seed file describes the initial pet types, specialities, vets and owners.
//! It is applied by [`crate::bootstrap::load_data`] when the database is empty.

use crate::errors::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire seed file
#[derive(Debug, Default, Deserialize)]
pub struct SeedConfig {
    /// Names of the pet types to create
    #[serde(default)]
    pub pet_types: Vec<String>,
    /// Descriptions of the specialities to create
    #[serde(default)]
    pub specialities: Vec<String>,
    /// Vets to create
    #[serde(default)]
    pub vets: Vec<VetSeed>,
    /// Owners to create, with their pets
    #[serde(default)]
    pub owners: Vec<OwnerSeed>,
}

impl SeedConfig {
    /// Checks that every vet speciality and pet type is declared in the file.
    ///
    /// # Errors
    /// Returns [`Error::Config`] naming the first unknown reference.
    pub fn validate(&self) -> Result<()> {
        for vet in &self.vets {
            for description in &vet.specialities {
                if !self.specialities.contains(description) {
                    return Err(unknown("speciality", description));
                }
            }
        }

        for pet in self.owners.iter().flat_map(|owner| &owner.pets) {
            if !self.pet_types.contains(&pet.pet_type) {
                return Err(unknown("pet type", &pet.pet_type));
            }
        }
        Ok(())
    }
}

fn unknown(kind: &str, name: &str) -> Error {
    Error::Config {
        message: format!("Unknown {kind} '{name}' in seed file"),
    }
}

/// A vet entry in the seed file
#[derive(Debug, Deserialize, Clone)]
pub struct VetSeed {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Speciality descriptions; each must appear in `specialities`
    #[serde(default)]
    pub specialities: Vec<String>,
}

/// An owner entry in the seed file
#[derive(Debug, Deserialize, Clone)]
pub struct OwnerSeed {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// Telephone number
    pub telephone: String,
    /// Pets of this owner
    #[serde(default)]
    pub pets: Vec<PetSeed>,
}

/// A pet entry nested under an owner
#[derive(Debug, Deserialize, Clone)]
pub struct PetSeed {
    /// Pet name
    pub name: String,
    /// Pet type name; must appear in `pet_types`
    pub pet_type: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Past visits
    #[serde(default)]
    pub visits: Vec<VisitSeed>,
}

/// A visit entry nested under a pet
#[derive(Debug, Deserialize, Clone)]
pub struct VisitSeed {
    /// Day of the visit
    pub date: NaiveDate,
    /// What happened
    pub description: String,
}

/// Loads seed data from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read seed file {}: {e}", path.as_ref().display()),
    })?;

    parse_config(&contents)
}

/// Parses seed data from TOML text
pub fn parse_config(contents: &str) -> Result<SeedConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed data: {e}"),
    })
}
