//! Loads the seed file into an empty database.
//!
//! Pet types act as the marker: if any exist, the database is considered
//! initialised and nothing is written.

use crate::{
    config::seed::{OwnerSeed, SeedConfig},
    entities::{owner, pet, pet_type, speciality, vet, visit},
    errors::{Error, Result},
    services::Services,
};
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Inserts everything described by `seed` unless data is already present.
///
/// Returns `true` when the seed was applied.
///
/// # Errors
/// Fails with [`Error::Config`] when a vet or pet refers to an unknown
/// speciality or pet type, and with any storage error raised while inserting.
#[instrument(skip_all)]
pub async fn load_data(services: &Services, seed: &SeedConfig) -> Result<bool> {
    seed.validate()?;
    if !services.pet_types.find_all().await?.is_empty() {
        info!("Database already holds data, skipping seed");
        return Ok(false);
    }

    let mut pet_types = HashMap::new();
    for name in &seed.pet_types {
        let saved = services
            .pet_types
            .save(pet_type::Model {
                id: 0,
                name: name.clone(),
            })
            .await?;
        pet_types.insert(name.as_str(), saved.id);
    }

    let mut specialities = HashMap::new();
    for description in &seed.specialities {
        let saved = services
            .specialities
            .save(speciality::Model {
                id: 0,
                description: description.clone(),
            })
            .await?;
        specialities.insert(description.as_str(), saved.id);
    }

    for entry in &seed.vets {
        let saved = services
            .vets
            .save(vet::Model {
                id: 0,
                first_name: entry.first_name.clone(),
                last_name: entry.last_name.clone(),
            })
            .await?;
        for description in &entry.specialities {
            let speciality_id = lookup(&specialities, description, "speciality")?;
            services.vets.add_speciality(saved.id, speciality_id).await?;
        }
    }

    for entry in &seed.owners {
        load_owner(services, entry, &pet_types).await?;
    }

    info!(
        "Seeded {} pet types, {} specialities, {} vets and {} owners",
        seed.pet_types.len(),
        seed.specialities.len(),
        seed.vets.len(),
        seed.owners.len()
    );
    Ok(true)
}

async fn load_owner(
    services: &Services,
    entry: &OwnerSeed,
    pet_types: &HashMap<&str, i64>,
) -> Result<()> {
    let owner = services
        .owners
        .save(owner::Model {
            id: 0,
            first_name: entry.first_name.clone(),
            last_name: entry.last_name.clone(),
            address: entry.address.clone(),
            city: entry.city.clone(),
            telephone: entry.telephone.clone(),
        })
        .await?;
    debug!("Seeded owner {} {}", owner.first_name, owner.last_name);

    for seed_pet in &entry.pets {
        let pet = services
            .pets
            .save(pet::Model {
                id: 0,
                name: seed_pet.name.clone(),
                birth_date: seed_pet.birth_date,
                pet_type_id: lookup(pet_types, &seed_pet.pet_type, "pet type")?,
                owner_id: owner.id,
            })
            .await?;

        for seed_visit in &seed_pet.visits {
            services
                .visits
                .save(visit::Model {
                    id: 0,
                    date: seed_visit.date,
                    description: seed_visit.description.clone(),
                    pet_id: pet.id,
                })
                .await?;
        }
    }
    Ok(())
}

fn lookup(ids: &HashMap<&str, i64>, name: &str, kind: &str) -> Result<i64> {
    ids.get(name).copied().ok_or_else(|| Error::Config {
        message: format!("Unknown {kind} '{name}' in seed file"),
    })
}
