//! Pet creation and editing for an owner.

use crate::{
    entities::{owner, pet},
    errors::{Error, Result},
    services::{OwnerService, PetService, PetTypeService},
    web::{
        binding::BindingResult,
        forms::PetForm,
        view::{View, ViewModel},
    },
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Pet creation and edit form
pub const CREATE_OR_UPDATE_PET_FORM: &str = "pets/createOrUpdatePetForm";

/// Handles the `/owners/{owner_id}/pets` pages
pub struct PetController {
    owners: Arc<dyn OwnerService>,
    pets: Arc<dyn PetService>,
    pet_types: Arc<dyn PetTypeService>,
}

impl PetController {
    /// Creates the controller from its services
    #[must_use]
    pub fn new(
        owners: Arc<dyn OwnerService>,
        pets: Arc<dyn PetService>,
        pet_types: Arc<dyn PetTypeService>,
    ) -> Self {
        Self {
            owners,
            pets,
            pet_types,
        }
    }

    /// Empty pet form for an owner
    pub async fn init_creation_form(&self, owner_id: i64, model: &mut ViewModel) -> Result<View> {
        let owner = self.find_owner(owner_id).await?;
        self.render_form(&owner, &PetForm::default(), model).await
    }

    /// Adds a pet to an owner unless the form was rejected.
    ///
    /// A name already used by another pet of the same owner is rejected as a duplicate.
    #[instrument(skip(self, pet, result, model))]
    pub async fn process_creation_form(
        &self,
        owner_id: i64,
        pet: PetForm,
        result: &mut BindingResult,
        model: &mut ViewModel,
    ) -> Result<View> {
        let owner = self.find_owner(owner_id).await?;
        self.reject_duplicate_name(owner_id, 0, &pet, result).await?;

        if result.has_errors() {
            return self.render_form(&owner, &pet, model).await;
        }

        let saved = self.pets.save(pet.into_model(0, owner_id)?).await?;
        debug!("Added pet {} to owner {}", saved.id, owner_id);
        Ok(View::redirect(format!("/owners/{owner_id}")))
    }

    /// Edit form pre-filled with the stored pet
    pub async fn init_update_form(
        &self,
        owner_id: i64,
        pet_id: i64,
        model: &mut ViewModel,
    ) -> Result<View> {
        let owner = self.find_owner(owner_id).await?;
        let pet = self.find_pet(owner_id, pet_id).await?;
        self.render_form(&owner, &PetForm::from(&pet), model).await
    }

    /// Saves the edited pet unless the form was rejected.
    ///
    /// The new name may not match another pet of the same owner.
    #[instrument(skip(self, pet, result, model))]
    pub async fn process_update_form(
        &self,
        owner_id: i64,
        pet_id: i64,
        pet: PetForm,
        result: &mut BindingResult,
        model: &mut ViewModel,
    ) -> Result<View> {
        let owner = self.find_owner(owner_id).await?;
        self.find_pet(owner_id, pet_id).await?;
        self.reject_duplicate_name(owner_id, pet_id, &pet, result).await?;

        if result.has_errors() {
            return self.render_form(&owner, &pet, model).await;
        }

        self.pets.save(pet.into_model(pet_id, owner_id)?).await?;
        Ok(View::redirect(format!("/owners/{owner_id}")))
    }

    async fn render_form(
        &self,
        owner: &owner::Model,
        pet: &PetForm,
        model: &mut ViewModel,
    ) -> Result<View> {
        let types = self.pet_types.find_all().await?;
        model.add_attribute("owner", owner)?;
        model.add_attribute("types", &types)?;
        model.add_attribute("pet", pet)?;
        Ok(View::template(CREATE_OR_UPDATE_PET_FORM))
    }

    /// Rejects `name` when another pet of the owner, other than `pet_id`, already uses it
    async fn reject_duplicate_name(
        &self,
        owner_id: i64,
        pet_id: i64,
        pet: &PetForm,
        result: &mut BindingResult,
    ) -> Result<()> {
        let name = pet.name.trim();
        if name.is_empty() {
            return Ok(());
        }

        let existing = self.pets.find_all_by_owner_id(owner_id).await?;
        if existing
            .iter()
            .any(|p| p.id != pet_id && p.name.eq_ignore_ascii_case(name))
        {
            result.reject_value("name", "duplicate", "already exists");
        }
        Ok(())
    }

    async fn find_pet(&self, owner_id: i64, pet_id: i64) -> Result<pet::Model> {
        self.pets
            .find_by_id(pet_id)
            .await?
            .filter(|pet| pet.owner_id == owner_id)
            .ok_or(Error::PetNotFound { id: pet_id })
    }

    async fn find_owner(&self, owner_id: i64) -> Result<owner::Model> {
        self.owners
            .find_by_id(owner_id)
            .await?
            .ok_or(Error::OwnerNotFound { id: owner_id })
    }
}
