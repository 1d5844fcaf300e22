//! New visit booking for a pet.

use crate::{
    entities::pet,
    errors::{Error, Result},
    services::{PetService, VisitService},
    web::{
        binding::BindingResult,
        forms::VisitForm,
        view::{View, ViewModel},
    },
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Visit creation form
pub const CREATE_OR_UPDATE_VISIT_FORM: &str = "pets/createOrUpdateVisitForm";

/// Handles the `/owners/{owner_id}/pets/{pet_id}/visits` pages
pub struct VisitController {
    pets: Arc<dyn PetService>,
    visits: Arc<dyn VisitService>,
}

impl VisitController {
    /// Creates the controller from its services
    #[must_use]
    pub fn new(pets: Arc<dyn PetService>, visits: Arc<dyn VisitService>) -> Self {
        Self { pets, visits }
    }

    /// Visit form dated today
    pub async fn init_new_visit_form(
        &self,
        owner_id: i64,
        pet_id: i64,
        model: &mut ViewModel,
    ) -> Result<View> {
        let pet = self.find_pet(owner_id, pet_id).await?;
        model.add_attribute("pet", &pet)?;
        model.add_attribute("visit", &VisitForm::default())?;
        Ok(View::template(CREATE_OR_UPDATE_VISIT_FORM))
    }

    /// Books the visit unless the form was rejected
    #[instrument(skip(self, visit, result, model))]
    pub async fn process_new_visit_form(
        &self,
        owner_id: i64,
        pet_id: i64,
        visit: VisitForm,
        result: &BindingResult,
        model: &mut ViewModel,
    ) -> Result<View> {
        let pet = self.find_pet(owner_id, pet_id).await?;
        if result.has_errors() {
            model.add_attribute("pet", &pet)?;
            model.add_attribute("visit", &visit)?;
            return Ok(View::template(CREATE_OR_UPDATE_VISIT_FORM));
        }

        let saved = self.visits.save(visit.into_model(pet.id)?).await?;
        debug!("Booked visit {} for pet {}", saved.id, pet.id);
        Ok(View::redirect(format!("/owners/{owner_id}")))
    }

    /// The pet with `pet_id`, provided it belongs to `owner_id`
    async fn find_pet(&self, owner_id: i64, pet_id: i64) -> Result<pet::Model> {
        self.pets
            .find_by_id(pet_id)
            .await?
            .filter(|pet| pet.owner_id == owner_id)
            .ok_or(Error::PetNotFound { id: pet_id })
    }
}
