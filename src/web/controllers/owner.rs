//! Owner search, details, creation and editing.

use crate::{
    entities::{owner, pet, visit},
    errors::{Error, Result},
    services::{OwnerService, PetService, VisitService},
    web::{
        binding::BindingResult,
        forms::OwnerForm,
        view::{View, ViewModel},
    },
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Owner search form
pub const FIND_OWNERS_VIEW: &str = "owners/findOwners";
/// Search results with more than one owner
pub const OWNERS_LIST_VIEW: &str = "owners/ownersList";
/// One owner with pets and visits
pub const OWNER_DETAILS_VIEW: &str = "owners/ownerDetails";
/// Owner creation and edit form
pub const CREATE_OR_UPDATE_OWNER_FORM: &str = "owners/createOrUpdateOwnerForm";

/// An owner together with everything shown on the details page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerDetails {
    /// The owner record
    #[serde(flatten)]
    pub owner: owner::Model,
    /// The owner's pets
    pub pets: Vec<PetDetails>,
}

/// A pet together with its visits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetDetails {
    /// The pet record
    #[serde(flatten)]
    pub pet: pet::Model,
    /// The pet's visits, oldest first
    pub visits: Vec<visit::Model>,
}

/// Handles the `/owners` pages
pub struct OwnerController {
    owners: Arc<dyn OwnerService>,
    pets: Arc<dyn PetService>,
    visits: Arc<dyn VisitService>,
}

impl OwnerController {
    /// Creates the controller from its services
    #[must_use]
    pub fn new(
        owners: Arc<dyn OwnerService>,
        pets: Arc<dyn PetService>,
        visits: Arc<dyn VisitService>,
    ) -> Self {
        Self {
            owners,
            pets,
            visits,
        }
    }

    /// Empty search form
    pub fn init_find_form(&self, model: &mut ViewModel) -> Result<View> {
        model.add_attribute("owner", &OwnerForm::default())?;
        Ok(View::template(FIND_OWNERS_VIEW))
    }

    /// Searches owners by last name and picks the view from the number of matches.
    ///
    /// No match rejects `lastName` and shows the search form again, a single match
    /// redirects to that owner, and several matches are listed under `owners`.
    #[instrument(skip(self, owner, result, model), fields(last_name = %owner.last_name))]
    pub async fn process_find_form(
        &self,
        owner: &OwnerForm,
        result: &mut BindingResult,
        model: &mut ViewModel,
    ) -> Result<View> {
        let pattern = format!("%{}%", owner.last_name);
        let results = self.owners.find_all_by_last_name_like(&pattern).await?;
        debug!("Owner search matched {} owner(s)", results.len());

        match results.as_slice() {
            [] => {
                result.reject_value("lastName", "notFound", "not found");
                Ok(View::template(FIND_OWNERS_VIEW))
            }
            [found] => Ok(View::redirect(format!("/owners/{}", found.id))),
            _ => {
                model.add_attribute("owners", &results)?;
                Ok(View::template(OWNERS_LIST_VIEW))
            }
        }
    }

    /// Details page of one owner
    #[instrument(skip(self, model))]
    pub async fn show_owner(&self, owner_id: i64, model: &mut ViewModel) -> Result<View> {
        let owner = self.find_owner(owner_id).await?;

        let mut pets = Vec::new();
        for pet in self.pets.find_all_by_owner_id(owner_id).await? {
            let visits = self.visits.find_all_by_pet_id(pet.id).await?;
            pets.push(PetDetails { pet, visits });
        }

        model.add_attribute("owner", &OwnerDetails { owner, pets })?;
        Ok(View::template(OWNER_DETAILS_VIEW))
    }

    /// Empty creation form
    pub fn init_creation_form(&self, model: &mut ViewModel) -> Result<View> {
        model.add_attribute("owner", &OwnerForm::default())?;
        Ok(View::template(CREATE_OR_UPDATE_OWNER_FORM))
    }

    /// Saves a new owner unless the form was rejected
    #[instrument(skip_all)]
    pub async fn process_creation_form(
        &self,
        owner: OwnerForm,
        result: &BindingResult,
    ) -> Result<View> {
        if result.has_errors() {
            return Ok(View::template(CREATE_OR_UPDATE_OWNER_FORM));
        }

        let saved = self.owners.save(owner.into_model(0)).await?;
        debug!("Created owner {}", saved.id);
        Ok(View::redirect(format!("/owners/{}", saved.id)))
    }

    /// Edit form pre-filled with the stored owner
    pub async fn init_update_owner_form(
        &self,
        owner_id: i64,
        model: &mut ViewModel,
    ) -> Result<View> {
        let owner = self.find_owner(owner_id).await?;
        model.add_attribute("owner", &OwnerForm::from(&owner))?;
        Ok(View::template(CREATE_OR_UPDATE_OWNER_FORM))
    }

    /// Saves the edited owner unless the form was rejected
    #[instrument(skip(self, owner, result))]
    pub async fn process_update_owner_form(
        &self,
        owner_id: i64,
        owner: OwnerForm,
        result: &BindingResult,
    ) -> Result<View> {
        self.find_owner(owner_id).await?;
        if result.has_errors() {
            return Ok(View::template(CREATE_OR_UPDATE_OWNER_FORM));
        }

        let saved = self.owners.save(owner.into_model(owner_id)).await?;
        Ok(View::redirect(format!("/owners/{}", saved.id)))
    }

    async fn find_owner(&self, owner_id: i64) -> Result<owner::Model> {
        self.owners
            .find_by_id(owner_id)
            .await?
            .ok_or(Error::OwnerNotFound { id: owner_id })
    }
}
