//! Veterinarian listing.

use crate::{
    entities::{speciality, vet},
    errors::Result,
    services::VetService,
    web::view::{View, ViewModel},
};
use serde::Serialize;
use std::sync::Arc;

/// List of all vets
pub const VETS_VIEW: &str = "vets/index";

/// A vet together with its specialities
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VetDetails {
    /// The vet record
    #[serde(flatten)]
    pub vet: vet::Model,
    /// Specialities of the vet
    pub specialities: Vec<speciality::Model>,
}

/// Handles the `/vets` page
pub struct VetController {
    vets: Arc<dyn VetService>,
}

impl VetController {
    /// Creates the controller from its service
    #[must_use]
    pub fn new(vets: Arc<dyn VetService>) -> Self {
        Self { vets }
    }

    /// Every vet with its specialities under `vets`
    pub async fn list_vets(&self, model: &mut ViewModel) -> Result<View> {
        let mut vets = Vec::new();
        for vet in self.vets.find_all().await? {
            let specialities = self.vets.find_specialities(vet.id).await?;
            vets.push(VetDetails { vet, specialities });
        }

        model.add_attribute("vets", &vets)?;
        Ok(View::template(VETS_VIEW))
    }
}
