//! Request-bound form data and its validation rules.
//!
//! Field names follow the HTML form names (`firstName`, `birthDate`, ...), which is
//! also how they appear in [`BindingResult`] errors.

use super::binding::BindingResult;
use crate::{
    entities::{owner, pet, visit},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::{fmt, str::FromStr};

const REQUIRED: &str = "required";
const REQUIRED_MESSAGE: &str = "is required";
const MAX_TELEPHONE_DIGITS: usize = 10;

/// Reads an optional form value, treating an empty field as absent
fn empty_as_none<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some).map_err(de::Error::custom),
    }
}

fn require(result: &mut BindingResult, field: &str, value: &str) {
    if value.trim().is_empty() {
        result.reject_value(field, REQUIRED, REQUIRED_MESSAGE);
    }
}

/// Owner fields as submitted by the search, creation and edit forms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OwnerForm {
    /// Given name
    pub first_name: String,
    /// Family name; also the search filter
    pub last_name: String,
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// Telephone number
    pub telephone: String,
}

impl OwnerForm {
    /// Checks every field, collecting all failures
    #[must_use]
    pub fn validate(&self) -> BindingResult {
        let mut result = BindingResult::default();
        require(&mut result, "firstName", &self.first_name);
        require(&mut result, "lastName", &self.last_name);
        require(&mut result, "address", &self.address);
        require(&mut result, "city", &self.city);

        let telephone = self.telephone.trim();
        if telephone.is_empty() {
            result.reject_value("telephone", REQUIRED, REQUIRED_MESSAGE);
        } else if telephone.len() > MAX_TELEPHONE_DIGITS
            || !telephone.chars().all(|c| c.is_ascii_digit())
        {
            result.reject_value(
                "telephone",
                "digits",
                "must be a numeric value of at most 10 digits",
            );
        }
        result
    }

    /// The owner to persist under `id` (`0` for a new owner)
    #[must_use]
    pub fn into_model(self, id: i64) -> owner::Model {
        owner::Model {
            id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            telephone: self.telephone.trim().to_string(),
        }
    }
}

impl From<&owner::Model> for OwnerForm {
    fn from(owner: &owner::Model) -> Self {
        Self {
            first_name: owner.first_name.clone(),
            last_name: owner.last_name.clone(),
            address: owner.address.clone(),
            city: owner.city.clone(),
            telephone: owner.telephone.clone(),
        }
    }
}

/// Pet fields as submitted by the creation and edit forms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PetForm {
    /// Pet name
    pub name: String,
    /// Date of birth
    #[serde(deserialize_with = "empty_as_none")]
    pub birth_date: Option<NaiveDate>,
    /// Selected pet type id
    #[serde(rename = "type", deserialize_with = "empty_as_none")]
    pub pet_type_id: Option<i64>,
}

impl PetForm {
    /// Checks every field, collecting all failures
    #[must_use]
    pub fn validate(&self) -> BindingResult {
        let mut result = BindingResult::default();
        require(&mut result, "name", &self.name);
        if self.pet_type_id.is_none() {
            result.reject_value("type", REQUIRED, REQUIRED_MESSAGE);
        }
        if self.birth_date.is_none() {
            result.reject_value("birthDate", REQUIRED, REQUIRED_MESSAGE);
        }
        result
    }

    /// The pet to persist under `id` for `owner_id`
    ///
    /// # Errors
    /// Returns [`Error::Validation`] when the type or birth date is missing.
    pub fn into_model(self, id: i64, owner_id: i64) -> Result<pet::Model> {
        let pet_type_id = self.pet_type_id.ok_or_else(|| Error::Validation {
            field: "type".to_string(),
            message: REQUIRED_MESSAGE.to_string(),
        })?;
        let birth_date = self.birth_date.ok_or_else(|| Error::Validation {
            field: "birthDate".to_string(),
            message: REQUIRED_MESSAGE.to_string(),
        })?;

        Ok(pet::Model {
            id,
            name: self.name.trim().to_string(),
            birth_date,
            pet_type_id,
            owner_id,
        })
    }
}

impl From<&pet::Model> for PetForm {
    fn from(pet: &pet::Model) -> Self {
        Self {
            name: pet.name.clone(),
            birth_date: Some(pet.birth_date),
            pet_type_id: Some(pet.pet_type_id),
        }
    }
}

/// Visit fields as submitted by the new-visit form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisitForm {
    /// Day of the visit
    #[serde(deserialize_with = "empty_as_none")]
    pub date: Option<NaiveDate>,
    /// What the visit is about
    pub description: String,
}

impl Default for VisitForm {
    /// A visit dated today
    fn default() -> Self {
        Self {
            date: Some(chrono::Local::now().date_naive()),
            description: String::new(),
        }
    }
}

impl VisitForm {
    /// Checks every field, collecting all failures
    #[must_use]
    pub fn validate(&self) -> BindingResult {
        let mut result = BindingResult::default();
        if self.date.is_none() {
            result.reject_value("date", REQUIRED, REQUIRED_MESSAGE);
        }
        require(&mut result, "description", &self.description);
        result
    }

    /// The new visit to persist for `pet_id`
    ///
    /// # Errors
    /// Returns [`Error::Validation`] when the date is missing.
    pub fn into_model(self, pet_id: i64) -> Result<visit::Model> {
        let date = self.date.ok_or_else(|| Error::Validation {
            field: "date".to_string(),
            message: REQUIRED_MESSAGE.to_string(),
        })?;

        Ok(visit::Model {
            id: 0,
            date,
            description: self.description.trim().to_string(),
            pet_id,
        })
    }
}
