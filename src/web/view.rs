//! View selection types.
//!
//! Controllers answer with a [`View`]: either the name of a template or a redirect
//! target. Template rendering is out of scope, so a template view is delivered as a
//! JSON document carrying the view name, its model attributes and any field errors.

use super::binding::BindingResult;
use crate::errors::Result;
use axum::{
    Json,
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::{collections::BTreeMap, fmt};

/// What the controller wants the client to see next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// A named template such as `owners/ownersList`
    Template(&'static str),
    /// A redirect to another path of this application
    Redirect(String),
}

impl View {
    /// A template view
    #[must_use]
    pub const fn template(name: &'static str) -> Self {
        Self::Template(name)
    }

    /// A redirect view
    pub fn redirect(path: impl Into<String>) -> Self {
        Self::Redirect(path.into())
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(name) => f.write_str(name),
            Self::Redirect(path) => write!(f, "redirect:{path}"),
        }
    }
}

/// Named attributes handed to a template
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ViewModel {
    attributes: BTreeMap<String, Value>,
}

impl ViewModel {
    /// Stores `value` under `name`, replacing any previous value
    pub fn add_attribute<T>(&mut self, name: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.attributes
            .insert(name.to_string(), serde_json::to_value(value)?);
        Ok(())
    }

    /// The attribute stored under `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Whether an attribute named `name` exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Whether no attribute has been added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// A controller outcome ready to be sent over HTTP
#[derive(Debug)]
pub struct Rendered {
    view: View,
    model: ViewModel,
    errors: BindingResult,
}

impl Rendered {
    /// Bundles a view with the model and binding result it was produced with
    #[must_use]
    pub const fn new(view: View, model: ViewModel, errors: BindingResult) -> Self {
        Self {
            view,
            model,
            errors,
        }
    }
}

impl IntoResponse for Rendered {
    fn into_response(self) -> Response {
        match self.view {
            View::Redirect(path) => Redirect::to(&path).into_response(),
            View::Template(name) => Json(json!({
                "view": name,
                "model": self.model,
                "errors": self.errors,
            }))
            .into_response(),
        }
    }
}
