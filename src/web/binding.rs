//! Per-request record of form field errors.

use serde::Serialize;

/// One rejected form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field name as submitted (e.g. `lastName`)
    pub field: String,
    /// Machine readable reason (e.g. `required`, `notFound`)
    pub code: String,
    /// Human readable reason
    pub message: String,
}

/// Field errors collected while binding and validating a form
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BindingResult {
    errors: Vec<FieldError>,
}

impl BindingResult {
    /// Whether any field was rejected
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Records an error against `field`
    pub fn reject_value(&mut self, field: &str, code: &str, message: &str) {
        self.errors.push(FieldError {
            field: field.to_string(),
            code: code.to_string(),
            message: message.to_string(),
        });
    }

    /// Whether `field` was rejected
    #[must_use]
    pub fn has_field_error(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// All recorded errors, in rejection order
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        &self.errors
    }
}
