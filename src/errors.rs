//! Unified error type for the pet clinic.
//!
//! Repository faults travel through services and controllers unchanged; the web
//! layer decides how each variant is reported to the client.

use thiserror::Error;

/// Errors produced anywhere in the application.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Failure reported by the database layer
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure (binding the listener, reading files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed environment variable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// View model attribute could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No owner stored under the given id
    #[error("Owner not found: {id}")]
    OwnerNotFound {
        /// Requested owner id
        id: i64,
    },

    /// No pet stored under the given id
    #[error("Pet not found: {id}")]
    PetNotFound {
        /// Requested pet id
        id: i64,
    },

    /// A form reached persistence without a required value
    #[error("Invalid value for '{field}': {message}")]
    Validation {
        /// Offending form field
        field: String,
        /// Human readable reason
        message: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
