//! Core error types for the asset register.
//!
//! The store and calculator never fail: a missing asset is reported as `None`
//! or treated as a no-op. Errors only come from the service boundary, where
//! create and edit input is validated before it reaches the store.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the asset register.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Asset ID '{0}' already exists")]
    DuplicateId(String),

    #[error("Unknown depreciation method: {0}")]
    UnknownDepreciationMethod(String),
}
