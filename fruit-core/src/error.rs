//! Error types for the fruit core.
//!
//! [`FruitError`] is the top-level error; [`ValidationError`] describes a rejected payload.

use thiserror::Error;

use crate::types::FruitField;

/// Top-level error for the fruit store; raised while loading configuration.
#[derive(Error, Debug)]
pub enum FruitError {
    #[error("Config error: {0}")]
    Config(String),
}

/// Reasons a create or update payload is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Fruit {0} was not provided")]
    MissingField(FruitField),

    #[error("At least one field must be sent to update")]
    EmptyUpdate,
}

/// Result type for core operations; uses [`FruitError`].
pub type Result<T> = std::result::Result<T, FruitError>;
