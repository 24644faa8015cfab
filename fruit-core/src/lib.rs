//! # fruit-core
//!
//! Core types for the fruit store: [`Fruit`], [`FruitCollection`] and its by-id lookup,
//! the create/update payload rules ([`NewFruit`], [`FruitPatch`]), error types,
//! and tracing initialization. Transport-agnostic; used by fruit-storage and fruit-server.

pub mod collection;
pub mod error;
pub mod logger;
pub mod types;
pub mod validation;

pub use collection::FruitCollection;
pub use error::{FruitError, Result, ValidationError};
pub use logger::{init_tracing, log_filter, DEFAULT_LOG_FILTER};
pub use types::{Fruit, FruitField};
pub use validation::{is_truthy, FruitPatch, NewFruit};
