//! # Fruit store HTTP service
//!
//! Wires fruit-core and fruit-storage behind an axum router. Loads config from env,
//! reloads the collection before every request and persists it after every write.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod router;
pub mod runner;
pub mod state;

pub use cli::{load_config, Cli, Commands};
pub use config::ServerConfig;
pub use router::app;
pub use runner::run_server;
pub use state::AppState;
