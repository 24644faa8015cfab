//! CLI parser and config loading.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::ServerConfig;

#[derive(Parser)]
#[command(name = "fruit-server")]
#[command(about = "HTTP CRUD service for a file-backed fruit collection", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the HTTP API (config from env; flags override PORT and DATA_FILE).
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short, long)]
        data_file: Option<PathBuf>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Serve {
            port: None,
            data_file: None,
        }
    }
}

/// Loads [`ServerConfig`] from env, applying CLI overrides.
pub fn load_config(port: Option<u16>, data_file: Option<PathBuf>) -> Result<ServerConfig> {
    Ok(ServerConfig::load(port, data_file)?)
}
