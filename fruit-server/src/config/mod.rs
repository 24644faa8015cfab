//! Server configuration: listening port, data file and log file. Loaded from env.

mod server_config;


pub use server_config::ServerConfig;
