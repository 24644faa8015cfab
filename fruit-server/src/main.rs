//! Binary for the fruit store HTTP service.

use anyhow::Result;
use clap::Parser;
use fruit_server::{load_config, run_server, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Commands::Serve { port, data_file } => {
            let config = load_config(port, data_file)?;
            run_server(config).await
        }
    }
}
