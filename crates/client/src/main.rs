//! Command line host for the CustomStamina mod.
//!
//! Loads a host globals document, runs the mod against its stamina table
//! and writes the result back.
//!
//! ```bash
//! custom-stamina apply --globals database/globals.json --config config/config.json
//! custom-stamina init-config --globals database/globals.json --output config/config.json
//! custom-stamina fields
//! ```

mod commands;
mod config;
mod logging;

use anyhow::Result;
use clap::Parser;
use commands::{Apply, Fields, InitConfig};
use config::CliConfig;

/// Adjust breath, leg and hand stamina of a host globals document
#[derive(Parser)]
#[command(name = "custom-stamina")]
#[command(about = "Stamina adjustment mod runner", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run the mod against a globals document
    Apply(Apply),

    /// Create a config file from the current stamina table
    InitConfig(InitConfig),

    /// List the adjustable fields
    Fields(Fields),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = CliConfig::from_env();
    let _guard = logging::setup_logging(&config)?;

    match cli.command {
        Command::Apply(cmd) => cmd.execute(&config).await,
        Command::InitConfig(cmd) => cmd.execute().await,
        Command::Fields(cmd) => cmd.execute(),
    }
}
