//! CLI commands for configuration
//!
//! Shows the resolved input locations and writes a starter settings file.

use clap::Subcommand;
use tracing::info;

use crate::config::{PlacesPaths, Settings};
use crate::error::PlacesResult;

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show resolved paths and settings
    Show,

    /// Write the current settings to places-hub.json
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

/// Handle configuration commands
pub fn handle_config_command(
    paths: &PlacesPaths,
    settings: &Settings,
    cmd: Option<ConfigCommands>,
) -> PlacesResult<()> {
    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => {
            println!("Places Hub Configuration");
            println!("========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Dataset:          {}", settings.dataset_path(paths).display());
            println!("Run results:      {}", settings.run_results_path(paths).display());
            println!("Manifest:         {}", settings.manifest_path(paths).display());
            println!();
            println!("Settings:");
            println!(
                "  Reliability threshold: {}",
                settings.default_reliability_threshold
            );
            println!("  Currency symbol:       {}", settings.currency_symbol);
        }
        ConfigCommands::Init { force } => {
            let settings_file = paths.settings_file();
            if settings_file.exists() && !force {
                println!(
                    "Settings already exist at {} (use --force to overwrite)",
                    settings_file.display()
                );
                return Ok(());
            }
            settings.save(paths)?;
            info!(path = %settings_file.display(), "wrote settings");
            println!("Settings written to: {}", settings_file.display());
        }
    }

    Ok(())
}
