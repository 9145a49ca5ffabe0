//! Configuration commands.

use clap::Subcommand;
use std::path::PathBuf;

use taskdeck_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Override the snapshot file location
    SetSnapshot {
        /// Path to the snapshot JSON file
        path: PathBuf,
    },
    /// Toggle colored list output
    SetColor {
        /// true or false
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
        ConfigAction::SetSnapshot { path } => {
            let mut config = Config::load()?;
            config.data.snapshot_file = Some(path.clone());
            config.save()?;
            println!("Snapshot file set to {}", path.display());
        }
        ConfigAction::SetColor { value } => {
            let mut config = Config::load()?;
            config.display.color = value;
            config.save()?;
            println!("Color output: {value}");
        }
    }

    Ok(())
}
