//! Configuration inspection commands.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use crate::error::FaktumError;

/// Run a config subcommand.
pub fn run_config(action: &ConfigAction, settings: Settings) -> anyhow::Result<()> {
    match action {
        ConfigAction::Init => {
            let config_path = Settings::default_config_path();
            if config_path.exists() {
                Output::info(&format!("Config file exists: {}", config_path.display()));
            } else {
                settings.save_to(&config_path)?;
                Output::success(&format!("Created config file: {}", config_path.display()));
            }
        }
        ConfigAction::Show => {
            let content = toml::to_string_pretty(&settings)
                .map_err(|e| FaktumError::Config(e.to_string()))?;
            println!("{}", content);
        }
        ConfigAction::Path => {
            println!("{}", Settings::default_config_path().display());
        }
    }

    Ok(())
}
