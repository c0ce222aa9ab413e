//! Config command implementations

use crate::cli::commands::CommandError;
use crate::config::{load_config, save_config, ConfigOverrides, GlobalConfig};

/// Write a configuration file with default values
pub fn init(force: bool, overrides: &ConfigOverrides) -> Result<(), CommandError> {
    let merged = ConfigOverrides::from_env().merge(overrides.clone());
    let config_path = merged.config_path()?;

    if config_path.exists() && !force {
        return Err(CommandError::ConfigExists(config_path));
    }

    save_config(&GlobalConfig::default(), &config_path)?;

    println!("✓ Configuration initialized");
    println!("  Config file: {}", config_path.display());

    Ok(())
}

/// Print the configuration after file, environment and CLI overrides
pub fn show(overrides: &ConfigOverrides) -> Result<(), CommandError> {
    let config = load_config(overrides.clone())?;
    let json = serde_json::to_string_pretty(&config).map_err(crate::config::ConfigError::from)?;

    println!("{}", json);

    Ok(())
}
