mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::scoring::validate_scoring;

/// Get the config directory path (~/.config/growth-rules/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("growth-rules"))
}

/// Get the default config file path (~/.config/growth-rules/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Parse and validate configuration from YAML text
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = serde_saphyr::from_str(content).context("Failed to parse config: invalid YAML")?;

    if let Some(ref scoring) = config.scoring {
        if let Err(errors) = validate_scoring(scoring) {
            anyhow::bail!("Invalid scoring config:\n  - {}", errors.join("\n  - "));
        }
    }

    Ok(config)
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/growth-rules/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - The home directory cannot be determined (default path only)
/// - The config file does not exist or cannot be read
/// - The YAML cannot be parsed
/// - The scoring section fails validation (all problems are reported)
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        anyhow::bail!("Config file not found at {}", config_path.display());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config = parse_config(&config_content)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    debug!(path = %config_path.display(), custom_scoring = config.scoring.is_some(), "loaded config");
    Ok(config)
}
