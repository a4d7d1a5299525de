//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::Path;
use strobe_common::BitWidth;

/// The smallest legal vector count (the directed prologue has 4 cases).
const MIN_VECTOR_COUNT: u32 = 4;

/// Loads and validates a `strobe.toml` configuration from a project
/// directory.
///
/// Reads `<project_dir>/strobe.toml`, parses it, and validates the
/// generation settings.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let config_path = project_dir.join("strobe.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `strobe.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and generation settings are
/// usable.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project.name.is_empty() {
        return Err(ConfigError::MissingField("project.name".to_string()));
    }
    if let Err(e) = BitWidth::new(config.vectors.bit_width) {
        return Err(ConfigError::ValidationError(e.to_string()));
    }
    if config.vectors.vector_count < MIN_VECTOR_COUNT {
        return Err(ConfigError::ValidationError(format!(
            "vectors.vector_count is {}, must be at least {MIN_VECTOR_COUNT}",
            config.vectors.vector_count
        )));
    }
    if config.vectors.output.is_empty() {
        return Err(ConfigError::MissingField("vectors.output".to_string()));
    }
    Ok(())
}
