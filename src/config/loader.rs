//! Deployment descriptor loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::DeploymentConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::mapping::MappingTable;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate a descriptor from TOML text.
pub fn parse_config(content: &str) -> Result<DeploymentConfig, ConfigError> {
    let config: DeploymentConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate a descriptor from a TOML file.
pub fn load_config(path: &Path) -> Result<DeploymentConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load a descriptor and build its mapping table.
pub fn load_table(path: &Path) -> Result<MappingTable, ConfigError> {
    let config = load_config(path)?;
    Ok(MappingTable::from_config(&config))
}
