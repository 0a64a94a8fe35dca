//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from an explicit path, the working directory or the platform config
//! directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use mermend::{MermendError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Invalid configuration: {0}")]
    Validation(String),
}

impl From<ConfigError> for MermendError {
    fn from(err: ConfigError) -> Self {
        MermendError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (mermend/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
/// - The configured header does not open with a diagram keyword
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, MermendError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("mermend/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "orreryworks", "mermend") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, MermendError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&config)?;

    Ok(config)
}

/// Reject settings the fixer would turn into broken diagrams.
fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let header = config.fixer().header();
    if mermend::diagram_keyword(header).is_none() {
        return Err(ConfigError::Validation(format!(
            "fixer header `{header}` must start with one of: {}",
            mermend::DIAGRAM_KEYWORDS.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use mermend::config::IdentifierSeverity;

    use super::*;

    #[test]
    fn test_explicit_config_is_loaded() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[fixer]\nheader = \"graph LR\"\n\n[report]\nidentifier_severity = \"issue\"\n",
        )
        .expect("Failed to write config");

        let config = load_config(Some(&path)).expect("config loads");
        assert_eq!(config.fixer().header(), "graph LR");
        assert_eq!(
            config.report().identifier_severity(),
            IdentifierSeverity::Issue
        );
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempdir().expect("Failed to create temp directory");
        let err = load_config(Some(dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, MermendError::Config(msg) if msg.starts_with("Missing configuration file")));
    }

    #[test]
    fn test_header_without_keyword_is_rejected() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[fixer]\nheader = \"chart TD\"\n").expect("Failed to write config");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(
            matches!(&err, MermendError::Config(msg) if msg.starts_with("Invalid configuration") && msg.contains("chart TD"))
        );
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[fixer\nheader = 1").expect("Failed to write config");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, MermendError::Config(msg) if msg.starts_with("Failed to parse TOML")));
    }
}
