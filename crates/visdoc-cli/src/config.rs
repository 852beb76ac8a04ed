//! Configuration file loading for the CLI
//!
//! This module handles finding and loading configuration files from various
//! locations (explicit path, local directory, system directory). Files with a
//! `.toml` extension are read as TOML, everything else as JSON.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use visdoc::{VisdocError, config::AppConfig};

/// File names searched for in the local and system configuration directories.
const CONFIG_FILE_NAMES: [&str; 2] = ["config.json", "config.toml"];

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse JSON configuration {path}: {message}")]
    Json { path: PathBuf, message: String },

    #[error("Failed to parse TOML configuration {path}: {message}")]
    Toml { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for VisdocError {
    fn from(err: ConfigError) -> Self {
        VisdocError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (`visdoc/config.json`, then `visdoc/config.toml`)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, VisdocError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    if let Some(local_config) = find_config_in(Path::new("visdoc")) {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("com", "visdoc", "visdoc") {
        let config_dir = proj_dirs.config_dir();

        if let Some(system_config) = find_config_in(config_dir) {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = config_dir.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn find_config_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Load configuration from a JSON or TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - Parsing fails
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, VisdocError> {
    let path = path.as_ref();

    // Check if file exists
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config = if path.extension().is_some_and(|ext| ext == "toml") {
        toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    } else {
        serde_json::from_str(&content).map_err(|e| ConfigError::Json {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    };

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_json_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("style.json");
        fs::write(
            &path,
            r##"{
                "colors": {"primary": "#000000"},
                "typography": {"heading_font": "Georgia", "code_font": "Menlo", "line_height": 1.2}
            }"##,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.colors().get("primary"), Some("#000000"));
        assert_eq!(config.colors().len(), 1);
        assert_eq!(config.typography().heading_font(), "Georgia");
        assert_eq!(config.typography().line_height(), 1.2);
    }

    #[test]
    fn test_load_toml_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[colors]\naccent = \"#FF9800\"\n\n[typography]\ncode_font = \"Iosevka\"\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.colors().get("accent"), Some("#FF9800"));
        assert_eq!(config.typography().code_font(), "Iosevka");
        assert_eq!(config.typography().heading_font(), "Inter, Roboto, system-ui");
    }

    #[test]
    fn test_load_config_with_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "typography": {"heading_font": "A", "code_font": "B", "line_height": "normal", "body_font": "C"},
                "colors": {"tint": 5}
            }"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.typography().heading_font(), "A");
        assert_eq!(config.typography().line_height(), 1.6);
        assert!(config.typography().get("body_font").is_some());
        assert_eq!(config.colors().len(), 1);
        assert_eq!(config.colors().get("tint"), None);
    }

    #[test]
    fn test_load_toml_config_with_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[colors]\ntint = 5\n\n[typography]\nline_height = \"normal\"\nweight = 400\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.typography().line_height(), 1.6);
        assert_eq!(config.typography().code_font(), "Fira Code, JetBrains Mono");
        assert!(config.colors().color("tint").is_err());
    }

    #[test]
    fn test_empty_json_object_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = load_config(Some(&path)).unwrap_err();

        assert!(matches!(err, VisdocError::Config(_)));
        assert!(err.to_string().contains("Missing configuration file"));
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"colors\": ").unwrap();

        let err = load_config(Some(&path)).unwrap_err();

        assert!(matches!(err, VisdocError::Config(_)));
        assert!(err.to_string().contains("Failed to parse JSON configuration"));
    }

    #[test]
    fn test_find_config_prefers_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("config.toml"), "").unwrap();
        assert_eq!(
            find_config_in(dir.path()),
            Some(dir.path().join("config.toml"))
        );

        fs::write(dir.path().join("config.json"), "{}").unwrap();
        assert_eq!(
            find_config_in(dir.path()),
            Some(dir.path().join("config.json"))
        );
    }
}
