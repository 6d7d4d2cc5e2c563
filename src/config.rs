// Configuration module for comiq
// This module handles loading and parsing configuration from ~/.config/comiq/config.toml

pub mod api_types;
mod types;

pub use api_types::ApiConfig;
pub use types::{ClipboardBackend, ClipboardConfig, Config, StatsConfig};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/comiq/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from an explicit path with the same fallback rules
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            #[cfg(debug_assertions)]
            log::debug!("Config parsed successfully: {:?}", config.api);
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e.message())),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/comiq/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("comiq")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatField;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_config_path_location() {
        let path = get_config_path();
        let path_str = path.to_string_lossy();
        assert!(
            path_str.ends_with("comiq/config.toml") || path_str.ends_with("comiq\\config.toml"),
            "unexpected config path: {}",
            path_str
        );
    }

    #[test]
    fn test_missing_file_returns_defaults_without_warning() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from(&dir.path().join("absent.toml"));
        assert!(result.warning.is_none());
        assert_eq!(result.config.api, ApiConfig::default());
    }

    #[test]
    fn test_valid_file_is_loaded() {
        let (_dir, path) = write_config("[api]\npublic_key = \"abc\"\n\n[stats]\nfield = \"story-count\"\n");
        let result = load_config_from(&path);
        assert!(result.warning.is_none());
        assert_eq!(result.config.api.public_key.as_deref(), Some("abc"));
        assert_eq!(result.config.stats.field, StatField::StoryCount);
    }

    #[test]
    fn test_malformed_file_falls_back_with_warning() {
        let (_dir, path) = write_config("[api\npublic_key = \"abc\"");
        let result = load_config_from(&path);
        assert_eq!(result.config.api, ApiConfig::default());
        let warning = result.warning.unwrap();
        assert!(warning.starts_with("Invalid config"), "got: {}", warning);
    }

    #[test]
    fn test_invalid_value_falls_back_with_warning() {
        let (_dir, path) = write_config("[clipboard]\nbackend = \"pbcopy\"\n");
        let result = load_config_from(&path);
        assert_eq!(result.config.clipboard.backend, ClipboardBackend::Auto);
        assert!(result.warning.is_some());
    }
}
