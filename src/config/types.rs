// Configuration type definitions

use serde::Deserialize;

use super::api_types::ApiConfig;
use crate::stats::StatField;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Statistics configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StatsConfig {
    /// Attribute the stats card summarizes on startup
    #[serde(default)]
    pub field: StatField,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}
