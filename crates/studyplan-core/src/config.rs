//! TOML-based application configuration.
//!
//! Stores the tunables for recommendation and routine generation, plus
//! optional paths to a custom task catalog and day template.
//!
//! Configuration is stored at `~/.config/studyplan/config.toml`. A missing
//! file or missing fields fall back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::routine::GeneratorConfig;

/// Recommendation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsConfig {
    /// Recommendations returned by default at the CLI surface
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    /// Recommendations requested per generated day
    #[serde(default = "default_candidate_limit")]
    pub candidate_limit: usize,
    /// High-priority candidates offered to the packer
    #[serde(default = "default_high_priority_cap")]
    pub high_priority_cap: usize,
    /// Default result count for free-time queries
    #[serde(default = "default_free_time_limit")]
    pub free_time_limit: usize,
}

impl Default for RecommendationsConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            candidate_limit: default_candidate_limit(),
            high_priority_cap: default_high_priority_cap(),
            free_time_limit: default_free_time_limit(),
        }
    }
}

/// Routine generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineConfig {
    /// Free minutes at or below which a shrunk block is dropped
    #[serde(default = "default_min_free_remainder")]
    pub min_free_remainder_minutes: u32,
}

impl Default for RoutineConfig {
    fn default() -> Self {
        Self {
            min_free_remainder_minutes: default_min_free_remainder(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/studyplan/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub recommendations: RecommendationsConfig,
    #[serde(default)]
    pub routine: RoutineConfig,
    /// Optional JSON task catalog replacing the built-in one.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Optional JSON day template replacing the built-in one.
    #[serde(default)]
    pub template_path: Option<PathBuf>,
}

impl Config {
    /// Default configuration file location.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("studyplan")
            .join("config.toml")
    }

    /// Load the configuration from the default location, falling back to
    /// defaults when the file is missing or unreadable.
    pub fn load_or_default() -> Self {
        Self::load(&Self::config_path()).unwrap_or_default()
    }

    /// Load the configuration from a specific path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&data).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Save the configuration to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    /// Save the configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        let data = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, data).map_err(|e| save_failed(e.to_string()))
    }

    /// The generation tunables this configuration describes.
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            candidate_limit: self.recommendations.candidate_limit,
            high_priority_cap: self.recommendations.high_priority_cap,
            min_free_remainder_minutes: self.routine.min_free_remainder_minutes,
        }
    }
}

// Default functions
fn default_limit() -> usize {
    5
}
fn default_candidate_limit() -> usize {
    8
}
fn default_high_priority_cap() -> usize {
    3
}
fn default_free_time_limit() -> usize {
    3
}
fn default_min_free_remainder() -> u32 {
    10
}
