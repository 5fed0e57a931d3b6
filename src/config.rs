//! User configuration and preferences

use crate::app::DEFAULT_TREE_DEPTH;
use crate::error::{FsViewError, Result};
use crate::preview::highlight::DEFAULT_THEME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Whether the welcome dialog has been shown
    pub welcome_shown: bool,
    /// List dot-files and hidden entries
    pub show_hidden: bool,
    /// syntect theme used for code previews
    pub syntax_theme: String,
    /// Levels expanded in tree view
    pub tree_depth: usize,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            welcome_shown: false,
            show_hidden: true,
            syntax_theme: DEFAULT_THEME.to_string(),
            tree_depth: DEFAULT_TREE_DEPTH,
        }
    }
}

impl UserConfig {
    /// Get the config file path (~/.config/fsview/config.json)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fsview").join("config.json"))
    }

    fn require_path() -> Result<PathBuf> {
        Self::config_path().ok_or_else(|| {
            FsViewError::ConfigError("Could not determine config directory".to_string())
        })
    }

    /// Load config from file, or create default if doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::require_path()?)
    }

    /// Like [`UserConfig::load`], but falls back to defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::warn!("using default configuration: {}", e);
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            FsViewError::ConfigError(format!("Failed to read config file: {}", e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            FsViewError::ConfigError(format!("Failed to parse config file: {}", e))
        })
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::require_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                FsViewError::ConfigError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FsViewError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, contents).map_err(|e| {
            FsViewError::ConfigError(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }
}
