/// Application configuration: load, save, and sanitize.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use list_pad_mod_history::RedoPolicy;
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the config file location.
const CONFIG_ENV_VAR: &str = "LIST_PAD_CONFIG";

const CONFIG_FILE_NAME: &str = "list-pad.json";

const DEFAULT_SEPARATOR: &str = " -> ";

/// Theme names accepted in `current_theme`.
pub const THEME_MODES: [&str; 3] = ["System", "Dark", "Light"];

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub current_theme: String,
    pub redo_policy: RedoPolicy,
    /// Joins elements in the Traverse message.
    pub traverse_separator: String,
    pub font_size: f32,
    /// Whether list rows are prefixed with their index.
    pub show_indices: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            current_theme: "System".to_string(),
            redo_policy: RedoPolicy::default(),
            traverse_separator: DEFAULT_SEPARATOR.to_string(),
            font_size: 16.0,
            show_indices: true,
        }
    }
}

impl AppConfig {
    /// Returns the config file path.
    ///
    /// Resolution order:
    /// 1. `LIST_PAD_CONFIG` environment variable
    /// 2. `list-pad/list-pad.json` under the user's config directory
    /// 3. `list-pad.json` in the working directory
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.is_empty() {
                return PathBuf::from(path);
            }
        }
        dirs::config_dir()
            .map(|d| d.join("list-pad").join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (unreadable file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str::<AppConfig>(&contents) {
                    Ok(mut config) => {
                        config.sanitize();
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {}: {e}", path.display());
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {}: {e}", path.display());
                }
            }
            // Return defaults on error (don't overwrite broken file)
            Self::default()
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e:#}", path.display());
            }
            config
        }
    }

    /// Saves config to `path` as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Clamps values to valid ranges and resets invalid fields.
    pub fn sanitize(&mut self) {
        if !self.font_size.is_finite() {
            self.font_size = Self::default().font_size;
        }
        self.font_size = self.font_size.clamp(8.0, 48.0);

        if !THEME_MODES.contains(&self.current_theme.as_str()) {
            self.current_theme = "System".to_string();
        }
        if self.traverse_separator.is_empty() {
            self.traverse_separator = DEFAULT_SEPARATOR.to_string();
        }
    }
}
