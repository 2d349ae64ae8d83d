//! Editor configuration
//!
//! Stores user preferences in `~/.config/docvars/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::code_style::{CodeStyle, TabSettings, DEFAULT_TAB_SIZE};

/// Editor font settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontConfig {
    #[serde(default = "default_font_family")]
    pub family: String,
    /// Point size before zoom
    #[serde(default = "default_font_size")]
    pub size: u32,
    /// Zoom in percent
    #[serde(default = "default_font_zoom")]
    pub zoom: u32,
}

fn default_font_family() -> String {
    "JetBrains Mono".to_string()
}

fn default_font_size() -> u32 {
    14
}

fn default_font_zoom() -> u32 {
    100
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: default_font_family(),
            size: default_font_size(),
            zoom: default_font_zoom(),
        }
    }
}

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Selected theme id (e.g., "default-dark", "default-light")
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub font: FontConfig,
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,
}

fn default_theme() -> String {
    "default-dark".to_string()
}

fn default_tab_size() -> usize {
    DEFAULT_TAB_SIZE
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            font: FontConfig::default(),
            tab_size: default_tab_size(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from_path(&path)
    }

    /// Load config from `path`, degrading to defaults on any failure
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to_path(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn tab_settings(&self) -> TabSettings {
        TabSettings {
            tab_size: self.tab_size,
        }
    }
}

impl CodeStyle for EditorConfig {
    fn current_tab_settings(&self) -> TabSettings {
        self.tab_settings()
    }
}
