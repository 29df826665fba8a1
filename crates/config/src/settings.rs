// Application settings
// Loaded from ~/.config/ledgercheck/settings.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Report format for `compare`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text table (default)
    #[default]
    Human,
    /// Pretty-printed JSON document
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,

    /// List every matched provider, not only those with differences
    pub show_all: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            show_all: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Filter directive, e.g. "warn" or "ledgercheck_recon=debug"
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub output: OutputSettings,
    pub log: LogSettings,
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ledgercheck");
        config_dir.join("settings.toml")
    }

    /// Load settings from the default location, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from `path`. A missing file means defaults; an unreadable
    /// or invalid file is reported and also yields defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Error parsing {}: {}", path.display(), e);
                    eprintln!("Using default settings");
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| e.to_string())
    }

    /// Get the config file path for display
    pub fn config_path_display() -> String {
        Self::config_path().to_string_lossy().to_string()
    }
}
