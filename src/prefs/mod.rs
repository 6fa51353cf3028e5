//! Reader preferences persisted between runs
//!
//! Only the colour theme is stored today. The file is versioned JSON; a
//! missing, unreadable or outdated file falls back to the defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Colour theme for rendered pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => anyhow::bail!("Unknown theme: {}. Available: light, dark", other),
        }
    }
}

/// Stored preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Version of the file format
    pub version: u32,
    pub theme: Theme,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            version: Self::VERSION,
            theme: Theme::default(),
        }
    }
}

impl Preferences {
    /// Current file format version
    const VERSION: u32 = 1;

    /// Load preferences from `path`, or the defaults
    pub fn load(path: &Path) -> Self {
        if let Ok(content) = fs::read_to_string(path) {
            match serde_json::from_str::<Preferences>(&content) {
                Ok(prefs) if prefs.version == Self::VERSION => return prefs,
                Ok(_) => tracing::info!("Preferences version mismatch, using defaults"),
                Err(e) => tracing::warn!("Ignoring unreadable preferences {:?}: {}", path, e),
            }
        }
        Self::default()
    }

    /// Save preferences to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;
        Ok(())
    }

    /// Flip the theme and persist the result
    pub fn toggle_theme(&mut self, path: &Path) -> Result<Theme> {
        self.theme = self.theme.toggled();
        self.save(path)?;
        tracing::debug!("Theme set to {}", self.theme);
        Ok(self.theme)
    }
}

/// Location of the preference file for a site
pub fn prefs_path(base_dir: &Path, prefs_file: &str) -> PathBuf {
    base_dir.join(prefs_file)
}
