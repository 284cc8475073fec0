//! Removal directives loaded from environment variables or a TOML file.
//!
//! Each directive is an optional comma-separated list; an absent directive
//! means the matching operation is never registered at all.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors from loading a settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("settings file '{path}': failed to parse: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// The three removal directives. Values are raw specs, parsed fresh on
/// every hook invocation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Top-level menu search terms, comma-separated.
    #[serde(default)]
    pub remove_menus: Option<String>,

    /// Submenu search terms, comma-separated, each optionally
    /// `parent|child`.
    #[serde(default)]
    pub remove_submenus: Option<String>,

    /// Dashboard widget search terms, comma-separated.
    #[serde(default)]
    pub remove_dashboard_boxes: Option<String>,
}

impl Config {
    /// Load directives from environment variables
    /// (`ADMIN_TRIM_REMOVE_MENUS`, `ADMIN_TRIM_REMOVE_SUBMENUS`,
    /// `ADMIN_TRIM_REMOVE_DASHBOARD_BOXES`).
    pub fn from_env() -> Self {
        Self {
            remove_menus: env::var("ADMIN_TRIM_REMOVE_MENUS").ok(),
            remove_submenus: env::var("ADMIN_TRIM_REMOVE_SUBMENUS").ok(),
            remove_dashboard_boxes: env::var("ADMIN_TRIM_REMOVE_DASHBOARD_BOXES").ok(),
        }
    }

    /// Load directives from a TOML file with `remove_menus`,
    /// `remove_submenus`, and `remove_dashboard_boxes` keys, all optional.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Check if no directive is set.
    pub fn is_empty(&self) -> bool {
        self.remove_menus.is_none()
            && self.remove_submenus.is_none()
            && self.remove_dashboard_boxes.is_none()
    }
}
