#![forbid(unsafe_code)]

//! Theme configuration.
//!
//! [`ThemeConfig`] holds the inputs a provider needs before any render
//! happens. With the `config` feature it can be loaded from TOML or JSON:
//!
//! ```toml
//! # huetheme.toml
//! hue = 210
//! extended_roles = false
//! ```
//!
//! ```rust,ignore
//! let config = ThemeConfig::from_toml_file("huetheme.toml")?;
//! let config = ThemeConfig::from_json_str(r#"{ "hue": 210 }"#)?;
//! ```
//!
//! Missing fields fall back to [`ThemeConfig::default`], which reproduces
//! [`default_theme`](crate::default_theme) exactly.

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "config")]
use thiserror::Error;
#[cfg(feature = "config")]
use tracing::{debug, warn};

use crate::palette::PaletteOptions;
use crate::theme::{DEFAULT_HUE, Theme, generate_theme_with};

/// Inputs for building a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThemeConfig {
    /// Base hue in degrees.
    pub hue: f64,
    /// Include the greyscale roles.
    pub extended_roles: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            hue: DEFAULT_HUE,
            extended_roles: PaletteOptions::default().extended_roles,
        }
    }
}

impl ThemeConfig {
    #[must_use]
    pub const fn options(&self) -> PaletteOptions {
        PaletteOptions {
            extended_roles: self.extended_roles,
        }
    }

    /// Build the configured theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        generate_theme_with(self.hue, &self.options())
    }

    /// Check parameters. An empty list means the config is valid.
    ///
    /// The generator itself accepts any hue; this only rejects values that
    /// cannot come from a sensible config file.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if !self.hue.is_finite() {
            errors.push(format!("hue must be finite, got {}", self.hue));
        }
        errors
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str::<Self>(s)?.checked()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(s)?.checked()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    #[cfg(feature = "config")]
    fn checked(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            debug!(
                hue = self.hue,
                extended_roles = self.extended_roles,
                "loaded theme config"
            );
            Ok(self)
        } else {
            warn!(?errors, "rejected theme config");
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Errors from loading a [`ThemeConfig`].
#[cfg(feature = "config")]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
