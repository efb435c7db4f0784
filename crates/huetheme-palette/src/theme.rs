#![forbid(unsafe_code)]

//! The theme wrapper and the process-wide default theme.

use std::sync::OnceLock;

use tracing::debug;

use crate::palette::{Palette, PaletteOptions, generate_palette_with};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Hue of the process-wide default theme.
pub const DEFAULT_HUE: f64 = 60.0;

/// What consumers receive from a theme scope.
///
/// Serializes as `{ "palette": { ... } }`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Theme {
    pub palette: Palette,
}

impl Theme {
    #[must_use]
    pub const fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl From<Palette> for Theme {
    fn from(palette: Palette) -> Self {
        Self::new(palette)
    }
}

/// Build the extended theme for `hue`.
#[must_use]
pub fn generate_theme(hue: f64) -> Theme {
    generate_theme_with(hue, &PaletteOptions::EXTENDED)
}

#[must_use]
pub fn generate_theme_with(hue: f64, options: &PaletteOptions) -> Theme {
    Theme::new(generate_palette_with(hue, options))
}

static DEFAULT_THEME: OnceLock<Theme> = OnceLock::new();

/// The default theme, computed once from [`DEFAULT_HUE`] on first access.
pub fn default_theme() -> &'static Theme {
    DEFAULT_THEME.get_or_init(|| {
        debug!(hue = DEFAULT_HUE, "building default theme");
        generate_theme(DEFAULT_HUE)
    })
}

/// Shorthand for `&default_theme().palette`.
pub fn default_palette() -> &'static Palette {
    &default_theme().palette
}
