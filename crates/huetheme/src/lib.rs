#![forbid(unsafe_code)]

//! huetheme public facade crate.
//!
//! Re-exports the palette generator and the theme context, and offers a
//! prelude for consumers that only want to read the current theme.
//!
//! ```
//! use huetheme::prelude::*;
//!
//! fn header() -> huetheme::Result<String> {
//!     let theme = use_theme()?;
//!     Ok(theme.palette.primary_colour2.to_string())
//! }
//!
//! assert!(header().is_err());
//! let css = theme_provider(240.0, header).unwrap();
//! assert_eq!(css, "hsl(240, 100%, 60%)");
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize` for themes and palettes, string (de)serialization
//!   for [`Hsl`].
//! - `config`: load [`ThemeConfig`] from TOML or JSON; implies `serde`.

// --- Palette re-exports ----------------------------------------------------

#[cfg(feature = "config")]
pub use huetheme_palette::ConfigError;
pub use huetheme_palette::{
    BASE_LIGHTNESS, BASE_SATURATION, ColorRole, DEFAULT_HUE, Hsl, LIGHTNESS_LADDER, Neutrals,
    Palette, PaletteOptions, ParseColorError, Rgb, Theme, ThemeConfig, UnknownRoleError,
    adjust_lightness, complementary_hue, default_palette, default_theme, format_color,
    generate_palette, generate_palette_with, generate_theme, generate_theme_with,
};

// --- Context re-exports ----------------------------------------------------

pub use huetheme_context::{
    ThemeError, ThemeProvider, ThemeScope, scope_depth, theme_provider, use_theme, with_theme,
};

// --- Errors ----------------------------------------------------------------

/// Top-level error type for huetheme consumers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A theme was read outside every scope.
    #[error(transparent)]
    Theme(#[from] ThemeError),
    /// A color string did not decode.
    #[error(transparent)]
    ParseColor(#[from] ParseColorError),
    /// A role key named no role.
    #[error(transparent)]
    UnknownRole(#[from] UnknownRoleError),
    /// A theme config failed to load.
    #[cfg(feature = "config")]
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Standard result type for huetheme APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Load a [`ThemeConfig`] from a TOML file and build a provider from it.
#[cfg(feature = "config")]
pub fn provider_from_toml_file(path: impl AsRef<std::path::Path>) -> Result<ThemeProvider> {
    let config = ThemeConfig::from_toml_file(path)?;
    Ok(ThemeProvider::from_config(&config))
}

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ColorRole, Error, Hsl, Palette, Result, Theme, ThemeProvider, theme_provider, use_theme,
        with_theme,
    };

    pub use crate::{context, palette};
}

pub use huetheme_context as context;
pub use huetheme_palette as palette;
