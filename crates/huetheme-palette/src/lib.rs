#![forbid(unsafe_code)]

//! Hue-driven color palettes for huetheme.
//!
//! # Role in huetheme
//! `huetheme-palette` is the pure half of the workspace. It turns one hue
//! into a fixed-shape [`Palette`] and wraps it in a [`Theme`]. It knows
//! nothing about scopes or rendering; `huetheme-context` publishes the
//! themes built here.
//!
//! # This crate provides
//! - [`generate_palette`] and [`generate_palette_with`], the generator.
//! - [`adjust_lightness`] and [`complementary_hue`], its arithmetic steps.
//! - [`Hsl`] color values with a canonical `hsl(h, s%, l%)` encoding.
//! - [`ColorRole`] for the closed set of palette slots.
//! - [`default_theme`], computed once from [`DEFAULT_HUE`].
//! - [`ThemeConfig`], optionally loaded from TOML or JSON (`config` feature).
//!
//! # Example
//!
//! ```
//! use huetheme_palette::{ColorRole, generate_palette};
//!
//! let palette = generate_palette(180.0);
//! assert_eq!(palette.primary_colour1.to_string(), "hsl(180, 100%, 70%)");
//! assert_eq!(
//!     palette.get(ColorRole::SecondaryColour3).map(ToString::to_string),
//!     Some("hsl(0, 100%, 50%)".to_owned()),
//! );
//! ```

/// HSL color values, parsing, and sRGB conversion.
pub mod color;
/// Theme configuration and loading.
pub mod config;
/// The palette generator.
pub mod palette;
/// Semantic palette roles.
pub mod role;
/// Theme wrapper and the default theme.
pub mod theme;

pub use color::{Channel, Hsl, ParseColorError, Rgb, format_color};
#[cfg(feature = "config")]
pub use config::ConfigError;
pub use config::ThemeConfig;
pub use palette::{
    BASE_LIGHTNESS, BASE_SATURATION, LIGHTNESS_LADDER, Neutrals, Palette, PaletteOptions,
    adjust_lightness, complementary_hue, generate_palette, generate_palette_with,
};
pub use role::{ColorRole, UnknownRoleError};
pub use theme::{
    DEFAULT_HUE, Theme, default_palette, default_theme, generate_theme, generate_theme_with,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_parses_back_from_its_color() {
        let palette = generate_palette(33.0);
        for (role, color) in palette.entries() {
            let parsed: Hsl = color.to_string().parse().unwrap();
            assert_eq!(&parsed, color, "role {role}");
        }
    }

    #[test]
    fn palettes_with_same_hue_are_equal() {
        assert_eq!(generate_palette(123.0), generate_palette(123.0));
        assert_ne!(generate_palette(123.0), generate_palette(124.0));
    }

    #[cfg(feature = "serde")]
    mod serde_shape {
        use super::*;

        #[test]
        fn color_serializes_as_css_string() {
            let json = serde_json::to_string(&Hsl::new(180.0, 100.0, 70.0)).unwrap();
            assert_eq!(json, r#""hsl(180, 100%, 70%)""#);
            let back: Hsl = serde_json::from_str(&json).unwrap();
            assert_eq!(back, Hsl::new(180.0, 100.0, 70.0));
        }

        #[test]
        fn color_deserialize_rejects_bad_string() {
            assert!(serde_json::from_str::<Hsl>(r#""hsl(1, 2, 3)""#).is_err());
        }

        #[test]
        fn theme_serializes_with_role_keys() {
            let value = serde_json::to_value(generate_theme(180.0)).unwrap();
            let palette = value["palette"].as_object().unwrap();
            assert_eq!(palette.len(), 20);
            for role in ColorRole::ALL {
                assert!(palette.contains_key(role.key()), "missing {role}");
            }
            assert_eq!(palette["primaryColour1"], "hsl(180, 100%, 70%)");
            assert_eq!(palette["grey4"], "hsl(0, 0%, 20%)");
        }

        #[test]
        fn flat_palette_omits_extended_keys() {
            let palette = generate_palette_with(180.0, &PaletteOptions::FLAT);
            let value = serde_json::to_value(&palette).unwrap();
            let map = value.as_object().unwrap();
            assert_eq!(map.len(), 14);
            assert!(!map.contains_key("white"));
        }
    }
}
