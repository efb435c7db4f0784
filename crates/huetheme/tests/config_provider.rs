#![forbid(unsafe_code)]

//! Building providers from config files (`config` feature).
//!
//! Run:
//!   cargo test -p huetheme --features config --test config_provider

use std::io::Write;

use huetheme::prelude::*;
use huetheme::{ConfigError, ThemeConfig, provider_from_toml_file};

#[test]
fn toml_file_drives_provider() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "hue = 180").unwrap();
    writeln!(file, "extended_roles = false").unwrap();

    let provider = provider_from_toml_file(file.path()).unwrap();
    assert_eq!(provider.hue(), 180.0);
    let theme = provider.provide(|| use_theme().unwrap());
    assert_eq!(theme.palette.primary_colour1.to_string(), "hsl(180, 100%, 70%)");
    assert!(!theme.palette.has_extended_roles());
}

#[test]
fn invalid_file_surfaces_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "hue = inf").unwrap();

    let err = provider_from_toml_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::Validation(_))));
}

#[test]
fn json_config_round_trips_through_serde() {
    let config = ThemeConfig {
        hue: 75.5,
        extended_roles: true,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(ThemeConfig::from_json_str(&json).unwrap(), config);
    assert_eq!(
        *ThemeProvider::from_config(&config).theme(),
        config.theme()
    );
}
