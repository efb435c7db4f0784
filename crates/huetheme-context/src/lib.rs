#![forbid(unsafe_code)]

//! Scoped theme propagation for huetheme.
//!
//! # Role in huetheme
//! `huetheme-context` publishes a [`Theme`](huetheme_palette::Theme) to a
//! subtree of consumers without threading it through every call. A
//! [`ThemeProvider`] owns and memoizes the theme; [`use_theme`] reads it from
//! anywhere below an active scope.
//!
//! # Example
//!
//! ```
//! use huetheme_context::{ThemeProvider, use_theme};
//!
//! fn badge() -> String {
//!     let theme = use_theme().expect("badge rendered outside a ThemeProvider");
//!     theme.palette.primary_colour1.to_string()
//! }
//!
//! let mut provider = ThemeProvider::new(180.0);
//! assert_eq!(provider.provide(badge), "hsl(180, 100%, 70%)");
//!
//! // Re-rendering with the same hue keeps the same theme instance.
//! let before = provider.theme();
//! let after = provider.render(180.0);
//! assert!(std::rc::Rc::ptr_eq(&before, &after));
//! ```

/// Context error type.
pub mod error;
/// Memoizing provider.
pub mod provider;
/// Thread-local scope stack and the read accessor.
pub mod scope;

pub use error::ThemeError;
pub use provider::{ThemeProvider, theme_provider};
pub use scope::{ThemeScope, scope_depth, use_theme, with_theme};
