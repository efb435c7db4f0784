#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised by the theme context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The accessor ran with no enclosing theme scope on this thread.
    ///
    /// This is an integration bug in the calling code, not a condition to
    /// recover from with a fallback theme.
    #[error("use_theme must be used within a ThemeProvider")]
    MissingScope,
}
