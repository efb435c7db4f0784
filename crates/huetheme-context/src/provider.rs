#![forbid(unsafe_code)]

//! Memoizing theme provider.
//!
//! # Design
//!
//! [`ThemeProvider`] owns the current [`Theme`] behind an `Rc` together with
//! the hue it was built from. Each [`render`](ThemeProvider::render) compares
//! the incoming hue with the stored one:
//!
//! - same hue: the stored `Rc` is handed out again, nothing is allocated;
//! - different hue: a brand-new theme replaces the old one wholesale.
//!
//! Consumers that cache on `Rc::ptr_eq` therefore see a stable reference for
//! as long as the hue is unchanged.
//!
//! Hues are compared by bit pattern, so a NaN hue memoizes like any other
//! value and `0.0` and `-0.0` count as different inputs.
//!
//! # Failure Modes
//!
//! None. Palette generation is total; the only error in this crate comes
//! from reading a theme outside a scope (see [`crate::scope`]).

use std::rc::Rc;

use huetheme_palette::{DEFAULT_HUE, PaletteOptions, Theme, ThemeConfig, generate_theme_with};
use tracing::{debug, info_span, trace};
use web_time::Instant;

use crate::scope::ThemeScope;

/// Owner of a memoized theme for one subtree of consumers.
#[derive(Debug)]
pub struct ThemeProvider {
    hue: f64,
    options: PaletteOptions,
    theme: Rc<Theme>,
    /// Number of palettes computed so far; starts at 1.
    generation: u64,
}

impl ThemeProvider {
    /// Provider with the extended palette for `hue`.
    #[must_use]
    pub fn new(hue: f64) -> Self {
        Self::with_options(hue, PaletteOptions::default())
    }

    #[must_use]
    pub fn with_options(hue: f64, options: PaletteOptions) -> Self {
        let theme = compute(hue, &options, 1);
        Self {
            hue,
            options,
            theme: Rc::new(theme),
            generation: 1,
        }
    }

    #[must_use]
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self::with_options(config.hue, config.options())
    }

    /// Re-render with `hue`, recomputing only if it changed.
    pub fn render(&mut self, hue: f64) -> Rc<Theme> {
        if hue.to_bits() == self.hue.to_bits() {
            trace!(hue, generation = self.generation, "theme memo hit");
            return Rc::clone(&self.theme);
        }

        self.generation += 1;
        self.theme = Rc::new(compute(hue, &self.options, self.generation));
        self.hue = hue;
        Rc::clone(&self.theme)
    }

    /// Run `children` with this provider's theme published.
    pub fn provide<R>(&self, children: impl FnOnce() -> R) -> R {
        let _scope = self.scope();
        children()
    }

    /// Publish this provider's theme until the guard drops.
    ///
    /// The guard holds its own `Rc`, so a later [`render`](Self::render) does
    /// not change what an already-entered scope publishes.
    #[must_use]
    pub fn scope(&self) -> ThemeScope {
        ThemeScope::enter(Rc::clone(&self.theme))
    }

    #[must_use]
    pub fn theme(&self) -> Rc<Theme> {
        Rc::clone(&self.theme)
    }

    #[must_use]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    #[must_use]
    pub fn options(&self) -> PaletteOptions {
        self.options
    }

    /// How many palettes this provider has computed.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(DEFAULT_HUE)
    }
}

/// Build a fresh theme for `hue` and publish it to `children`.
///
/// One-shot form of [`ThemeProvider`]: nothing is memoized across calls.
pub fn theme_provider<R>(hue: f64, children: impl FnOnce() -> R) -> R {
    ThemeProvider::new(hue).provide(children)
}

fn compute(hue: f64, options: &PaletteOptions, generation: u64) -> Theme {
    let start = Instant::now();
    let _span = info_span!(
        "huetheme.recompute",
        hue,
        generation,
        extended_roles = options.extended_roles,
        duration_us = tracing::field::Empty
    )
    .entered();

    let theme = generate_theme_with(hue, options);

    let duration_us = start.elapsed().as_micros() as u64;
    tracing::Span::current().record("duration_us", duration_us);
    debug!(hue, generation, duration_us, "theme palette recomputed");
    theme
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
