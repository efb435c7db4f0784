#![forbid(unsafe_code)]

//! Thread-local theme scopes.
//!
//! A [`ThemeScope`] publishes a theme to every call made while it is alive on
//! the current thread. Scopes nest: the innermost one wins, and dropping it
//! restores whatever the enclosing scope published.
//!
//! # Usage
//!
//! ```
//! use std::rc::Rc;
//! use huetheme_context::{ThemeScope, use_theme};
//! use huetheme_palette::generate_theme;
//!
//! assert!(use_theme().is_err());
//! {
//!     let _outer = ThemeScope::enter(Rc::new(generate_theme(180.0)));
//!     {
//!         let _inner = ThemeScope::enter(Rc::new(generate_theme(20.0)));
//!         assert_eq!(use_theme().unwrap().palette.primary_colour3.hue, 20.0);
//!     }
//!     assert_eq!(use_theme().unwrap().palette.primary_colour3.hue, 180.0);
//! }
//! assert!(use_theme().is_err());
//! ```
//!
//! # Invariants
//!
//! 1. [`use_theme`] returns the theme of the most recently entered live scope.
//! 2. With no live scope, [`use_theme`] fails with [`ThemeError::MissingScope`].
//!    It never falls back to a default theme.
//! 3. Dropping a scope removes only its own binding, whatever order guards
//!    are dropped in.
//! 4. Scopes are bound to the thread that created them (`!Send`).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use huetheme_palette::Theme;
use tracing::{trace, warn};

use crate::error::ThemeError;

thread_local! {
    /// Live bindings in entry order, tagged with the owning scope's id.
    static THEME_STACK: RefCell<Vec<(u64, Rc<Theme>)>> = const { RefCell::new(Vec::new()) };
    static NEXT_SCOPE_ID: Cell<u64> = const { Cell::new(0) };
}

/// RAII guard that publishes a theme for the duration of its lifetime.
pub struct ThemeScope {
    id: u64,
    /// Stack length right after this scope's push.
    depth: usize,
    theme: Rc<Theme>,
}

impl ThemeScope {
    /// Publish `theme` until the returned guard drops.
    #[must_use]
    pub fn enter(theme: Rc<Theme>) -> Self {
        let id = NEXT_SCOPE_ID.with(|next| {
            let id = next.get();
            next.set(id.wrapping_add(1));
            id
        });
        let depth = THEME_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            stack.push((id, Rc::clone(&theme)));
            stack.len()
        });
        trace!(id, depth, "theme scope entered");
        Self { id, depth, theme }
    }

    /// The theme this scope publishes.
    #[must_use]
    pub fn theme(&self) -> &Rc<Theme> {
        &self.theme
    }

    /// Nesting depth when this scope was entered, starting at 1 for the
    /// outermost.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Drop for ThemeScope {
    fn drop(&mut self) {
        // `try_with`: the thread-local may already be gone during thread exit.
        let _ = THEME_STACK.try_with(|stack| {
            let mut stack = stack.borrow_mut();
            if let Some(pos) = stack.iter().rposition(|(id, _)| *id == self.id) {
                stack.remove(pos);
            }
        });
        trace!(id = self.id, depth = self.depth, "theme scope exited");
    }
}

impl std::fmt::Debug for ThemeScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeScope")
            .field("id", &self.id)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

/// The theme published by the innermost live scope on this thread.
///
/// # Errors
///
/// [`ThemeError::MissingScope`] when called outside every scope.
pub fn use_theme() -> Result<Rc<Theme>, ThemeError> {
    let current = THEME_STACK.with(|stack| {
        stack
            .borrow()
            .last()
            .map(|(_, theme)| Rc::clone(theme))
    });
    current.ok_or_else(|| {
        warn!("use_theme called outside of a theme scope");
        ThemeError::MissingScope
    })
}

/// Run `f` against the current theme without handing out the `Rc`.
///
/// # Errors
///
/// [`ThemeError::MissingScope`] when called outside every scope; `f` is not
/// called in that case.
pub fn with_theme<R>(f: impl FnOnce(&Theme) -> R) -> Result<R, ThemeError> {
    let theme = use_theme()?;
    Ok(f(&theme))
}

/// Number of live scopes on this thread.
#[must_use]
pub fn scope_depth() -> usize {
    THEME_STACK.with(|stack| stack.borrow().len())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
