#![forbid(unsafe_code)]

//! Palette generation: one hue in, a fixed-shape set of colors out.
//!
//! # Algorithm
//!
//! ```text
//! hue ──┬─► ladder(hue)              primaryColour1..5    (L = 70 60 50 40 30)
//!       ├─► ladder((hue + 180) % 360) secondaryColour1..5
//!       └─  (ignored)                 danger/success/info/warning at fixed hues
//!                                     white, grey1..4, black (extended only)
//! ```
//!
//! Every step is pure arithmetic. The generator never fails: hues outside
//! `[0, 360)` are passed through to the color value unchanged, except for
//! the complementary hue, which goes through the `%` remainder.

use crate::color::{Hsl, format_color};
use crate::role::ColorRole;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Saturation of every chromatic role.
pub const BASE_SATURATION: f64 = 100.0;
/// Lightness of the middle shade and of the semantic roles.
pub const BASE_LIGHTNESS: f64 = 50.0;
/// Signed lightness steps for shades 1 through 5, as fractions of 100.
pub const LIGHTNESS_LADDER: [f64; 5] = [0.2, 0.1, 0.0, -0.1, -0.2];
/// Offset from the primary hue to the secondary hue.
pub const COMPLEMENT_OFFSET: f64 = 180.0;

pub const DANGER_HUE: f64 = 0.0;
pub const SUCCESS_HUE: f64 = 120.0;
pub const INFO_HUE: f64 = 240.0;
pub const WARNING_HUE: f64 = 60.0;

/// Step a lightness value along the ladder.
///
/// `amount` is a signed fraction scaled onto a 100-point range. The result
/// saturates at `0` and `100`; it never wraps.
///
/// ```
/// use huetheme_palette::adjust_lightness;
///
/// assert_eq!(adjust_lightness(50.0, 0.1), 60.0);
/// assert_eq!(adjust_lightness(95.0, 0.1), 100.0);
/// assert_eq!(adjust_lightness(5.0, -0.1), 0.0);
/// ```
#[must_use]
pub fn adjust_lightness(base: f64, amount: f64) -> f64 {
    (base + amount * 100.0).clamp(0.0, 100.0)
}

/// Hue on the opposite side of the color wheel.
///
/// Uses the floating-point remainder, so the sign follows the input:
/// `complementary_hue(-300.0) == -120.0`.
#[must_use]
pub fn complementary_hue(hue: f64) -> f64 {
    (hue + COMPLEMENT_OFFSET) % 360.0
}

/// Which palette shape to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PaletteOptions {
    /// Include white, grey1..4 and black.
    pub extended_roles: bool,
}

impl PaletteOptions {
    /// All 20 roles.
    pub const EXTENDED: Self = Self {
        extended_roles: true,
    };
    /// The 14 chromatic roles only.
    pub const FLAT: Self = Self {
        extended_roles: false,
    };
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self::EXTENDED
    }
}

/// Achromatic roles carried by extended palettes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Neutrals {
    pub white: Hsl,
    pub grey1: Hsl,
    pub grey2: Hsl,
    pub grey3: Hsl,
    pub grey4: Hsl,
    pub black: Hsl,
}

impl Neutrals {
    /// The fixed greyscale ramp. Independent of any hue.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            white: format_color(0.0, 0.0, 100.0),
            grey1: format_color(0.0, 0.0, 80.0),
            grey2: format_color(0.0, 0.0, 60.0),
            grey3: format_color(0.0, 0.0, 40.0),
            grey4: format_color(0.0, 0.0, 20.0),
            black: format_color(0.0, 0.0, 0.0),
        }
    }
}

/// A fixed-shape mapping from [`ColorRole`] to color.
///
/// Built only by [`generate_palette`] and [`generate_palette_with`]; never
/// mutated afterwards by this crate. Two palettes generated with the same
/// options always expose the same set of roles.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Palette {
    // ── Primary ladder (input hue) ────────────────────────────
    pub primary_colour1: Hsl,
    pub primary_colour2: Hsl,
    pub primary_colour3: Hsl,
    pub primary_colour4: Hsl,
    pub primary_colour5: Hsl,

    // ── Secondary ladder (complementary hue) ──────────────────
    pub secondary_colour1: Hsl,
    pub secondary_colour2: Hsl,
    pub secondary_colour3: Hsl,
    pub secondary_colour4: Hsl,
    pub secondary_colour5: Hsl,

    // ── Status (fixed hues) ───────────────────────────────────
    pub danger: Hsl,
    pub success: Hsl,
    pub info: Hsl,
    pub warning: Hsl,

    /// Greyscale ramp; `None` for flat palettes.
    #[cfg_attr(feature = "serde", serde(flatten, skip_serializing_if = "Option::is_none"))]
    pub neutrals: Option<Neutrals>,
}

impl Palette {
    /// Look up a role. Returns `None` only for extended roles of a flat palette.
    #[must_use]
    pub fn get(&self, role: ColorRole) -> Option<&Hsl> {
        Some(match role {
            ColorRole::PrimaryColour1 => &self.primary_colour1,
            ColorRole::PrimaryColour2 => &self.primary_colour2,
            ColorRole::PrimaryColour3 => &self.primary_colour3,
            ColorRole::PrimaryColour4 => &self.primary_colour4,
            ColorRole::PrimaryColour5 => &self.primary_colour5,
            ColorRole::SecondaryColour1 => &self.secondary_colour1,
            ColorRole::SecondaryColour2 => &self.secondary_colour2,
            ColorRole::SecondaryColour3 => &self.secondary_colour3,
            ColorRole::SecondaryColour4 => &self.secondary_colour4,
            ColorRole::SecondaryColour5 => &self.secondary_colour5,
            ColorRole::Danger => &self.danger,
            ColorRole::Success => &self.success,
            ColorRole::Info => &self.info,
            ColorRole::Warning => &self.warning,
            ColorRole::White => &self.neutrals.as_ref()?.white,
            ColorRole::Grey1 => &self.neutrals.as_ref()?.grey1,
            ColorRole::Grey2 => &self.neutrals.as_ref()?.grey2,
            ColorRole::Grey3 => &self.neutrals.as_ref()?.grey3,
            ColorRole::Grey4 => &self.neutrals.as_ref()?.grey4,
            ColorRole::Black => &self.neutrals.as_ref()?.black,
        })
    }

    /// Present roles and their colors, in [`ColorRole::ALL`] order.
    pub fn entries(&self) -> impl Iterator<Item = (ColorRole, &Hsl)> + '_ {
        ColorRole::ALL
            .into_iter()
            .filter_map(move |role| self.get(role).map(|color| (role, color)))
    }

    /// Present roles, in [`ColorRole::ALL`] order.
    pub fn roles(&self) -> impl Iterator<Item = ColorRole> + '_ {
        self.entries().map(|(role, _)| role)
    }

    /// Number of roles present: 20 for extended palettes, 14 for flat ones.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.has_extended_roles() {
            ColorRole::ALL.len()
        } else {
            ColorRole::CORE_COUNT
        }
    }

    /// Always `false`; a palette has at least the core roles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn has_extended_roles(&self) -> bool {
        self.neutrals.is_some()
    }
}

/// Five shades at one hue, lightest first.
fn ladder(hue: f64) -> [Hsl; 5] {
    LIGHTNESS_LADDER.map(|amount| {
        // The middle shade sits exactly on the base lightness.
        let lightness = if amount == 0.0 {
            BASE_LIGHTNESS
        } else {
            adjust_lightness(BASE_LIGHTNESS, amount)
        };
        format_color(hue, BASE_SATURATION, lightness)
    })
}

/// Generate the extended (20-role) palette for `hue`.
///
/// Pure and total: any `f64` produces a structurally valid palette.
#[must_use]
pub fn generate_palette(hue: f64) -> Palette {
    generate_palette_with(hue, &PaletteOptions::EXTENDED)
}

/// Generate a palette for `hue` with the shape chosen by `options`.
#[must_use]
pub fn generate_palette_with(hue: f64, options: &PaletteOptions) -> Palette {
    let [p1, p2, p3, p4, p5] = ladder(hue);
    let [s1, s2, s3, s4, s5] = ladder(complementary_hue(hue));

    Palette {
        primary_colour1: p1,
        primary_colour2: p2,
        primary_colour3: p3,
        primary_colour4: p4,
        primary_colour5: p5,
        secondary_colour1: s1,
        secondary_colour2: s2,
        secondary_colour3: s3,
        secondary_colour4: s4,
        secondary_colour5: s5,
        danger: format_color(DANGER_HUE, BASE_SATURATION, BASE_LIGHTNESS),
        success: format_color(SUCCESS_HUE, BASE_SATURATION, BASE_LIGHTNESS),
        info: format_color(INFO_HUE, BASE_SATURATION, BASE_LIGHTNESS),
        warning: format_color(WARNING_HUE, BASE_SATURATION, BASE_LIGHTNESS),
        neutrals: options.extended_roles.then(Neutrals::standard),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
