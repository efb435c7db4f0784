#![forbid(unsafe_code)]

//! HSL color values and their canonical string encoding.
//!
//! An [`Hsl`] is fully determined by its `(hue, saturation, lightness)`
//! triple. Its text form is the CSS-style `hsl(<h>, <s>%, <l>%)`, for example
//! `hsl(180, 100%, 70%)`. Components are written in shortest round-trip
//! form, so whole numbers carry no fractional part. Magnitudes at or above
//! `1e21` or below `1e-6` switch to exponent form (`1e+21`, `5e-7`), and
//! infinities print as `Infinity`/`-Infinity`, matching the number text of
//! web CSS tooling.
//!
//! Nothing here validates or clamps. [`format_color`] encodes whatever it is
//! given; callers clamp lightness before calling it.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A color in hue/saturation/lightness form.
///
/// `hue` is in degrees, `saturation` and `lightness` are percentages. Values
/// are stored exactly as given, including out-of-range or non-finite ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Position on the color wheel, in degrees.
    pub hue: f64,
    /// Color intensity, in percent.
    pub saturation: f64,
    /// Brightness, in percent.
    pub lightness: f64,
}

impl Hsl {
    /// Create a color from its three components.
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert to 8-bit sRGB.
    ///
    /// The hue is wrapped into `[0, 360)` and saturation/lightness are clamped
    /// to `[0, 100]` for the conversion only; the stored value is untouched.
    /// Non-finite components convert to black channels rather than failing.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = self.hue.rem_euclid(360.0);
        let s = self.saturation.clamp(0.0, 100.0) / 100.0;
        let l = self.lightness.clamp(0.0, 100.0) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Rgb::new(channel(r + m), channel(g + m), channel(b + m))
    }
}

fn channel(value: f64) -> u8 {
    // `as` saturates and maps NaN to 0.
    (value * 255.0).round() as u8
}

/// Encode a `(hue, saturation, lightness)` triple as a color value.
///
/// No validation is performed; the triple is stored verbatim.
#[must_use]
pub const fn format_color(hue: f64, saturation: f64, lightness: f64) -> Hsl {
    Hsl::new(hue, saturation, lightness)
}

/// Writes a component in shortest round-trip form, folding `-0` into `0`.
struct Component(f64);

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value == 0.0 {
            return f.write_str("0");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }
        let magnitude = value.abs();
        if !(1e-6..1e21).contains(&magnitude) && !value.is_nan() {
            let exponent = format!("{value:e}");
            return match exponent.split_once('e') {
                Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
                _ => f.write_str(&exponent),
            };
        }
        write!(f, "{value}")
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            Component(self.hue),
            Component(self.saturation),
            Component(self.lightness)
        )
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// One of the three HSL components, used in parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Hue,
    Saturation,
    Lightness,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Lightness => "lightness",
        })
    }
}

/// Error returned when a string is not a valid `hsl(...)` encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("expected `hsl(<hue>, <saturation>%, <lightness>%)`")]
    Syntax,
    #[error("missing {0} component")]
    MissingComponent(Channel),
    #[error("{0} component must end with `%`")]
    MissingPercent(Channel),
    #[error("invalid {channel} component `{text}`")]
    InvalidNumber { channel: Channel, text: String },
    #[error("unexpected component after lightness")]
    TrailingComponents,
}

impl FromStr for Hsl {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .trim()
            .strip_prefix("hsl(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or(ParseColorError::Syntax)?;

        let mut parts = body.split(',');
        let hue = parse_component(parts.next(), Channel::Hue)?;
        let saturation = parse_component(parts.next(), Channel::Saturation)?;
        let lightness = parse_component(parts.next(), Channel::Lightness)?;
        if parts.next().is_some() {
            return Err(ParseColorError::TrailingComponents);
        }

        Ok(Self::new(hue, saturation, lightness))
    }
}

fn parse_component(part: Option<&str>, channel: Channel) -> Result<f64, ParseColorError> {
    let text = part
        .ok_or(ParseColorError::MissingComponent(channel))?
        .trim();

    let number = match channel {
        Channel::Hue => text,
        Channel::Saturation | Channel::Lightness => text
            .strip_suffix('%')
            .ok_or(ParseColorError::MissingPercent(channel))?
            .trim_end(),
    };

    number
        .parse::<f64>()
        .map_err(|_| ParseColorError::InvalidNumber {
            channel,
            text: text.to_owned(),
        })
}

#[cfg(feature = "serde")]
impl serde::Serialize for Hsl {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Hsl {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Rgb
// ---------------------------------------------------------------------------

/// An opaque 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Hsl> for Rgb {
    fn from(color: Hsl) -> Self {
        color.to_rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_canonical_spacing() {
        assert_eq!(Hsl::new(180.0, 100.0, 70.0).to_string(), "hsl(180, 100%, 70%)");
        assert_eq!(Hsl::new(0.0, 0.0, 0.0).to_string(), "hsl(0, 0%, 0%)");
    }

    #[test]
    fn display_keeps_fractions_and_out_of_range_values() {
        assert_eq!(Hsl::new(12.5, 100.0, 50.0).to_string(), "hsl(12.5, 100%, 50%)");
        assert_eq!(Hsl::new(-30.0, 100.0, 50.0).to_string(), "hsl(-30, 100%, 50%)");
        assert_eq!(Hsl::new(720.0, 100.0, 50.0).to_string(), "hsl(720, 100%, 50%)");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(Hsl::new(-0.0, 0.0, -0.0).to_string(), "hsl(0, 0%, 0%)");
    }

    #[test]
    fn non_finite_components_pass_through() {
        assert_eq!(
            Hsl::new(f64::NAN, 100.0, 50.0).to_string(),
            "hsl(NaN, 100%, 50%)"
        );
        assert_eq!(
            Hsl::new(f64::INFINITY, 100.0, 50.0).to_string(),
            "hsl(Infinity, 100%, 50%)"
        );
        assert_eq!(
            Hsl::new(f64::NEG_INFINITY, 100.0, 50.0).to_string(),
            "hsl(-Infinity, 100%, 50%)"
        );
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(Hsl::new(1e21, 100.0, 70.0).to_string(), "hsl(1e+21, 100%, 70%)");
        assert_eq!(Hsl::new(-2.5e22, 100.0, 70.0).to_string(), "hsl(-2.5e+22, 100%, 70%)");
        assert_eq!(Hsl::new(5e-7, 100.0, 70.0).to_string(), "hsl(5e-7, 100%, 70%)");
        assert_eq!(
            Hsl::new(1e20, 100.0, 70.0).to_string(),
            "hsl(100000000000000000000, 100%, 70%)"
        );
        assert_eq!(Hsl::new(0.000001, 100.0, 70.0).to_string(), "hsl(0.000001, 100%, 70%)");
    }

    #[test]
    fn exponent_and_infinity_forms_parse_back() {
        for color in [
            Hsl::new(1e21, 100.0, 70.0),
            Hsl::new(5e-7, 100.0, 70.0),
            Hsl::new(f64::NEG_INFINITY, 100.0, 70.0),
        ] {
            let parsed: Hsl = color.to_string().parse().unwrap();
            assert_eq!(parsed, color);
        }
    }

    #[test]
    fn format_color_stores_verbatim() {
        let color = format_color(400.0, 150.0, -20.0);
        assert_eq!(color, Hsl::new(400.0, 150.0, -20.0));
    }

    #[test]
    fn parse_canonical_form() {
        let color: Hsl = "hsl(180, 100%, 70%)".parse().unwrap();
        assert_eq!(color, Hsl::new(180.0, 100.0, 70.0));
    }

    #[test]
    fn parse_tolerates_whitespace() {
        let color: Hsl = "  hsl(240,100% ,  50 %)\n".parse().unwrap();
        assert_eq!(color, Hsl::new(240.0, 100.0, 50.0));
    }

    #[test]
    fn parse_reads_non_finite_output_back() {
        let color: Hsl = "hsl(Infinity, 100%, 50%)".parse().unwrap();
        assert!(color.hue.is_infinite());
        let color: Hsl = "hsl(NaN, 100%, 50%)".parse().unwrap();
        assert!(color.hue.is_nan());
    }

    #[test]
    fn parse_rejects_wrong_wrapper() {
        assert_eq!(
            "rgb(1, 2, 3)".parse::<Hsl>(),
            Err(ParseColorError::Syntax)
        );
        assert_eq!(
            "hsl(1, 2%, 3%".parse::<Hsl>(),
            Err(ParseColorError::Syntax)
        );
    }

    #[test]
    fn parse_reports_missing_component() {
        assert_eq!(
            "hsl(180)".parse::<Hsl>(),
            Err(ParseColorError::MissingComponent(Channel::Saturation))
        );
        assert_eq!(
            "hsl(180, 100%)".parse::<Hsl>(),
            Err(ParseColorError::MissingComponent(Channel::Lightness))
        );
    }

    #[test]
    fn parse_requires_percent_suffix() {
        assert_eq!(
            "hsl(180, 100, 70%)".parse::<Hsl>(),
            Err(ParseColorError::MissingPercent(Channel::Saturation))
        );
    }

    #[test]
    fn parse_rejects_garbage_numbers() {
        let err = "hsl(abc, 100%, 70%)".parse::<Hsl>().unwrap_err();
        assert_eq!(
            err,
            ParseColorError::InvalidNumber {
                channel: Channel::Hue,
                text: "abc".into(),
            }
        );
        assert_eq!(err.to_string(), "invalid hue component `abc`");
    }

    #[test]
    fn parse_rejects_extra_components() {
        assert_eq!(
            "hsl(1, 2%, 3%, 4%)".parse::<Hsl>(),
            Err(ParseColorError::TrailingComponents)
        );
    }

    #[test]
    fn primaries_convert_to_pure_channels() {
        assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_rgb(), Rgb::new(255, 0, 0));
        assert_eq!(Hsl::new(120.0, 100.0, 50.0).to_rgb(), Rgb::new(0, 255, 0));
        assert_eq!(Hsl::new(240.0, 100.0, 50.0).to_rgb(), Rgb::new(0, 0, 255));
        assert_eq!(Hsl::new(60.0, 100.0, 50.0).to_rgb(), Rgb::new(255, 255, 0));
    }

    #[test]
    fn achromatic_ignores_hue() {
        assert_eq!(Hsl::new(0.0, 0.0, 100.0).to_rgb(), Rgb::new(255, 255, 255));
        assert_eq!(Hsl::new(200.0, 0.0, 0.0).to_rgb(), Rgb::new(0, 0, 0));
        assert_eq!(Hsl::new(0.0, 0.0, 60.0).to_rgb(), Rgb::new(153, 153, 153));
    }

    #[test]
    fn light_cyan_hex() {
        let rgb: Rgb = Hsl::new(180.0, 100.0, 70.0).into();
        assert_eq!(rgb, Rgb::new(102, 255, 255));
        assert_eq!(rgb.to_hex(), "#66ffff");
    }

    #[test]
    fn out_of_range_hue_wraps_for_conversion() {
        assert_eq!(
            Hsl::new(-120.0, 100.0, 50.0).to_rgb(),
            Hsl::new(240.0, 100.0, 50.0).to_rgb()
        );
        assert_eq!(
            Hsl::new(480.0, 100.0, 50.0).to_rgb(),
            Hsl::new(120.0, 100.0, 50.0).to_rgb()
        );
    }

    #[test]
    fn non_finite_conversion_does_not_panic() {
        let _ = Hsl::new(f64::NAN, f64::NAN, f64::NAN).to_rgb();
        let _ = Hsl::new(f64::INFINITY, 100.0, 50.0).to_rgb();
    }
}
