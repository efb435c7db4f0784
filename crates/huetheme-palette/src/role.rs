#![forbid(unsafe_code)]

//! Semantic color roles.
//!
//! Every [`Palette`](crate::Palette) maps a closed set of roles to colors.
//! Role keys are the camelCase names used when a palette is serialized.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A semantic slot in a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorRole {
    /// Lightest primary shade.
    PrimaryColour1,
    PrimaryColour2,
    /// Primary shade at base lightness.
    PrimaryColour3,
    PrimaryColour4,
    /// Darkest primary shade.
    PrimaryColour5,
    /// Lightest shade of the complementary hue.
    SecondaryColour1,
    SecondaryColour2,
    SecondaryColour3,
    SecondaryColour4,
    SecondaryColour5,
    Danger,
    Success,
    Info,
    Warning,
    White,
    Grey1,
    Grey2,
    Grey3,
    Grey4,
    Black,
}

impl ColorRole {
    /// All roles, in palette order.
    pub const ALL: [Self; 20] = [
        Self::PrimaryColour1,
        Self::PrimaryColour2,
        Self::PrimaryColour3,
        Self::PrimaryColour4,
        Self::PrimaryColour5,
        Self::SecondaryColour1,
        Self::SecondaryColour2,
        Self::SecondaryColour3,
        Self::SecondaryColour4,
        Self::SecondaryColour5,
        Self::Danger,
        Self::Success,
        Self::Info,
        Self::Warning,
        Self::White,
        Self::Grey1,
        Self::Grey2,
        Self::Grey3,
        Self::Grey4,
        Self::Black,
    ];

    /// Number of roles present in every palette, extended or not.
    pub const CORE_COUNT: usize = 14;

    /// The roles present in every palette.
    #[must_use]
    pub fn core() -> &'static [Self] {
        &Self::ALL[..Self::CORE_COUNT]
    }

    /// Position in [`ColorRole::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether this role only exists in extended palettes.
    #[must_use]
    pub const fn is_extended(self) -> bool {
        self.index() >= Self::CORE_COUNT
    }

    /// Stable key, as used in serialized palettes.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::PrimaryColour1 => "primaryColour1",
            Self::PrimaryColour2 => "primaryColour2",
            Self::PrimaryColour3 => "primaryColour3",
            Self::PrimaryColour4 => "primaryColour4",
            Self::PrimaryColour5 => "primaryColour5",
            Self::SecondaryColour1 => "secondaryColour1",
            Self::SecondaryColour2 => "secondaryColour2",
            Self::SecondaryColour3 => "secondaryColour3",
            Self::SecondaryColour4 => "secondaryColour4",
            Self::SecondaryColour5 => "secondaryColour5",
            Self::Danger => "danger",
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::White => "white",
            Self::Grey1 => "grey1",
            Self::Grey2 => "grey2",
            Self::Grey3 => "grey3",
            Self::Grey4 => "grey4",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a key names no [`ColorRole`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color role `{key}`")]
pub struct UnknownRoleError {
    pub key: String,
}

impl FromStr for ColorRole {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.key() == s)
            .ok_or_else(|| UnknownRoleError { key: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position_in_all() {
        for (i, role) in ColorRole::ALL.into_iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn keys_round_trip() {
        for role in ColorRole::ALL {
            assert_eq!(role.key().parse::<ColorRole>(), Ok(role));
        }
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<_> = ColorRole::ALL.iter().map(|r| r.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ColorRole::ALL.len());
    }

    #[test]
    fn unknown_key_is_an_error() {
        let err = "mauve".parse::<ColorRole>().unwrap_err();
        assert_eq!(err.key, "mauve");
        assert_eq!(err.to_string(), "unknown color role `mauve`");
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert!("PrimaryColour1".parse::<ColorRole>().is_err());
    }

    #[test]
    fn extended_roles_are_the_achromatic_tail() {
        let extended: Vec<_> = ColorRole::ALL
            .into_iter()
            .filter(|r| r.is_extended())
            .collect();
        assert_eq!(
            extended,
            [
                ColorRole::White,
                ColorRole::Grey1,
                ColorRole::Grey2,
                ColorRole::Grey3,
                ColorRole::Grey4,
                ColorRole::Black,
            ]
        );
        assert!(ColorRole::core().iter().all(|r| !r.is_extended()));
    }
}
