//! Rounding-mode enumeration for [`crate::Decimal`] (spec.md §4.5).
//!
//! Only the accessors are wired through the public API today — no
//! `Decimal` operation currently branches on the active mode (spec.md §9
//! flags this as a known gap in the original design, not something this
//! redesign closes). The enum and its round-trip through text exist so the
//! configuration surface in spec.md §6 (`rounding_mode()`/`rounding_mode(&str)`)
//! is fully implemented even though nothing downstream consumes it yet.

use std::str::FromStr;
use strum::{Display, EnumString};

/// One of the eight rounding strategies spec.md §4.5 names.
#[derive(Debug, Display, EnumString, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RoundingMode {
    #[default]
    TowardZero,
    HalfUp,
    HalfDown,
    HalfEven,
    HalfOdd,
    Ceil,
    Floor,
    AwayFromZero,
}

impl RoundingMode {
    /// Parse a mode name, falling back to [`RoundingMode::TowardZero`] for
    /// anything unrecognized.
    ///
    /// The original source's `rounding_mode(const Text&)` has an
    /// expression-statement with no effect in its `else` branch — the
    /// unrecognized-mode case silently left whatever mode was already set
    /// (spec.md §9). The evident intent, matching every other "never
    /// throw" fallback in this stack, is to reset to the default rather
    /// than leave a stale mode in place.
    pub fn parse_or_default(mode: &str) -> Self {
        Self::from_str(mode).unwrap_or_default()
    }
}
