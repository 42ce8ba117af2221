//! The single piece of process-wide state this crate carries: the
//! configure-once [`Decimal`](crate::Decimal) scale, its derived
//! denominator `D = 10^S`, and the cached transcendental constants that
//! depend on it (spec.md §5).
//!
//! The original source keeps this behind a handful of function-local
//! `static` variables (`Decimal::decimal_scale()`,
//! `Decimal::denominator()`, ...) with a separate `scale_not_configured()`
//! flag checked by hand before every write. spec.md §9 calls this out
//! directly as an initialization-order hazard and recommends "a
//! `OnceCell`-style lazy initializer" instead — this module is that
//! initializer, built on `std::sync::OnceLock` the way the teacher crate
//! reaches for `once_cell::sync::OnceCell` for its own lazily-built
//! tables (e.g. `fuel-merkle`'s zero-hash cache).

use crate::constants::{cached_e, cached_ln2, cached_pi};
use crate::rounding::RoundingMode;
use crate::{record_error, DecimalError};
use apm_integer::Integer;
use apm_whole::WholeNumber;
use std::str::FromStr;
use std::sync::{Mutex, OnceLock};

/// Lower clamp for [`DecimalContext::configure`] (spec.md §4.5).
pub const MIN_SCALE: u32 = 8;
/// Upper clamp for [`DecimalContext::configure`] (spec.md §4.5).
pub const MAX_SCALE: u32 = 10_000;
/// Scale used when a `Decimal` is constructed before `scale(s)` is ever
/// called explicitly (spec.md §5: "failure to configure causes an
/// implicit initialization to the default scale").
pub const DEFAULT_SCALE: u32 = 16;

struct Configured {
    scale: u32,
    denominator: WholeNumber,
    pi: Integer,
    e: Integer,
    ln2: Integer,
}

static CONFIGURED: OnceLock<Configured> = OnceLock::new();
static ROUNDING_MODE: Mutex<RoundingMode> = Mutex::new(RoundingMode::TowardZero);

/// Handle onto the configure-once Decimal singleton. Carries no state of
/// its own — every method reads or lazily populates the process-wide
/// statics above.
pub struct DecimalContext;

impl DecimalContext {
    /// Set the global scale, clamped to `[MIN_SCALE, MAX_SCALE]`. The
    /// first call wins and materializes `D` and the π/e/ln2 caches at
    /// that scale; every later call (including the implicit one triggered
    /// by constructing a `Decimal` before any explicit `scale(s)` call) is
    /// a no-op. Either way, the scale that ended up active is returned, so
    /// callers can always tell which one stuck (spec.md §9's open
    /// question on repeated `scale()` calls, resolved this way).
    pub fn configure(scale: u32) -> u32 {
        if CONFIGURED.get().is_none() {
            if !(MIN_SCALE..=MAX_SCALE).contains(&scale) {
                record_error(DecimalError::ScaleOutOfRange(scale));
            }
            let clamped = scale.clamp(MIN_SCALE, MAX_SCALE);
            let denominator = WholeNumber::from_word(10).pow(clamped as u64);
            let pi = cached_pi(clamped);
            let e = cached_e(clamped);
            let ln2 = cached_ln2(clamped);
            let configured = Configured { scale: clamped, denominator, pi, e, ln2 };
            if CONFIGURED.set(configured).is_ok() {
                tracing::debug!(scale = clamped, "decimal context configured");
            }
        }
        Self::ensure().scale
    }

    /// Read the active scale, implicitly configuring to
    /// [`DEFAULT_SCALE`] if nothing has configured it yet.
    pub fn scale() -> u32 {
        Self::ensure().scale
    }

    /// `10^S` as a whole number.
    pub fn denominator() -> WholeNumber {
        Self::ensure().denominator.clone()
    }

    /// `10^S` as a (non-negative) `Integer`, the form most `Decimal`
    /// arithmetic needs it in.
    pub fn denominator_integer() -> Integer {
        Integer::from_magnitude(false, Self::ensure().denominator.clone())
    }

    /// Cached `pi * 10^S`.
    pub fn pi() -> Integer {
        Self::ensure().pi.clone()
    }

    /// Cached `e * 10^S`.
    pub fn e() -> Integer {
        Self::ensure().e.clone()
    }

    /// Cached `ln(2) * 10^S`.
    pub fn ln2() -> Integer {
        Self::ensure().ln2.clone()
    }

    /// The active rounding mode (spec.md §4.5; not yet consulted by any
    /// arithmetic operation — see `RoundingMode`'s docs).
    pub fn rounding_mode() -> RoundingMode {
        *ROUNDING_MODE.lock().expect("decimal rounding-mode lock poisoned")
    }

    /// Parse and set the rounding mode. Unrecognized names fall back to
    /// [`RoundingMode::TowardZero`] (spec.md §9's documented fix for the
    /// original's no-op `else` branch), with the bad name recorded via
    /// [`DecimalError::UnknownRoundingMode`].
    pub fn set_rounding_mode(mode: &str) -> RoundingMode {
        let parsed = RoundingMode::from_str(mode).unwrap_or_else(|_| {
            record_error(DecimalError::UnknownRoundingMode(mode.to_string()));
            RoundingMode::default()
        });
        *ROUNDING_MODE.lock().expect("decimal rounding-mode lock poisoned") = parsed;
        parsed
    }

    fn ensure() -> &'static Configured {
        if CONFIGURED.get().is_none() {
            Self::configure(DEFAULT_SCALE);
        }
        CONFIGURED.get().expect("just configured above")
    }
}

#[cfg(test)]
mod tests {
    // `DecimalContext` is a true process-wide singleton (spec.md §5:
    // "configure-once, read-many"), so these tests can't exercise the
    // first-call-wins behavior against a clean slate per test the way an
    // ordinary unit test would — whichever test runs first in this binary
    // fixes the scale for the rest of the process. They instead check the
    // invariants that hold regardless of *which* scale won.
    use super::*;

    #[test]
    fn scale_is_always_in_range() {
        let s = DecimalContext::configure(DEFAULT_SCALE);
        assert!((MIN_SCALE..=MAX_SCALE).contains(&s));
    }

    #[test]
    fn denominator_is_ten_to_the_scale() {
        let s = DecimalContext::scale();
        assert_eq!(DecimalContext::denominator(), WholeNumber::from_word(10).pow(s as u64));
    }

    #[test]
    fn second_configure_call_is_a_no_op() {
        let first = DecimalContext::configure(DEFAULT_SCALE);
        let second = DecimalContext::configure(MAX_SCALE);
        assert_eq!(first, second);
    }

    #[test]
    fn rounding_mode_round_trips() {
        assert_eq!(DecimalContext::set_rounding_mode("half_up"), RoundingMode::HalfUp);
        assert_eq!(DecimalContext::rounding_mode(), RoundingMode::HalfUp);
        // restore the default so later tests in this process see it
        DecimalContext::set_rounding_mode("toward_zero");
    }
}
