//! Materializing π, e and ln 2 at an arbitrary [`crate::Decimal`] scale.
//!
//! spec.md §4.5 describes these as cached by slicing a literal digit
//! string down to `s(+1)` significant digits. `Decimal::scale` is
//! clampable up to `MAX_SCALE = 10000` (spec.md §4.5), and no literal this
//! crate could embed verbatim is trustworthy out to ten thousand digits —
//! a transcription error anywhere past the first hundred or so digits
//! would be silent and untestable. Instead these three constants are
//! computed once, to however many digits the active scale needs, by
//! directly summing their own convergent series in fixed-point `Integer`
//! arithmetic — the same "compute once, cache forever" shape as the
//! original literal-substring cache (see
//! `original_source/APM/components/numerical_types/Decimal_static_methods_consts.cpp`),
//! with the literal replaced by a from-scratch derivation so accuracy
//! holds at every scale the type supports, not just the first hundred
//! digits of it.
//!
//! These helpers are independent of [`crate::context::DecimalContext`] —
//! they take a scale directly and do no I/O into the cache — so they can
//! run *during* that cache's own initialization without circularity.

use apm_integer::Integer;
use apm_whole::WholeNumber;
use apm_types::Word;

/// Extra digits of working precision carried through every summation
/// before truncating to the requested scale, to absorb the rounding a
/// division-per-term recurrence accumulates.
const GUARD_DIGITS: u32 = 12;

fn pow10(n: u32) -> WholeNumber {
    WholeNumber::from_word(10).pow(n as u64)
}

fn int_pow10(n: u32) -> Integer {
    Integer::from_magnitude(false, pow10(n))
}

/// `x^(2n+1)/(2n+1)` summed for `x = 1/k`, either alternating (`atan`) or
/// not (`atanh`), scaled by `10^scale`. Each successive term is obtained
/// from the last via `term_{n+1} = term_n * (2n+1) / ((2n+3) * k^2)`
/// rather than recomputed from scratch, since both series are only ever
/// evaluated at a single reciprocal argument here.
fn reciprocal_series(k: u64, scale: u32, alternating: bool) -> Integer {
    let working_scale = scale + GUARD_DIGITS;
    let pow = int_pow10(working_scale);
    let k_i = Integer::from_word(k as Word);
    let k_sq = k_i.mul(&k_i);

    let mut term = pow.div_rem(&k_i).0;
    let mut sum = Integer::zero();
    let mut n: u64 = 0;
    let mut positive = true;

    while term.is_nonzero() {
        sum = if !alternating || positive { sum.add(&term) } else { sum.sub(&term) };
        let numerator = term.mul(&Integer::from_word((2 * n + 1) as Word));
        let denominator = Integer::from_word((2 * n + 3) as Word).mul(&k_sq);
        term = numerator.div_rem(&denominator).0;
        positive = !positive;
        n += 1;
    }

    sum.div_rem(&int_pow10(GUARD_DIGITS)).0
}

/// `e * 10^scale`, from `e = sum_{n>=0} 1/n!`.
pub fn cached_e(scale: u32) -> Integer {
    let working_scale = scale + GUARD_DIGITS;
    let mut term = int_pow10(working_scale);
    let mut sum = Integer::zero();
    let mut n: u64 = 1;

    while term.is_nonzero() {
        sum = sum.add(&term);
        term = term.div_rem(&Integer::from_word(n as Word)).0;
        n += 1;
    }

    sum.div_rem(&int_pow10(GUARD_DIGITS)).0
}

/// `pi * 10^scale`, from Machin's formula `pi = 16*atan(1/5) - 4*atan(1/239)`.
pub fn cached_pi(scale: u32) -> Integer {
    let working_scale = scale + GUARD_DIGITS;
    let a = reciprocal_series(5, working_scale, true);
    let b = reciprocal_series(239, working_scale, true);
    let combined = a.mul(&Integer::from_word(16)).sub(&b.mul(&Integer::from_word(4)));
    combined.div_rem(&int_pow10(GUARD_DIGITS)).0
}

/// `ln(2) * 10^scale`, from `ln 2 = 2*atanh(1/3)`.
pub fn cached_ln2(scale: u32) -> Integer {
    let working_scale = scale + GUARD_DIGITS;
    let a = reciprocal_series(3, working_scale, false);
    let combined = a.mul(&Integer::from_word(2));
    combined.div_rem(&int_pow10(GUARD_DIGITS)).0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(value: &Integer) -> String {
        value.magnitude().to_string_radix(10).replace(',', "")
    }

    #[test]
    fn pi_matches_known_digits_at_modest_scale() {
        // pi = 3.14159265358979...; at scale 14 that's 314159265358979.
        let pi = cached_pi(14);
        assert_eq!(digits(&pi), "314159265358979");
    }

    #[test]
    fn e_matches_known_digits_at_modest_scale() {
        // e = 2.71828182845904...
        let e = cached_e(14);
        assert_eq!(digits(&e), "271828182845904");
    }

    #[test]
    fn ln2_matches_known_digits_at_modest_scale() {
        // ln 2 = 0.69314718055994...
        let ln2 = cached_ln2(14);
        assert_eq!(digits(&ln2), "69314718055994");
    }
}
