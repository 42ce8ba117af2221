//! A fraction over `Integer`/`WholeNumber`, with no automatic reduction
//! (spec.md §4.4): `Rational::new(1, 2).add(&Rational::new(1, 2))` yields
//! `4/4`, not `1/1`, until [`Rational::reduce`] is called explicitly.

use crate::{Integer, Sign};
use apm_whole::WholeNumber;
use std::fmt;

/// `numerator / denominator`, sign carried entirely in the numerator. A
/// zero denominator is representable (it is just another `WholeNumber`)
/// but every arithmetic operation on one folds into an `Integer::undef()`
/// numerator rather than panicking, consistent with the "never throw"
/// contract carried up from `Integer`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rational {
    numerator: Integer,
    denominator: WholeNumber,
}

impl Rational {
    pub fn new(numerator: Integer, denominator: WholeNumber) -> Self {
        Self { numerator, denominator }
    }

    /// A rational built from native signed/unsigned integers.
    pub fn from_parts(numerator: i64, denominator: u64) -> Self {
        Self::new(Integer::from_i64(numerator), WholeNumber::from_word(denominator))
    }

    fn undef() -> Self {
        Self::new(Integer::undef(), WholeNumber::from_word(1))
    }

    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    pub fn denominator(&self) -> &WholeNumber {
        &self.denominator
    }

    /// True when this value can't represent a real number: a zero
    /// denominator, or a numerator already carrying `nan`/`undef`.
    pub fn is_undef(&self) -> bool {
        !self.denominator.is_nonzero() || self.numerator.is_exceptional()
    }

    fn den_as_integer(&self) -> Integer {
        Integer::from_magnitude(false, self.denominator.clone())
    }

    /// `a/b + c/d = (ad + bc) / (bd)`.
    pub fn add(&self, other: &Self) -> Self {
        if self.is_undef() || other.is_undef() {
            return Self::undef();
        }
        let ad = self.numerator.mul(&other.den_as_integer());
        let bc = other.numerator.mul(&self.den_as_integer());
        let numerator = ad.add(&bc);
        let denominator = self.denominator.mul(&other.denominator);
        Self::new(numerator, denominator)
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Component-wise multiplication: `(a/b) * (c/d) = ac / bd`.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_undef() || other.is_undef() {
            return Self::undef();
        }
        let numerator = self.numerator.mul(&other.numerator);
        let denominator = self.denominator.mul(&other.denominator);
        Self::new(numerator, denominator)
    }

    /// Division by the reciprocal: `(a/b) / (c/d) = ad / bc`.
    pub fn div(&self, other: &Self) -> Self {
        if self.is_undef() || other.is_undef() || other.numerator.is_zero() {
            return Self::undef();
        }
        self.mul(&other.reciprocal())
    }

    /// `(a/b) mod (c/d) = (a/b) - floor((a/b) / (c/d)) * (c/d)`, per
    /// spec.md §4.4's `⌊(a/b)/(c/d)⌋` formula (floor, taken from
    /// `Integer::div_rem`'s Euclidean quotient since the denominator here
    /// is always positive).
    pub fn rem(&self, other: &Self) -> Self {
        if self.is_undef() || other.is_undef() || other.numerator.is_zero() {
            return Self::undef();
        }
        let quotient = self.div(other);
        let (truncated, _) = quotient.numerator.div_rem(&quotient.den_as_integer());
        let whole_quotient = Self::new(truncated, WholeNumber::from_word(1));
        self.sub(&whole_quotient.mul(other))
    }

    pub fn reciprocal(&self) -> Self {
        if self.is_undef() || self.numerator.is_zero() {
            return Self::undef();
        }
        let negative = self.numerator.is_negative();
        let new_numerator = Integer::from_magnitude(negative, self.denominator.clone());
        let new_denominator = self.numerator.magnitude().clone();
        Self::new(new_numerator, new_denominator)
    }

    pub fn neg(&self) -> Self {
        Self::new(self.numerator.neg(), self.denominator.clone())
    }

    pub fn abs(&self) -> Self {
        Self::new(self.numerator.abs(), self.denominator.clone())
    }

    /// Divide numerator and denominator by their GCD. A no-op on an
    /// already-undefined value.
    pub fn reduce(&self) -> Self {
        if self.is_undef() || self.numerator.is_zero() {
            return self.clone();
        }
        let g = self.numerator.magnitude().gcd(&self.denominator);
        if !g.is_nonzero() || g == WholeNumber::from_word(1) {
            return self.clone();
        }
        let (num_mag, _) = self.numerator.magnitude().div_rem(&g);
        let (den, _) = self.denominator.div_rem(&g);
        Self::new(Integer::from_magnitude(self.numerator.is_negative(), num_mag), den)
    }

    /// Cross-multiplied comparison: `a/b` vs `c/d` compares `a*d` vs `c*b`
    /// (both denominators are non-negative, so the sign is preserved).
    /// Returns `None` for either operand being undefined.
    pub fn compare(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self.is_undef() || other.is_undef() {
            return None;
        }
        let lhs = self.numerator.mul(&other.den_as_integer());
        let rhs = other.numerator.mul(&self.den_as_integer());
        lhs.partial_cmp(&rhs)
    }

    pub fn to_string_radix(&self, base: u32) -> String {
        if !self.denominator.is_nonzero() {
            return "undefined".to_string();
        }
        format!("{}/{}", self.numerator.to_string_radix(base), self.denominator.to_string_radix(base))
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.compare(other), Some(std::cmp::Ordering::Equal))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.compare(other)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_radix(10))
    }
}

impl From<Integer> for Rational {
    fn from(value: Integer) -> Self {
        if matches!(value.sign(), Sign::Nan | Sign::Undef) {
            return Self::undef();
        }
        Self::new(value, WholeNumber::from_word(1))
    }
}
