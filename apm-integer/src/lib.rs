//! The integer: a [`Sign`] tag composed with an `apm_whole::WholeNumber`
//! magnitude, the L3 layer of the APM numeric stack.
//!
//! Every arithmetic operation here is total — there is no `Result`, no
//! panic, no divide-by-zero trap. Exceptional results fold into the
//! `undef`/`nan` sentinels the same way IEEE floats fold into `NaN`, per
//! spec.md §7's "never throw" contract. [`rational`] builds the L3.5
//! fraction type on top of this.

mod error;
pub mod rational;
mod sign;


pub use error::IntegerParseError;
pub use rational::Rational;
pub use sign::Sign;

use apm_whole::WholeNumber;
use std::cmp::Ordering;
use std::fmt;

/// A signed arbitrary-precision integer: a [`Sign`] tag plus a magnitude
/// that is only meaningful when the tag is `Negative` or `Positive`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Integer {
    sign: Sign,
    magnitude: WholeNumber,
}

impl Integer {
    fn raw(sign: Sign, magnitude: WholeNumber) -> Self {
        Self { sign, magnitude }
    }

    /// The absorbing "not a number" sentinel.
    pub fn nan() -> Self {
        Self::raw(Sign::Nan, WholeNumber::zero())
    }

    /// The absorbing "undefined" sentinel (e.g. `0/0`, `∞ - ∞`).
    pub fn undef() -> Self {
        Self::raw(Sign::Undef, WholeNumber::zero())
    }

    /// Positive infinity.
    pub fn pos_infinity() -> Self {
        Self::raw(Sign::PosInfinity, WholeNumber::zero())
    }

    /// Negative infinity.
    pub fn neg_infinity() -> Self {
        Self::raw(Sign::NegInfinity, WholeNumber::zero())
    }

    /// The value zero.
    pub fn zero() -> Self {
        Self::raw(Sign::Zero, WholeNumber::zero())
    }

    /// A finite value from a sign and a non-negative magnitude, normalizing
    /// a zero magnitude to the `Zero` tag regardless of the requested sign.
    pub fn from_magnitude(negative: bool, magnitude: WholeNumber) -> Self {
        if !magnitude.is_nonzero() {
            return Self::zero();
        }
        Self::raw(if negative { Sign::Negative } else { Sign::Positive }, magnitude)
    }

    /// A finite value from a native word.
    pub fn from_word(value: apm_types::Word) -> Self {
        Self::from_magnitude(false, WholeNumber::from_word(value))
    }

    /// A finite value from a signed native integer.
    pub fn from_i64(value: i64) -> Self {
        Self::from_magnitude(value < 0, WholeNumber::from_word(value.unsigned_abs()))
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn magnitude(&self) -> &WholeNumber {
        &self.magnitude
    }

    pub fn is_nan(&self) -> bool {
        self.sign == Sign::Nan
    }

    pub fn is_undef(&self) -> bool {
        self.sign == Sign::Undef
    }

    pub fn is_exceptional(&self) -> bool {
        self.sign.is_absorbing()
    }

    pub fn is_infinite(&self) -> bool {
        self.sign.is_infinite()
    }

    pub fn is_finite(&self) -> bool {
        !self.is_exceptional() && !self.is_infinite()
    }

    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.sign.is_positive()
    }

    /// Unary minus: the sign involution of spec.md §4.3. `zero`, `nan` and
    /// `undef` are fixed points.
    pub fn neg(&self) -> Self {
        Self::raw(self.sign.negated(), self.magnitude.clone())
    }

    pub fn abs(&self) -> Self {
        if self.is_exceptional() {
            return self.clone();
        }
        match self.sign {
            Sign::NegInfinity => Self::pos_infinity(),
            Sign::Negative => Self::raw(Sign::Positive, self.magnitude.clone()),
            _ => self.clone(),
        }
    }

    /// `self + other`. See spec.md §4.3 for the full case table: same-sign
    /// finite values add magnitudes, opposite-sign finite values subtract
    /// (sign follows the larger), and any operand touching `nan`/`undef`
    /// propagates `undef`. `+∞ + (-∞) = undef`; a finite value plus an
    /// infinity is that infinity.
    pub fn add(&self, other: &Self) -> Self {
        if self.is_exceptional() || other.is_exceptional() {
            return Self::undef();
        }
        if self.is_infinite() || other.is_infinite() {
            return match (self.sign, other.sign) {
                (Sign::PosInfinity, Sign::NegInfinity) | (Sign::NegInfinity, Sign::PosInfinity) => Self::undef(),
                (Sign::PosInfinity, _) | (_, Sign::PosInfinity) => Self::pos_infinity(),
                (Sign::NegInfinity, _) | (_, Sign::NegInfinity) => Self::neg_infinity(),
                _ => unreachable!(),
            };
        }

        if self.is_negative() == other.is_negative() {
            return Self::from_magnitude(self.is_negative(), self.magnitude.add(&other.magnitude));
        }

        match self.magnitude.compare(&other.magnitude) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => Self::from_magnitude(self.is_negative(), self.magnitude.sub(&other.magnitude)),
            Ordering::Less => Self::from_magnitude(other.is_negative(), other.magnitude.sub(&self.magnitude)),
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// `self * other`. The sign-agreement rule is applied by comparing
    /// `self.sign` against `other.sign` — a prior revision of this stack
    /// mistakenly compared a sign tag against itself, which always agrees
    /// and silently turned every product positive.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_exceptional() || other.is_exceptional() {
            return Self::undef();
        }
        if self.is_infinite() || other.is_infinite() {
            if self.is_zero() || other.is_zero() {
                return Self::undef();
            }
            return if self.sign.combine_mul(other.sign) == Sign::Positive {
                Self::pos_infinity()
            } else {
                Self::neg_infinity()
            };
        }
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let magnitude = self.magnitude.mul(&other.magnitude);
        Self::from_magnitude(self.sign.combine_mul(other.sign) == Sign::Negative, magnitude)
    }

    /// Quotient and remainder. `x / 0 -> (undef, undef)`; the remainder is
    /// always non-negative (`zero` or `positive`), matching spec.md §4.3 and
    /// §8's property `0 <= (a mod b) < |b|`.
    ///
    /// This is Euclidean division: the remainder's sign depends only on
    /// `self` (the dividend), never on `other`. Magnitude division gives
    /// `|self| = mag_q * |other| + mag_r` with `0 <= mag_r < |other|`; if
    /// `self` is negative and `mag_r != 0`, bumping the magnitude quotient
    /// by one and reflecting the remainder (`|other| - mag_r`) keeps the
    /// remainder in range while `quotient * other + remainder == self`
    /// still holds. The quotient's sign then follows the ordinary
    /// sign-agreement rule regardless of this bump.
    pub fn div_rem(&self, other: &Self) -> (Self, Self) {
        if self.is_exceptional() || other.is_exceptional() || other.is_zero() {
            return (Self::undef(), Self::undef());
        }
        if self.is_infinite() || other.is_infinite() {
            return (Self::undef(), Self::undef());
        }
        let (mag_q0, mag_r0) = self.magnitude.div_rem(&other.magnitude);
        let (mag_q, mag_r) = if self.is_negative() && mag_r0.is_nonzero() {
            (mag_q0.add(&WholeNumber::from_word(1)), other.magnitude.sub(&mag_r0))
        } else {
            (mag_q0, mag_r0)
        };
        let quotient = Self::from_magnitude(self.sign.combine_mul(other.sign) == Sign::Negative, mag_q);
        let remainder = Self::from_magnitude(false, mag_r);
        (quotient, remainder)
    }

    pub fn rem(&self, other: &Self) -> Self {
        self.div_rem(other).1
    }

    /// Increment by one. Defined only for finite values; infinities and the
    /// absorbing sentinels are fixed points (there is no "next" `nan`).
    pub fn increment(&self) -> Self {
        if !self.is_finite() {
            return self.clone();
        }
        self.add(&Integer::from_word(1))
    }

    /// Decrement by one, symmetric to [`Integer::increment`].
    pub fn decrement(&self) -> Self {
        if !self.is_finite() {
            return self.clone();
        }
        self.sub(&Integer::from_word(1))
    }

    /// `self` raised to the non-negative power `exp`, by squaring over the
    /// magnitude; the sign alternates only when `exp` is odd and `self` is
    /// negative.
    pub fn pow(&self, exp: u64) -> Self {
        if self.is_exceptional() {
            return Self::undef();
        }
        if self.is_infinite() {
            if exp == 0 {
                return Self::from_word(1);
            }
            return if self.sign == Sign::NegInfinity && exp % 2 == 1 {
                Self::neg_infinity()
            } else {
                Self::pos_infinity()
            };
        }
        let magnitude = self.magnitude.pow(exp);
        let negative = self.is_negative() && exp % 2 == 1;
        Self::from_magnitude(negative, magnitude)
    }

    /// Greatest common divisor, always non-negative (spec.md §4.3:
    /// "Euclidean: while the smaller is nonzero, replace with remainder").
    pub fn gcd(&self, other: &Self) -> Self {
        if self.is_exceptional() || other.is_exceptional() {
            return Self::undef();
        }
        Self::from_magnitude(false, self.magnitude.gcd(&other.magnitude))
    }

    /// Least common multiple, always non-negative, forwarding to the
    /// magnitude the same way [`Integer::gcd`] does (spec.md §8 item 5).
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_exceptional() || other.is_exceptional() {
            return Self::undef();
        }
        Self::from_magnitude(false, self.magnitude.lcm(&other.magnitude))
    }

    /// A total order over every sign tag (including `nan`/`undef`), used
    /// internally for the increment/decrement crossing-zero logic and by
    /// [`rational::Rational`]. This is distinct from [`PartialOrd`], which
    /// follows spec.md's "NaN-marker" comparison rule and returns `None`
    /// whenever either side is `nan`/`undef`.
    pub fn cmp_total(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => match self.sign {
                Sign::Negative => other.magnitude.compare(&self.magnitude),
                Sign::Positive => self.magnitude.compare(&other.magnitude),
                _ => Ordering::Equal,
            },
            ord => ord,
        }
    }

    /// Parse a signed integer literal in `base` (2, 8, 10 or 16), also
    /// recognizing the sentinel literals `"nan"`, `"undefined"`,
    /// `"+infinity"` and `"-infinity"` (case-insensitive), as used by
    /// `apm-decimal`'s text constructor (spec.md §4.5).
    pub fn from_str_radix(text: &str, base: u32) -> Result<Self, IntegerParseError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(IntegerParseError::Empty);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "nan" => return Ok(Self::nan()),
            "undefined" => return Ok(Self::undef()),
            "+infinity" | "infinity" => return Ok(Self::pos_infinity()),
            "-infinity" => return Ok(Self::neg_infinity()),
            _ => {}
        }
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let magnitude = WholeNumber::from_str_radix(rest, base)?;
        Ok(Self::from_magnitude(negative, magnitude))
    }

    /// Render with a leading `-` for negative values and the textual
    /// sentinel names for `nan`/`undefined`/infinities.
    pub fn to_string_radix(&self, base: u32) -> String {
        self.to_string_signed(base, -1)
    }

    /// Render in `base` with an explicit sign policy (spec.md §6):
    /// `sign_policy < 0` emits `-` only for negative values (the default),
    /// `= 0` suppresses the sign entirely, `> 0` always emits `+` or `-`.
    /// Sentinels (`nan`/`undefined`/the infinities) ignore the policy and
    /// always render their symbolic name.
    pub fn to_string_signed(&self, base: u32, sign_policy: i32) -> String {
        match self.sign {
            Sign::Nan => "nan".to_string(),
            Sign::Undef => "undefined".to_string(),
            Sign::PosInfinity => "+infinity".to_string(),
            Sign::NegInfinity => "-infinity".to_string(),
            Sign::Zero => match sign_policy.cmp(&0) {
                Ordering::Greater => format!("+{}", self.magnitude.to_string_radix(base)),
                _ => self.magnitude.to_string_radix(base),
            },
            Sign::Negative => format!("-{}", self.magnitude.to_string_radix(base)),
            Sign::Positive => match sign_policy.cmp(&0) {
                Ordering::Greater => format!("+{}", self.magnitude.to_string_radix(base)),
                _ => self.magnitude.to_string_radix(base),
            },
        }
    }
}

impl PartialEq for Integer {
    /// Per spec.md §4.3 ("if either side is undef/nan, returns a
    /// NaN-marker"), `nan` and `undef` never compare equal to anything,
    /// including themselves.
    fn eq(&self, other: &Self) -> bool {
        if self.is_exceptional() || other.is_exceptional() {
            return false;
        }
        self.cmp_total(other) == Ordering::Equal
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_exceptional() || other.is_exceptional() {
            return None;
        }
        Some(self.cmp_total(other))
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_radix(10))
    }
}
