//! The decimal: a fixed-scale value `v` represented as an `Integer`
//! `I = floor(v * 10^S)` against the process-wide scale `S`, the L4 layer
//! of the APM numeric stack.
//!
//! Everything above `Integer` and `WholeNumber` lives here: configuration
//! (scale, cached `D = 10^S`, cached π/e/ln2, rounding mode), text
//! construction from every literal shape spec.md §6 recognizes, the four
//! fixed-point arithmetic identities, ceil/floor, pow/root/gcd, and the
//! transcendental kernel in [`transcendental`].

mod constants;
mod context;
mod error;
mod rounding;
mod transcendental;

#[cfg(test)]
mod tests;

pub use context::{DecimalContext, DEFAULT_SCALE, MAX_SCALE, MIN_SCALE};
pub use error::DecimalError;
pub use rounding::RoundingMode;

use apm_integer::Integer;
use apm_whole::WholeNumber;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;

thread_local! {
    static LAST_ERROR: RefCell<Option<DecimalError>> = const { RefCell::new(None) };
}

fn record_error(err: DecimalError) {
    LAST_ERROR.with(|cell| *cell.borrow_mut() = Some(err));
}

/// A fixed-scale arbitrary-precision decimal number.
///
/// Internally this is just `value = floor(real * D)` for the active
/// `D = 10^S` from [`DecimalContext`]; every arithmetic operation is a
/// rescaled `Integer` operation, so `Decimal` inherits `Integer`'s sign
/// state machine (`nan`, `undef`, `±infinity`, `zero`, `negative`,
/// `positive`) and its "never throw" contract wholesale. Domain errors
/// specific to this layer (`ln` of a non-positive value, `root(n)` of a
/// negative base, an unparseable literal) fold into `undef`/`nan` the same
/// way, with the reason recorded for [`Decimal::last_error`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decimal {
    value: Integer,
}

impl Decimal {
    fn raw(value: Integer) -> Self {
        Self { value }
    }

    pub(crate) fn from_raw(value: Integer) -> Self {
        Self::raw(value)
    }

    pub(crate) fn raw_value(&self) -> &Integer {
        &self.value
    }

    fn denominator() -> Integer {
        DecimalContext::denominator_integer()
    }

    /// Retrieve and clear the reason the most recent fallible construction
    /// or transcendental evaluation fell back to `undef`/`nan`. Returns
    /// `None` if nothing has failed since the last call (or ever).
    pub fn last_error() -> Option<DecimalError> {
        LAST_ERROR.with(|cell| cell.borrow_mut().take())
    }

    pub fn nan() -> Self {
        Self::raw(Integer::nan())
    }

    pub fn undef() -> Self {
        Self::raw(Integer::undef())
    }

    pub fn pos_infinity() -> Self {
        Self::raw(Integer::pos_infinity())
    }

    pub fn neg_infinity() -> Self {
        Self::raw(Integer::neg_infinity())
    }

    pub fn zero() -> Self {
        Self::raw(Integer::zero())
    }

    pub fn one() -> Self {
        Self::raw(Self::denominator())
    }

    /// The cached `pi` Decimal at the active scale.
    pub fn pi() -> Self {
        Self::raw(DecimalContext::pi())
    }

    /// The cached `e` Decimal at the active scale.
    pub fn e() -> Self {
        Self::raw(DecimalContext::e())
    }

    /// The cached `ln 2` Decimal at the active scale.
    pub fn ln2() -> Self {
        Self::raw(DecimalContext::ln2())
    }

    fn from_ratio(num: i64, den: u64) -> Self {
        let scaled = Self::denominator().mul(&Integer::from_i64(num));
        Self::raw(scaled.div_rem(&Integer::from_word(den as apm_types::Word)).0)
    }

    fn from_integer_literal(value: &Integer) -> Self {
        Self::raw(value.mul(&Self::denominator()))
    }

    /// A `Decimal` from a native signed integer, scaled to the active `D`.
    pub fn from_i64(value: i64) -> Self {
        Self::from_integer_literal(&Integer::from_i64(value))
    }

    pub fn is_nan(&self) -> bool {
        self.value.is_nan()
    }

    pub fn is_undef(&self) -> bool {
        self.value.is_undef()
    }

    pub fn is_exceptional(&self) -> bool {
        self.value.is_exceptional()
    }

    pub fn is_infinite(&self) -> bool {
        self.value.is_infinite()
    }

    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.value.is_positive()
    }

    // ---- construction from text (spec.md §4.5, §6) --------------------

    /// Parse any of the literal shapes spec.md §6 recognizes: a decimal
    /// (`1.25`, `-3.5e2`), a rational (`1/3`, `2 1/3`), a radix-prefixed
    /// whole number (`0x10`, `0b1010`, `0o17`, `0u42`), a plain signed
    /// integer, or a symbolic sentinel (`undefined`, `+infinity`,
    /// `-infinity`, `nan`). Never fails outright: anything it can't make
    /// sense of becomes `undef`, with the reason recorded for
    /// [`Decimal::last_error`].
    pub fn parse(text: &str) -> Self {
        let lowered = text.trim().to_ascii_lowercase();
        if lowered.is_empty() {
            record_error(DecimalError::EmptyLiteral);
            return Self::undef();
        }
        match lowered.as_str() {
            "undefined" => return Self::undef(),
            "nan" => return Self::nan(),
            "+infinity" | "infinity" => return Self::pos_infinity(),
            "-infinity" => return Self::neg_infinity(),
            _ => {}
        }
        if lowered.contains('.') {
            return Self::parse_decimal(&lowered);
        }
        if lowered.contains('/') {
            return Self::parse_rational(&lowered);
        }
        if let Some(rest) = lowered.strip_prefix("0u") {
            return Self::parse_radix_whole(rest, 10);
        }
        if let Some(rest) = lowered.strip_prefix("0b") {
            return Self::parse_radix_whole(rest, 2);
        }
        if let Some(rest) = lowered.strip_prefix("0o") {
            return Self::parse_radix_whole(rest, 8);
        }
        if let Some(rest) = lowered.strip_prefix("0x") {
            return Self::parse_radix_whole(rest, 16);
        }
        match Integer::from_str_radix(&lowered, 10) {
            Ok(value) => Self::from_integer_literal(&value),
            Err(err) => {
                record_error(DecimalError::Integer(err));
                Self::undef()
            }
        }
    }

    fn parse_radix_whole(rest: &str, base: u32) -> Self {
        match WholeNumber::from_str_radix(rest, base) {
            Ok(magnitude) => Self::from_integer_literal(&Integer::from_magnitude(false, magnitude)),
            Err(err) => {
                record_error(DecimalError::Integer(err.into()));
                Self::undef()
            }
        }
    }

    fn parse_decimal(lowered: &str) -> Self {
        let (mantissa, exponent) = match lowered.split_once('e') {
            Some((m, e)) => match e.parse::<i64>() {
                Ok(exp) => (m, exp),
                Err(_) => {
                    record_error(DecimalError::MalformedLiteral(lowered.to_string()));
                    return Self::undef();
                }
            },
            None => (lowered, 0),
        };

        let (negative, mantissa) = match mantissa.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
        };

        let Some((int_part, frac_part)) = mantissa.split_once('.') else {
            record_error(DecimalError::MalformedLiteral(lowered.to_string()));
            return Self::undef();
        };

        let digits: String = format!("{int_part}{frac_part}");
        let magnitude = match WholeNumber::from_str_radix(&digits, 10) {
            Ok(m) => m,
            Err(err) => {
                record_error(DecimalError::Integer(err.into()));
                return Self::undef();
            }
        };

        let scale = DecimalContext::scale();
        let frac_digits = frac_part.len() as u32;
        let scaled = if frac_digits < scale {
            magnitude.mul(&WholeNumber::from_word(10).pow((scale - frac_digits) as u64))
        } else if frac_digits > scale {
            magnitude.div_rem(&WholeNumber::from_word(10).pow((frac_digits - scale) as u64)).0
        } else {
            magnitude
        };

        let mut value = Integer::from_magnitude(negative, scaled);
        if exponent != 0 {
            let factor = WholeNumber::from_word(10).pow(exponent.unsigned_abs());
            let factor = Integer::from_magnitude(false, factor);
            value = if exponent > 0 { value.mul(&factor) } else { value.div_rem(&factor).0 };
        }
        Self::raw(value)
    }

    fn parse_rational(lowered: &str) -> Self {
        let (whole_part, frac) = match lowered.rsplit_once(char::is_whitespace) {
            Some((w, f)) => (w.trim(), f.trim()),
            None => ("", lowered.trim()),
        };

        let Some((num_text, den_text)) = frac.split_once('/') else {
            record_error(DecimalError::MalformedLiteral(lowered.to_string()));
            return Self::undef();
        };

        let numerator = match Integer::from_str_radix(num_text, 10) {
            Ok(v) => v,
            Err(err) => {
                record_error(DecimalError::Integer(err));
                return Self::undef();
            }
        };
        let denominator = match WholeNumber::from_str_radix(den_text, 10) {
            Ok(v) => v,
            Err(err) => {
                record_error(DecimalError::Integer(err.into()));
                return Self::undef();
            }
        };
        if !denominator.is_nonzero() {
            record_error(DecimalError::MalformedLiteral(lowered.to_string()));
            return Self::undef();
        }

        let whole = if whole_part.is_empty() {
            Integer::zero()
        } else {
            match Integer::from_str_radix(whole_part, 10) {
                Ok(v) => v,
                Err(err) => {
                    record_error(DecimalError::Integer(err));
                    return Self::undef();
                }
            }
        };

        let den_i = Integer::from_magnitude(false, denominator.clone());
        let combined_numerator = whole.mul(&den_i).add(&numerator);
        let scaled = combined_numerator.mul(&Self::denominator());
        Self::raw(scaled.div_rem(&den_i).0)
    }

    // ---- arithmetic identities (spec.md §4.5) --------------------------

    pub fn add(&self, other: &Self) -> Self {
        Self::raw(self.value.add(&other.value))
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self::raw(self.value.sub(&other.value))
    }

    /// Multiply the underlying Integers, then divide by `D` once to
    /// restore scaling (spec.md §4.5: "multiply Integers; divide by `D`
    /// once").
    pub fn mul(&self, other: &Self) -> Self {
        let product = self.value.mul(&other.value);
        Self::raw(product.div_rem(&Self::denominator()).0)
    }

    /// Multiply the dividend by `D` first to preserve scale, then divide
    /// (spec.md §4.5).
    pub fn div(&self, other: &Self) -> Self {
        let scaled = self.value.mul(&Self::denominator());
        Self::raw(scaled.div_rem(&other.value).0)
    }

    /// Divide as `div` above, then take the result mod `D` — the
    /// fractional-part representation of the quotient, not a conventional
    /// remainder (spec.md §4.5: "first divide..., then take mod `D`").
    pub fn rem(&self, other: &Self) -> Self {
        let scaled = self.value.mul(&Self::denominator());
        let (quotient, _) = scaled.div_rem(&other.value);
        Self::raw(quotient.rem(&Self::denominator()))
    }

    pub fn neg(&self) -> Self {
        Self::raw(self.value.neg())
    }

    pub fn abs(&self) -> Self {
        Self::raw(self.value.abs())
    }

    /// Split by `D` into `(q, r)`. `Integer::div_rem`'s quotient is already
    /// the Euclidean (floor) quotient for the positive divisor `D` — for a
    /// negative value that quotient already sits on the away-from-zero side
    /// of the fraction. Per spec.md §4.5 and `original_source/.../Decimal.cpp`
    /// (`ceil`/`floor`, lines 476-523), rounding is sign-dependent rather
    /// than the ordinary "always toward +infinity" ceiling: `ceil` moves
    /// away from zero in the direction of `self`'s sign (so it bumps the
    /// quotient up only when `self` is positive; a negative `self` is
    /// already as far from zero as the Euclidean quotient gets), and `floor`
    /// moves the opposite way (toward zero).
    pub fn ceil(&self) -> Self {
        if !self.value.is_finite() {
            return self.clone();
        }
        let (q, r) = self.value.div_rem(&Self::denominator());
        let result = if r.is_zero() {
            q
        } else if self.value.is_negative() {
            q
        } else {
            q.increment()
        };
        Self::from_integer_literal(&result)
    }

    /// Sign-dependent complement of [`Decimal::ceil`]: moves toward zero
    /// rather than away from it when `r != 0`.
    pub fn floor(&self) -> Self {
        if !self.value.is_finite() {
            return self.clone();
        }
        let (q, r) = self.value.div_rem(&Self::denominator());
        let result = if r.is_zero() {
            q
        } else if self.value.is_negative() {
            q.increment()
        } else {
            q
        };
        Self::from_integer_literal(&result)
    }

    /// Exponentiation by squaring over the underlying Integer magnitude,
    /// rescaled once per multiply the way [`Decimal::mul`] does.
    pub fn pow(&self, exp: u64) -> Self {
        let mut base = self.clone();
        let mut acc = Self::one();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                acc = acc.mul(&base);
            }
            base = base.mul(&base);
            e >>= 1;
        }
        acc
    }

    /// `root(n)`, pre-scaling by `D^(n-1)` before delegating to
    /// whole-number `root` so the fixed-point precision survives the
    /// integer root (spec.md §4.5). Domain errors (negative base, or
    /// `n` outside the supported scale range) fold into `undef`.
    pub fn root(&self, n: u64) -> Self {
        if self.value.is_exceptional() {
            return self.clone();
        }
        if n as u32 > MAX_SCALE {
            record_error(DecimalError::DomainError(format!("root({n})")));
            return Self::undef();
        }
        if self.value.is_negative() {
            record_error(DecimalError::DomainError(format!("root({n}) of a negative value")));
            return Self::undef();
        }
        if n == 0 {
            return Self::one();
        }
        let pre_scale = Self::denominator().pow(n - 1);
        let scaled_magnitude = self.value.magnitude().mul(pre_scale.magnitude());
        let rooted = scaled_magnitude.root(n);
        Self::raw(Integer::from_magnitude(false, rooted))
    }

    pub fn sqrt(&self) -> Self {
        self.root(2)
    }

    pub fn gcd(&self, other: &Self) -> Self {
        Self::raw(self.value.gcd(&other.value))
    }

    /// Least common multiple, forwarding to the scaled `Integer` magnitude
    /// the same way [`Decimal::gcd`] does (spec.md §8 item 5).
    pub fn lcm(&self, other: &Self) -> Self {
        Self::raw(self.value.lcm(&other.value))
    }

    /// Total order matching `Integer`'s (sentinels compare via
    /// `nan < undef < -infinity < negative < zero < positive < +infinity`).
    pub fn cmp_total(&self, other: &Self) -> Ordering {
        self.value.cmp_total(&other.value)
    }

    /// The value as a native `i64`, truncated toward zero, or `None` if
    /// it's exceptional or doesn't fit.
    pub fn to_i64(&self) -> Option<i64> {
        if !self.value.is_finite() {
            return None;
        }
        let (q, _) = self.value.div_rem(&Self::denominator());
        let mag = q.magnitude().to_u64()?;
        if q.is_negative() {
            i64::try_from(mag).ok().map(|v| -v)
        } else {
            i64::try_from(mag).ok()
        }
    }

    pub fn rounding_mode() -> RoundingMode {
        DecimalContext::rounding_mode()
    }

    pub fn set_rounding_mode(mode: &str) -> RoundingMode {
        DecimalContext::set_rounding_mode(mode)
    }

    /// The current implicit denominator `D = 10^S` (spec.md §6).
    pub fn decimal_denominator() -> Integer {
        Self::denominator()
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl std::str::FromStr for Decimal {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Decimal {
    /// `<integer-part>.<fractional-part>` with the fractional portion
    /// zero-left-padded to `S` digits, `.0` when it's zero, and the
    /// symbolic sentinel names for `nan`/`undefined`/the infinities
    /// (spec.md §6).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_nan() {
            return write!(f, "nan");
        }
        if self.value.is_undef() {
            return write!(f, "undefined");
        }
        if self.value.is_infinite() {
            return write!(f, "{}", self.value.to_string_radix(10));
        }

        let scale = DecimalContext::scale();
        let (q, r) = self.value.abs().div_rem(&Self::denominator());
        let sign = if self.value.is_negative() { "-" } else { "" };
        let int_part = q.magnitude().to_string_radix(10).replace(',', "");
        let frac = r.magnitude().to_string_radix(10).replace(',', "");
        if frac == "0" {
            return write!(f, "{sign}{int_part}.0");
        }
        let padded = format!("{:0>width$}", frac, width = scale as usize);
        write!(f, "{sign}{int_part}.{padded}")
    }
}
