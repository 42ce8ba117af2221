//! The transcendental kernel: `ln`, `log_b`, the trigonometric and
//! hyperbolic families, and `hypot` (spec.md §4.5).
//!
//! Every series here runs in `Decimal` at the active scale and stops when
//! the current partial sum equals the previous one at full `Decimal`
//! equality — not just in their truncated integer parts, which is the
//! convergence-test defect spec.md §9 calls out ("Series convergence test
//! ... compares the integer part only ... terminates too early").

use crate::{record_error, DecimalError};
use crate::Decimal;
use apm_integer::Integer;
use apm_types::Word;
use std::cmp::Ordering;

impl Decimal {
    fn mul_by_u64(&self, k: u64) -> Self {
        Self::from_raw(self.raw_value().mul(&Integer::from_word(k as Word)))
    }

    fn div_by_u64(&self, k: u64) -> Self {
        Self::from_raw(self.raw_value().div_rem(&Integer::from_word(k as Word)).0)
    }

    fn mul_by_pow2(&self, k: u64) -> Self {
        if k == 0 {
            return self.clone();
        }
        self.mul_by_u64(1u64 << k.min(62))
    }

    /// Halve `v` via `v <- v / (1 + sqrt(1 + v^2))` until `|v| <=
    /// threshold`, returning the reduced value and the halving count
    /// (spec.md §4.5's shared shape for `asin` and `atan`).
    fn halve_until(&self, threshold: &Self) -> (Self, u64) {
        let mut v = self.clone();
        let mut k = 0u64;
        while v.abs().partial_cmp(threshold) == Some(Ordering::Greater) {
            let inner = Self::one().add(&v.mul(&v)).root(2);
            let denom = Self::one().add(&inner);
            v = v.div(&denom);
            k += 1;
        }
        (v, k)
    }

    /// `ln v` via spec.md §4.5: `v <= 0` is a domain error; `v == 1 -> 0`;
    /// `v == e -> 1`; `v < 1` reflects through `-ln(1/v)`; `v > 1` factors
    /// out `2^k` (`k` from the integer part's bit length) and evaluates
    /// `ln(v/2^k) + k*ln2` with the Taylor series in `x = (v-1)/(v+1)`.
    pub fn ln(&self) -> Self {
        if self.is_exceptional() {
            return self.clone();
        }
        if !self.is_positive() {
            record_error(DecimalError::DomainError("ln of a non-positive value".to_string()));
            return Self::undef();
        }
        if *self == Self::one() {
            return Self::zero();
        }
        if *self == Self::e() {
            return Self::one();
        }
        if self.partial_cmp(&Self::one()) == Some(Ordering::Less) {
            return Self::one().div(self).ln().neg();
        }

        let (q, _) = self.raw_value().div_rem(&Self::denominator());
        let k = q.magnitude().bit_len().saturating_sub(1);
        if k == 0 {
            return self.ln_kernel();
        }
        let divisor = Self::one().mul_by_pow2(k);
        let reduced = self.div(&divisor);
        reduced.ln_kernel().add(&Self::ln2().mul_by_u64(k))
    }

    /// `2 * sum_{n>=0} x^(2n+1)/(2n+1)` for `x = (v-1)/(v+1)`, valid for
    /// `v` close to `1` (the range this is called at after range
    /// reduction in [`Decimal::ln`]).
    fn ln_kernel(&self) -> Self {
        let x = self.sub(&Self::one()).div(&self.add(&Self::one()));
        let x_sq = x.mul(&x);
        let mut term = x.clone();
        let mut sum = Self::zero();
        let mut n: u64 = 0;
        loop {
            let next_sum = sum.add(&term.div_by_u64(2 * n + 1));
            if next_sum == sum {
                sum = next_sum;
                break;
            }
            sum = next_sum;
            term = term.mul(&x_sq);
            n += 1;
        }
        tracing::trace!(iterations = n, "ln_kernel series converged");
        sum.mul_by_u64(2)
    }

    /// `exp(v) = e^v`, the inverse of [`Decimal::ln`]. Range reduction
    /// splits `v = n + f` with `n = floor(v)` and `f` in `[0, 1)`, computes
    /// `e^n` by squaring and `e^f` from the direct Taylor kernel (fast to
    /// converge since `|f| < 1`), and multiplies the two back together.
    pub fn exp(&self) -> Self {
        if self.is_exceptional() {
            return self.clone();
        }
        if self.is_infinite() {
            return if self.is_positive() { Self::pos_infinity() } else { Self::zero() };
        }
        if self.is_zero() {
            return Self::one();
        }
        let n = self.floor();
        let f = self.sub(&n);
        let kernel = f.exp_kernel();
        match n.to_i64() {
            Some(steps) if steps >= 0 => Self::e().pow(steps as u64).mul(&kernel),
            Some(steps) => Self::one().div(&Self::e().pow(steps.unsigned_abs())).mul(&kernel),
            None => {
                record_error(DecimalError::DomainError("exp argument out of range".to_string()));
                Self::undef()
            }
        }
    }

    /// `sum_{n>=0} x^n/n!`, valid for any `x` but only used here after the
    /// range reduction in [`Decimal::exp`] restricts `x` to `[0, 1)`.
    fn exp_kernel(&self) -> Self {
        let mut term = Self::one();
        let mut sum = Self::zero();
        let mut n: u64 = 0;
        loop {
            let next_sum = sum.add(&term);
            if next_sum == sum {
                sum = next_sum;
                break;
            }
            sum = next_sum;
            n += 1;
            term = term.mul(self).div_by_u64(n);
        }
        tracing::trace!(iterations = n, "exp_kernel series converged");
        sum
    }

    /// `log_b(v) = ln(v) / ln(b)`, rounded to the exact integer answer
    /// when `b^floor(result) == v` (spec.md §4.5).
    pub fn log(&self, base: &Self) -> Self {
        if self.is_exceptional() || base.is_exceptional() {
            return Self::undef();
        }
        let result = self.ln().div(&base.ln());
        if let Some(exp) = result.floor().to_i64() {
            if exp >= 0 {
                if let Some(candidate) = base.checked_pow_exact(exp as u64) {
                    if candidate == *self {
                        return Self::from_i64(exp);
                    }
                }
            }
        }
        result
    }

    pub fn log2(&self) -> Self {
        self.log(&Self::from_i64(2))
    }

    pub fn log10(&self) -> Self {
        self.log(&Self::from_i64(10))
    }

    fn checked_pow_exact(&self, exp: u64) -> Option<Self> {
        if self.is_exceptional() {
            return None;
        }
        Some(self.pow(exp))
    }

    /// Reduce a degree value to `[-180, 180]` by first folding mod 360,
    /// then mod 180 with a sign flip noted, so the trig kernels only ever
    /// need to converge over a small range (spec.md §4.5).
    fn reduce_degrees(&self) -> (Self, bool) {
        let full_turn = Self::from_i64(360);
        let half_turn = Self::from_i64(180);
        let reduced = self.mod_decimal(&full_turn);
        if reduced.partial_cmp(&half_turn) == Some(Ordering::Greater) {
            (reduced.sub(&full_turn).neg(), true)
        } else {
            (reduced, false)
        }
    }

    /// True Euclidean remainder in `[0, |modulus|)`, built directly on
    /// `Integer::div_rem`'s genuine Euclidean semantics. Not the same as
    /// [`Decimal::rem`], whose spec-mandated meaning is the fractional
    /// part of a quotient rather than an ordinary remainder.
    fn mod_decimal(&self, modulus: &Self) -> Self {
        let d = Self::denominator();
        let scaled_self = self.raw_value().mul(&d);
        let scaled_modulus = modulus.raw_value().mul(&d);
        Self::from_raw(scaled_self.rem(&scaled_modulus).div_rem(&d).0)
    }

    fn degrees_to_radians(&self) -> Self {
        self.mul(&Self::pi()).div(&Self::from_i64(180))
    }

    /// `sin x = sum (-1)^n x^(2n+1) / (2n+1)!` after reducing the degree
    /// argument to `[-180, 180]` and converting to radians.
    pub fn sin(&self) -> Self {
        if self.is_exceptional() {
            return self.clone();
        }
        let (reduced, flipped) = self.reduce_degrees();
        let radians = reduced.degrees_to_radians();
        let value = radians.sin_kernel();
        if flipped { value.neg() } else { value }
    }

    fn sin_kernel(&self) -> Self {
        let x = self;
        let x_sq = x.mul(x);
        let mut term = x.clone();
        let mut sum = Self::zero();
        let mut n: u64 = 0;
        let mut positive = true;
        loop {
            let signed = if positive { term.clone() } else { term.neg() };
            let next_sum = sum.add(&signed);
            if next_sum == sum {
                sum = next_sum;
                break;
            }
            sum = next_sum;
            term = term.mul(&x_sq).div_by_u64((2 * n + 2) * (2 * n + 3));
            positive = !positive;
            n += 1;
        }
        tracing::trace!(iterations = n, "sin_kernel series converged");
        sum
    }

    /// `cos = sqrt(1 - sin^2 x)`. This formula has no way to recover the
    /// sign cos actually carries past 90 degrees (spec.md §4.5's own
    /// formula, flagged there as "poor choice near pi/2" but not among the
    /// redesign-mandated fixes in spec.md §9) — it is implemented exactly
    /// as specified, sign loss included.
    pub fn cos(&self) -> Self {
        if self.is_exceptional() {
            return self.clone();
        }
        let s = self.sin();
        Self::one().sub(&s.mul(&s)).root(2)
    }

    pub fn tan(&self) -> Self {
        if self.is_exceptional() {
            return self.clone();
        }
        self.sin().div(&self.cos())
    }

    /// Halving-angle reduction (threshold `0.5`) then the central-binomial
    /// arcsine series, scaled back up by `2^k` (spec.md §4.5).
    pub fn asin(&self) -> Self {
        if self.is_exceptional() {
            return self.clone();
        }
        if self.abs().partial_cmp(&Self::one()) == Some(Ordering::Greater) {
            record_error(DecimalError::DomainError("asin outside [-1, 1]".to_string()));
            return Self::undef();
        }
        let (reduced, k) = self.halve_until(&Self::from_ratio(1, 2));
        reduced.asin_kernel().mul_by_pow2(k)
    }

    fn asin_kernel(&self) -> Self {
        let v = self;
        let v_sq = v.mul(v);
        let mut term = v.clone();
        let mut sum = Self::zero();
        let mut n: u64 = 0;
        loop {
            let next_sum = sum.add(&term);
            if next_sum == sum {
                sum = next_sum;
                break;
            }
            sum = next_sum;
            let numerator = (2 * n + 1) * (2 * n + 1);
            let denominator = 2 * (n + 1) * (2 * n + 3);
            term = term.mul(&v_sq).mul_by_u64(numerator).div_by_u64(denominator);
            n += 1;
        }
        tracing::trace!(iterations = n, "asin_kernel series converged");
        sum
    }

    pub fn acos(&self) -> Self {
        if self.is_exceptional() {
            return self.clone();
        }
        Self::pi().div_by_u64(2).sub(&self.asin())
    }

    /// Halving-angle reduction (threshold `0.1`) then the arctangent
    /// series (spec.md §4.5).
    pub fn atan(&self) -> Self {
        if self.is_exceptional() {
            return self.clone();
        }
        let (reduced, k) = self.halve_until(&Self::from_ratio(1, 10));
        reduced.atan_kernel().mul_by_pow2(k)
    }

    fn atan_kernel(&self) -> Self {
        let v = self;
        let v_sq = v.mul(v);
        let mut term = v.clone();
        let mut sum = Self::zero();
        let mut n: u64 = 0;
        let mut positive = true;
        loop {
            let signed = if positive { term.clone() } else { term.neg() };
            let next_sum = sum.add(&signed);
            if next_sum == sum {
                sum = next_sum;
                break;
            }
            sum = next_sum;
            term = term.mul(&v_sq).mul_by_u64(2 * n + 1).div_by_u64(2 * n + 3);
            positive = !positive;
            n += 1;
        }
        tracing::trace!(iterations = n, "atan_kernel series converged");
        sum
    }

    /// Direct Taylor series, no range reduction (spec.md §4.5).
    pub fn sinh(&self) -> Self {
        if self.is_exceptional() {
            return self.clone();
        }
        let x = self;
        let x_sq = x.mul(x);
        let mut term = x.clone();
        let mut sum = Self::zero();
        let mut n: u64 = 0;
        loop {
            let next_sum = sum.add(&term);
            if next_sum == sum {
                sum = next_sum;
                break;
            }
            sum = next_sum;
            term = term.mul(&x_sq).div_by_u64((2 * n + 2) * (2 * n + 3));
            n += 1;
        }
        tracing::trace!(iterations = n, "sinh series converged");
        sum
    }

    pub fn cosh(&self) -> Self {
        if self.is_exceptional() {
            return self.clone();
        }
        let x = self;
        let x_sq = x.mul(x);
        let mut term = Self::one();
        let mut sum = Self::zero();
        let mut n: u64 = 0;
        loop {
            let next_sum = sum.add(&term);
            if next_sum == sum {
                sum = next_sum;
                break;
            }
            sum = next_sum;
            term = term.mul(&x_sq).div_by_u64((2 * n + 1) * (2 * n + 2));
            n += 1;
        }
        tracing::trace!(iterations = n, "cosh series converged");
        sum
    }

    pub fn tanh(&self) -> Self {
        if self.is_exceptional() {
            return self.clone();
        }
        self.sinh().div(&self.cosh())
    }

    /// `asinh v = ln(v + sqrt(v^2 + 1))` (spec.md §4.5).
    pub fn asinh(&self) -> Self {
        if self.is_exceptional() {
            return self.clone();
        }
        let inner = self.mul(self).add(&Self::one()).root(2).add(self);
        inner.ln()
    }

    /// `acosh v = ln(v + sqrt(v^2 - 1))`, domain-restricted to `v >= 1`.
    pub fn acosh(&self) -> Self {
        if self.is_exceptional() {
            return self.clone();
        }
        let diff = self.mul(self).sub(&Self::one());
        if diff.is_negative() {
            record_error(DecimalError::DomainError("acosh of a value below 1".to_string()));
            return Self::undef();
        }
        let inner = diff.root(2).add(self);
        inner.ln()
    }

    /// `atanh v = (1/2) * ln((1+v)/(1-v))`, domain-restricted to `|v| < 1`.
    pub fn atanh(&self) -> Self {
        if self.is_exceptional() {
            return self.clone();
        }
        let denominator = Self::one().sub(self);
        if denominator.is_zero() {
            record_error(DecimalError::DomainError("atanh of +-1".to_string()));
            return Self::undef();
        }
        let numerator = Self::one().add(self);
        numerator.div(&denominator).ln().div_by_u64(2)
    }

    /// `hypot(a, b) = sqrt(a^2 + b^2)`.
    pub fn hypot(&self, other: &Self) -> Self {
        if self.is_exceptional() || other.is_exceptional() {
            return Self::undef();
        }
        self.mul(self).add(&other.mul(other)).root(2)
    }

    /// Three-argument form: `sqrt(a^2 + b^2 + c^2)` (spec.md §4.5:
    /// "three-argument form adds c^2").
    pub fn hypot3(&self, b: &Self, c: &Self) -> Self {
        if self.is_exceptional() || b.is_exceptional() || c.is_exceptional() {
            return Self::undef();
        }
        self.mul(self).add(&b.mul(b)).add(&c.mul(c)).root(2)
    }
}
