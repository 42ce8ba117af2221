//! Facade over the four-layer APM numeric stack (spec.md §2):
//! [`apm_register`] (L1, bitwise/word arithmetic) under [`apm_whole`] (L2,
//! non-negative integers) under [`apm_integer`] (L3, signed integers and
//! rationals) under [`apm_decimal`] (L4, fixed-scale decimals and the
//! transcendental kernel).
//!
//! This crate has no logic of its own — it exists so a consumer can depend
//! on one crate and `use apm::prelude::*` rather than naming every layer.
//! The [`demos/basic_usage.rs`](https://github.com/apm-rs/apm) binary built
//! from this crate is the console driver spec.md §1 calls out as an
//! external collaborator, not part of the core.

pub mod prelude {
    pub use apm_decimal::{Decimal, DecimalContext, DecimalError, RoundingMode, DEFAULT_SCALE, MAX_SCALE, MIN_SCALE};
    pub use apm_integer::{Integer, IntegerParseError, Rational, Sign};
    pub use apm_register::{Register, RegisterError};
    pub use apm_types::{DoubleWord, Word, BITS, MASK};
    pub use apm_whole::{WholeNumber, WholeParseError};
}

pub use prelude::*;
