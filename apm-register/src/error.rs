use thiserror::Error;

/// Failures internal to register construction and radix conversion.
///
/// These never escape past [`crate::Register`]'s lenient constructors; they
/// exist so callers one layer up (whole-number parsing) can distinguish
/// "bad digit" from "bad radix" when deciding how to fall back to an
/// `undef`/`nan` sentinel.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    /// A digit fell outside `[0, base)` for the requested radix.
    #[error("digit {digit} is not valid in base {base}")]
    InvalidDigit {
        /// The offending digit's numeric value.
        digit: u32,
        /// The radix being parsed.
        base: u32,
    },
    /// The requested radix is outside the supported range.
    #[error("radix {0} is out of range (expected 2..=360)")]
    InvalidRadix(u32),
}
