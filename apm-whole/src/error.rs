use thiserror::Error;

/// Failures parsing text into a [`crate::WholeNumber`].
///
/// Unlike `apm-register`'s lenient digit scanner, whole-number parsing is
/// strict (spec.md §4.2: "Any digit outside `[0, base)` sets an error flag
/// and zeros the result"). Callers one layer up (`Integer`, `Decimal`) catch
/// this and fold it into the `undef`/`nan` sentinel rather than propagating
/// a `Result`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WholeParseError {
    /// A character in the input isn't a valid digit for `base`.
    #[error("'{digit}' is not a valid digit in base {base}")]
    InvalidDigit { digit: char, base: u32 },
    /// Only radices 2, 8, 10 and 16 are accepted.
    #[error("unsupported whole-number radix {0} (expected 2, 8, 10 or 16)")]
    UnsupportedRadix(u32),
}
