use thiserror::Error;

/// The typed reason a [`crate::Decimal`] construction or transcendental
/// evaluation fell back to `undef`/`nan`.
///
/// Nothing public returns this as a `Result` — spec.md §7's "never throw"
/// contract means every fallible operation instead returns an
/// `undef`/`nan`-tagged `Decimal` — but the last one raised is recorded and
/// retrievable via [`crate::Decimal::last_error`] for diagnostics, the same
/// way the teacher's `InterpreterError`/`RuntimeError` stay internal to the
/// VM while still being real, inspectable types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecimalError {
    #[error("empty decimal literal")]
    EmptyLiteral,
    #[error("malformed decimal literal {0:?}")]
    MalformedLiteral(String),
    #[error(transparent)]
    Integer(#[from] apm_integer::IntegerParseError),
    #[error("argument {0:?} outside the domain of the requested function")]
    DomainError(String),
    #[error("scale {0} is outside the supported range")]
    ScaleOutOfRange(u32),
    #[error("unrecognized rounding mode {0:?}")]
    UnknownRoundingMode(String),
}
