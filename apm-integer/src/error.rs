use thiserror::Error;

/// Reasons a text literal couldn't be parsed into an [`crate::Integer`].
///
/// Per spec.md §7 ("never throw"), nothing public returns this directly —
/// `Integer::from_str_radix` folds it into `Integer::undef()`. It exists so
/// `apm-decimal`'s text constructor, one layer up, can distinguish "bad
/// digit" from "empty input" when deciding how to report its own
/// `DecimalError`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntegerParseError {
    #[error("empty integer literal")]
    Empty,
    #[error(transparent)]
    Whole(#[from] apm_whole::WholeParseError),
}
