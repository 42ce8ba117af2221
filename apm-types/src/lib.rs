//! Atomic types shared across the APM numeric stack.
//!
//! Every layer above the binary register is built on a single, concrete
//! `(Word, DoubleWord)` pair rather than a generic parameter threaded
//! through the whole API (see the design note on word-width polymorphism).

/// The register's atomic unsigned word.
pub type Word = u64;

/// A double-width accumulator used for carrying multiplication and addition.
pub type DoubleWord = u128;

/// Number of bits in a [`Word`].
pub const BITS: u32 = Word::BITS;

/// All bits set: the word-sized bitwise mask.
pub const MASK: Word = Word::MAX;

/// Maximum supported output/parse radix (spec allows up to 360 for
/// diagnostic purposes; standard alphanumeric digits cover up to 36).
pub const MAX_RADIX: u32 = 360;

/// Map an ASCII character to its digit value for radices up to 36
/// (`0-9`, then `a-z`/`A-Z`). Returns `None` for anything else.
pub fn ascii_digit(c: char) -> Option<u32> {
    c.to_digit(36)
}
