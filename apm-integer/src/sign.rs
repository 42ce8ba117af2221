use strum::Display;

/// The seven-way sign tag that turns a non-negative [`apm_whole::WholeNumber`]
/// magnitude into a signed value with `NaN`/`undef`/infinity sentinels.
///
/// Declaration order doubles as the total order spec.md §4.3 requires:
/// `nan < undef < -inf < negative < zero < positive < +inf`. [`Integer`]'s
/// `PartialOrd`/`PartialEq` impls still special-case `Nan`/`Undef` to return
/// `None`/`false` per the "NaN-marker" comparison rule — this discriminant
/// order is what [`Integer::cmp_total`] and the increment/decrement sign
/// flips rely on internally.
///
/// [`Integer`]: crate::Integer
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    #[strum(serialize = "nan")]
    Nan,
    #[strum(serialize = "undefined")]
    Undef,
    #[strum(serialize = "-infinity")]
    NegInfinity,
    #[strum(serialize = "negative")]
    Negative,
    #[strum(serialize = "zero")]
    Zero,
    #[strum(serialize = "positive")]
    Positive,
    #[strum(serialize = "+infinity")]
    PosInfinity,
}

impl Sign {
    /// The involution spec.md §4.3 describes for unary minus:
    /// `positive <-> negative`, `+inf <-> -inf`, `zero` and the absorbing
    /// sentinels (`nan`, `undef`) are fixed points.
    pub fn negated(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
            Sign::PosInfinity => Sign::NegInfinity,
            Sign::NegInfinity => Sign::PosInfinity,
            other => other,
        }
    }

    pub fn is_absorbing(self) -> bool {
        matches!(self, Sign::Nan | Sign::Undef)
    }

    pub fn is_infinite(self) -> bool {
        matches!(self, Sign::PosInfinity | Sign::NegInfinity)
    }

    pub fn is_negative(self) -> bool {
        matches!(self, Sign::Negative | Sign::NegInfinity)
    }

    pub fn is_positive(self) -> bool {
        matches!(self, Sign::Positive | Sign::PosInfinity)
    }

    /// The sign of a product or quotient of two finite, nonzero operands:
    /// positive if the signs agree, negative otherwise.
    pub fn combine_mul(self, other: Sign) -> Sign {
        if self.is_negative() == other.is_negative() {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}
