use num_traits::{NumCast, PrimInt};

use crate::sealed::Sealed;

// -------------------- InputElement with implementations for u8, u16, u32, char --------------------

/// The symbol type of the text. Every symbol is mapped to its ordinal before the construction starts.
pub trait InputElement: Sealed + std::fmt::Debug + Copy + Ord {
    fn ordinal(self) -> usize;
}

impl Sealed for u8 {}

impl InputElement for u8 {
    fn ordinal(self) -> usize {
        self.into()
    }
}

impl Sealed for u16 {}

impl InputElement for u16 {
    fn ordinal(self) -> usize {
        self.into()
    }
}

impl Sealed for u32 {}

impl InputElement for u32 {
    fn ordinal(self) -> usize {
        self as usize
    }
}

impl Sealed for char {}

impl InputElement for char {
    fn ordinal(self) -> usize {
        self as usize
    }
}

// -------------------- OutputElement with implementations for u32, u64, usize --------------------

/// The element type of the suffix array, inverse suffix array and LCP array.
///
/// The text has to be at most as long as the maximum value of this type.
pub trait OutputElement: Sealed + PrimInt + NumCast + std::fmt::Debug + std::fmt::Display {
    const MAX: Self;
    const ZERO: Self;

    /// Converts a value that is known to fit, because it is bounded by the text length.
    fn from_usize(value: usize) -> Self {
        <Self as NumCast>::from(value).expect("value should fit into the output element type")
    }

    fn into_usize(self) -> usize {
        <usize as NumCast>::from(self).expect("output element should fit into usize")
    }

    fn max_text_len() -> usize {
        <usize as NumCast>::from(Self::MAX).unwrap_or(usize::MAX)
    }
}

impl OutputElement for u32 {
    const MAX: Self = Self::MAX;
    const ZERO: Self = 0;
}

impl Sealed for u64 {}

impl OutputElement for u64 {
    const MAX: Self = Self::MAX;
    const ZERO: Self = 0;
}

impl Sealed for usize {}

impl OutputElement for usize {
    const MAX: Self = Self::MAX;
    const ZERO: Self = 0;
}
