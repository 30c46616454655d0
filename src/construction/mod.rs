// The algorithms behind the builder API. Everything in here works on `usize` offsets and codes,
// the conversion to the output element type happens in the builders.

pub(crate) mod alphabet;
pub(crate) mod kasai;
pub(crate) mod radix;
pub(crate) mod range_min;
pub(crate) mod skew;
