/*!
 * Linear-time suffix array construction using the DC3 (difference cover modulo 3, also known as skew)
 * algorithm, together with the inverse suffix array, the longest common prefix array (LCP) and
 * LCP queries for arbitrary pairs of suffixes.
 *
 * The API is a ladder of builder-like structs. First, a suffix array is constructed using
 * [`SuffixArrayConstruction`]. The result bundles the suffix array with a reference to the text and can be
 * used to compute the inverse suffix array and the LCP array using [`LcpConstruction`]. The final
 * [`SuffixArrayWithLcp`] answers queries about ranks, suffixes and longest common prefixes.
 *
 * ```
 * use skewsa::SuffixArrayConstruction;
 *
 * let text = b"mississippi".as_slice();
 *
 * let res = SuffixArrayConstruction::for_text(text)
 *     .in_owned_buffer32()
 *     .run();
 *
 * assert_eq!(res.suffix_array(), &[10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]);
 *
 * let res_with_lcp = res.lcp_construction().run();
 *
 * assert_eq!(res_with_lcp.lcp(), &[0, 1, 1, 4, 0, 0, 1, 0, 2, 1, 3]);
 * assert_eq!(res_with_lcp.longest_common_prefix(4, 1), Ok(4));
 * ```
 *
 * # Sentinel Convention
 *
 * Suffixes are sorted as if the text was terminated by a unique, lexicographically smallest character.
 * This character is never part of the text or the output, therefore the suffix array has the same length as
 * the text. A suffix that is a proper prefix of another suffix is always sorted first.
 *
 * The only exception is the empty text. By convention, its suffix array is `[0]`, which represents the
 * single empty suffix.
 *
 * # Logging
 *
 * This library uses the [`log`](https://docs.rs/log) facade and emits `debug` records during construction.
 * No logger is installed by the library.
 */

mod construction;
mod error;
mod owned_or_borrowed;
mod type_model;

pub mod lcp;
pub mod suffix_array;
pub mod typestate;

#[doc(inline)]
pub use error::SuffixArrayError;

#[doc(inline)]
pub use type_model::{InputElement, OutputElement};

#[doc(inline)]
pub use suffix_array::SuffixArrayConstruction;

#[doc(inline)]
pub use lcp::{LcpConstruction, RangeMinimum, SuffixArrayWithLcp};

mod sealed {
    pub trait Sealed {}
}
