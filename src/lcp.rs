/*!
 * Construct the inverse suffix array and the [longest common prefix array] (LCP) for a suffix array and answer
 * longest common prefix queries for arbitrary pairs of suffixes.
 *
 * [`LcpConstruction`] provides a builder-like API. It can only be obtained from a
 * [`SuffixArrayWithText`], which is in turn obtained from a suffix array construction or by using its `unsafe`
 * constructor. The LCP array is computed using the linear-time algorithm of [Kasai et al.].
 *
 * ```
 * use skewsa::{RangeMinimum, SuffixArrayConstruction};
 *
 * let text = b"abracadabra".as_slice();
 *
 * let res = SuffixArrayConstruction::for_text(text)
 *     .in_owned_buffer32()
 *     .run();
 *
 * let res_with_lcp = res.lcp_construction()
 *     .with_range_minimum(RangeMinimum::SparseTable)
 *     .run();
 *
 * // "abra" is shared by the suffixes at offsets 0 and 7
 * assert_eq!(res_with_lcp.longest_common_prefix(0, 7), Ok(4));
 * assert_eq!(res_with_lcp.suffix_text(0), Ok(b"a".as_slice()));
 * ```
 *
 * # Output Convention
 *
 * The LCP array always starts with a 0. The second entry is the LCP value for the first two suffixes
 * of the suffix array, and so on.
 *
 * # Longest Common Prefix Queries
 *
 * The longest common prefix of the suffixes at two offsets `p != q` is the minimum of the LCP array over the
 * range `(min(rank[p], rank[q]), max(rank[p], rank[q])]`. This minimum is either found by scanning the range
 * ([`RangeMinimum::LinearScan`], the default) or using a sparse table that is built once and answers every query
 * in constant time ([`RangeMinimum::SparseTable`]). Both strategies give the same answers.
 *
 * [longest common prefix array]: https://en.wikipedia.org/wiki/LCP_array
 * [Kasai et al.]: https://doi.org/10.1007/3-540-48194-X_17
 */

use log::debug;

use crate::{
    InputElement, OutputElement, SuffixArrayError,
    construction::{
        kasai,
        range_min::{self, SparseTable},
    },
    error::check_index,
    owned_or_borrowed::OwnedOrBorrowed,
    suffix_array::SuffixArrayWithText,
    typestate::BufferMode,
};

/// The strategy used to find the minimum of a range of the LCP array.
///
/// See [`lcp`](self#longest-common-prefix-queries) for details.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RangeMinimum {
    /// No preprocessing, linear time per query.
    #[default]
    LinearScan,
    /// `O(n log n)` preprocessing, constant time per query.
    SparseTable,
}

/// Construct the inverse suffix array and the LCP array for a suffix array and text.
///
/// See [`lcp`](self) for details.
#[derive(Debug)]
pub struct LcpConstruction<'s, 't, I: InputElement, O: OutputElement, B: BufferMode> {
    suffix_array_with_text: SuffixArrayWithText<'s, 't, I, O, B>,
    range_minimum: RangeMinimum,
}

impl<'s, 't, I: InputElement, O: OutputElement, B: BufferMode> LcpConstruction<'s, 't, I, O, B> {
    pub(crate) fn new(suffix_array_with_text: SuffixArrayWithText<'s, 't, I, O, B>) -> Self {
        Self {
            suffix_array_with_text,
            range_minimum: RangeMinimum::default(),
        }
    }

    /// Choose how the range minimum of longest common prefix queries is computed.
    pub fn with_range_minimum(self, range_minimum: RangeMinimum) -> Self {
        Self {
            range_minimum,
            ..self
        }
    }

    pub fn run(self) -> SuffixArrayWithLcp<'s, 't, I, O, B> {
        let SuffixArrayWithText { suffix_array, text } = self.suffix_array_with_text;

        let raw_suffix_array: Vec<_> = suffix_array
            .as_slice()
            .iter()
            .map(|&i| i.into_usize())
            .collect();

        let raw_inverse = kasai::inverse_suffix_array(&raw_suffix_array);
        let raw_lcp = kasai::lcp_array(text, &raw_suffix_array, &raw_inverse);

        let inverse_suffix_array: Vec<O> = raw_inverse.into_iter().map(O::from_usize).collect();
        let lcp: Vec<O> = raw_lcp.into_iter().map(O::from_usize).collect();

        debug!("constructed LCP array for text of length {}", text.len());

        let sparse_table = match self.range_minimum {
            RangeMinimum::LinearScan => None,
            RangeMinimum::SparseTable => {
                let sparse_table = SparseTable::new(&lcp);
                debug!("built sparse table with {} levels", sparse_table.num_levels());
                Some(sparse_table)
            }
        };

        SuffixArrayWithLcp {
            suffix_array,
            inverse_suffix_array,
            lcp,
            sparse_table,
            text,
        }
    }
}

/// The read-only return type of an LCP construction. Answers the queries about suffixes, ranks and
/// longest common prefixes.
///
/// All of the data is immutable, so a shared reference can be used by many readers at once.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SuffixArrayWithLcp<'s, 't, I: InputElement, O: OutputElement, B: BufferMode> {
    suffix_array: OwnedOrBorrowed<'s, O, B>,
    inverse_suffix_array: Vec<O>,
    lcp: Vec<O>,
    sparse_table: Option<SparseTable<O>>,
    text: &'t [I],
}

impl<'s, 't, I: InputElement, O: OutputElement, B: BufferMode> SuffixArrayWithLcp<'s, 't, I, O, B> {
    pub fn suffix_array(&self) -> &[O] {
        self.suffix_array.as_slice()
    }

    /// `inverse_suffix_array()[suffix_array()[k]] == k` for all `k`.
    pub fn inverse_suffix_array(&self) -> &[O] {
        &self.inverse_suffix_array
    }

    pub fn lcp(&self) -> &[O] {
        &self.lcp
    }

    pub fn text(&self) -> &'t [I] {
        self.text
    }

    /// Length of the text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn range_minimum(&self) -> RangeMinimum {
        if self.sparse_table.is_some() {
            RangeMinimum::SparseTable
        } else {
            RangeMinimum::LinearScan
        }
    }

    /// The text offset of the suffix with the given rank, `suffix_array()[rank]`.
    pub fn suffix_at(&self, rank: usize) -> Result<usize, SuffixArrayError> {
        let suffix_array = self.suffix_array();
        let rank = check_index(rank, suffix_array.len())?;

        Ok(suffix_array[rank].into_usize())
    }

    /// The rank of the suffix at the given text offset, `inverse_suffix_array()[offset]`.
    pub fn rank_of(&self, offset: usize) -> Result<usize, SuffixArrayError> {
        let offset = check_index(offset, self.text.len())?;

        Ok(self.inverse_suffix_array[offset].into_usize())
    }

    /// The suffix with the given rank.
    pub fn suffix_text(&self, rank: usize) -> Result<&'t [I], SuffixArrayError> {
        let offset = self.suffix_at(rank)?;

        Ok(&self.text[offset..])
    }

    /// Length of the longest common prefix of the suffixes at the text offsets `p` and `q`.
    ///
    /// See [`lcp`](self#longest-common-prefix-queries) for details.
    pub fn longest_common_prefix(&self, p: usize, q: usize) -> Result<usize, SuffixArrayError> {
        let rank_p = self.rank_of(p)?;
        let rank_q = self.rank_of(q)?;

        if p == q {
            return Ok(self.text.len() - p);
        }

        let lo = rank_p.min(rank_q) + 1;
        let hi = rank_p.max(rank_q);

        let min = match &self.sparse_table {
            Some(sparse_table) => sparse_table.min(lo, hi),
            None => range_min::scan_min(&self.lcp, lo, hi),
        };

        Ok(min.into_usize())
    }

    pub fn into_parts(self) -> (B::Buffer<'s, O>, Vec<O>, Vec<O>, &'t [I]) {
        (
            self.suffix_array.into_inner(),
            self.inverse_suffix_array,
            self.lcp,
            self.text,
        )
    }
}
