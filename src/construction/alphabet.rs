use crate::InputElement;

/// Reads `array[index]`, or the sentinel 0 when `index` is past the end.
#[inline]
pub(crate) fn get(array: &[usize], index: usize) -> usize {
    array.get(index).copied().unwrap_or(0)
}

/// A text mapped to integer codes in `[1, alphabet_bound]`. The code 0 is reserved for the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EncodedText {
    pub(crate) codes: Vec<usize>,
    pub(crate) alphabet_bound: usize,
}

/// Every symbol is mapped to its ordinal plus one.
pub(crate) fn encode_ordinal<I: InputElement>(text: &[I]) -> EncodedText {
    let codes: Vec<_> = text.iter().map(|c| c.ordinal() + 1).collect();
    let alphabet_bound = codes.iter().copied().max().unwrap_or(0);

    EncodedText {
        codes,
        alphabet_bound,
    }
}

/// The distinct symbols of the text are mapped to `1..=sigma` in their original order.
pub(crate) fn encode_dense<I: InputElement>(text: &[I]) -> EncodedText {
    let mut distinct = text.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    let codes = text
        .iter()
        .map(|c| {
            // every symbol of the text is in `distinct`
            distinct.binary_search(c).map_or(0, |position| position + 1)
        })
        .collect();

    EncodedText {
        codes,
        alphabet_bound: distinct.len(),
    }
}
