/// `inverse[suffix_array[k]] = k` for all `k`.
pub(crate) fn inverse_suffix_array(suffix_array: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0; suffix_array.len()];

    for (rank, &i) in suffix_array.iter().enumerate() {
        inverse[i] = rank;
    }

    inverse
}

/// Kasai's algorithm. `lcp[k]` is the length of the longest common prefix of the suffixes at
/// `suffix_array[k - 1]` and `suffix_array[k]`, `lcp[0]` is 0.
///
/// Text positions are visited in text order, so the match length of the previous position minus one
/// is a lower bound for the current one. This bounds the number of symbol comparisons by `2n`.
pub(crate) fn lcp_array<T: Eq>(text: &[T], suffix_array: &[usize], inverse: &[usize]) -> Vec<usize> {
    let mut lcp = vec![0; suffix_array.len()];
    let mut h = 0usize;

    for (i, &rank) in inverse.iter().enumerate() {
        if rank == 0 {
            h = 0;
            continue;
        }

        let j = suffix_array[rank - 1];

        while i + h < text.len() && j + h < text.len() && text[i + h] == text[j + h] {
            h += 1;
        }

        lcp[rank] = h;
        h = h.saturating_sub(1);
    }

    lcp
}
