use log::{debug, trace};

use super::{alphabet::get, radix::radix_pass};

/// Computes the suffix array of `text` using the DC3 (skew) algorithm.
///
/// All codes of `text` have to be in `[1, alphabet_bound]`. Texts shorter than 2 yield `[0]`.
pub(crate) fn suffix_array(text: &[usize], alphabet_bound: usize) -> Vec<usize> {
    skew(text, alphabet_bound, 0)
}

fn skew(text: &[usize], alphabet_bound: usize, depth: usize) -> Vec<usize> {
    let len = text.len();

    if len < 2 {
        return vec![0];
    }

    // number of offsets in the classes 0, 1 and 2. When len % 3 == 1, class 1 additionally contains
    // the phantom offset `len`, whose triple (0, 0, 0) terminates the class 1 block of the reduced text.
    let class0_len = len.div_ceil(3);
    let class1_len = (len + 1) / 3;
    let class2_len = len / 3;
    let class12_len = class0_len + class2_len;

    let class12: Vec<_> = (0..len + class0_len - class1_len)
        .filter(|i| i % 3 != 0)
        .collect();

    let sorted12 = radix_pass(&class12, |i| get(text, i + 2), alphabet_bound);
    let sorted12 = radix_pass(&sorted12, |i| get(text, i + 1), alphabet_bound);
    let sorted12 = radix_pass(&sorted12, |i| get(text, i), alphabet_bound);

    // the reduced text: all class 1 offsets first, then all class 2 offsets, both by offset / 3
    let slot_of = |i: usize| {
        if i % 3 == 1 {
            i / 3
        } else {
            i / 3 + class0_len
        }
    };
    let offset_of = |slot: usize| {
        if slot < class0_len {
            slot * 3 + 1
        } else {
            (slot - class0_len) * 3 + 2
        }
    };

    let mut reduced_text = vec![0; class12_len];
    let mut num_names = 0;
    let mut previous_triple = None;

    for &i in &sorted12 {
        let triple = (get(text, i), get(text, i + 1), get(text, i + 2));

        if previous_triple != Some(triple) {
            num_names += 1;
            previous_triple = Some(triple);
        }

        reduced_text[slot_of(i)] = num_names;
    }

    debug!(
        "skew level {depth}: {len} symbols, alphabet bound {alphabet_bound}, {num_names} distinct triples out of {class12_len}"
    );

    let reduced_suffix_array = if num_names < class12_len {
        skew(&reduced_text, num_names, depth + 1)
    } else {
        trace!("skew level {depth}: all triples are unique, no recursion needed");

        let mut reduced_suffix_array = vec![0; class12_len];
        for (slot, &name) in reduced_text.iter().enumerate() {
            reduced_suffix_array[name - 1] = slot;
        }
        reduced_suffix_array
    };

    // ranks of the class 1 and 2 suffixes, indexed by text offset. 0 is the sentinel rank
    // for offsets past the end of the text.
    let mut rank12 = vec![0; len + 3];
    let sorted12: Vec<_> = reduced_suffix_array
        .iter()
        .map(|&slot| offset_of(slot))
        .collect();

    for (rank, &i) in sorted12.iter().enumerate() {
        rank12[i] = rank + 1;
    }

    let rank = |i: usize| get(&rank12, i);

    let class0: Vec<_> = (0..len).step_by(3).collect();
    let sorted0 = radix_pass(&class0, |i| rank(i + 1), class12_len);
    let sorted0 = radix_pass(&sorted0, |i| text[i], alphabet_bound);

    let class0_precedes = |i0: usize, i12: usize| {
        if i12 % 3 == 1 {
            (text[i0], rank(i0 + 1)) <= (text[i12], rank(i12 + 1))
        } else {
            (text[i0], get(text, i0 + 1), rank(i0 + 2))
                <= (text[i12], get(text, i12 + 1), rank(i12 + 2))
        }
    };

    merge(&sorted0, &sorted12, len, class0_precedes)
}

fn merge<F>(sorted0: &[usize], sorted12: &[usize], len: usize, class0_precedes: F) -> Vec<usize>
where
    F: Fn(usize, usize) -> bool,
{
    let mut suffix_array = Vec::with_capacity(len);

    // the phantom offset is the smallest of its class and not part of the output
    let sorted12: Vec<_> = sorted12.iter().copied().filter(|&i| i < len).collect();

    let mut p0 = 0;
    let mut p12 = 0;

    while p0 < sorted0.len() && p12 < sorted12.len() {
        if class0_precedes(sorted0[p0], sorted12[p12]) {
            suffix_array.push(sorted0[p0]);
            p0 += 1;
        } else {
            suffix_array.push(sorted12[p12]);
            p12 += 1;
        }
    }

    suffix_array.extend_from_slice(&sorted0[p0..]);
    suffix_array.extend_from_slice(&sorted12[p12..]);

    suffix_array
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn naive_suffix_array(text: &[usize]) -> Vec<usize> {
        let mut suffix_array: Vec<_> = (0..text.len()).collect();
        suffix_array.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
        suffix_array
    }

    fn codes(text: &[u8]) -> Vec<usize> {
        text.iter().map(|&c| c as usize + 1).collect()
    }

    #[test]
    fn degenerate_lengths() {
        assert_eq!(suffix_array(&[], 0), [0]);
        assert_eq!(suffix_array(&[1], 1), [0]);
        assert_eq!(suffix_array(&[2, 1], 2), [1, 0]);
        assert_eq!(suffix_array(&[1, 1], 1), [1, 0]);
    }

    #[test]
    fn mississippi() {
        assert_eq!(
            suffix_array(&codes(b"mississippi"), 256),
            [10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]
        );
    }

    #[test]
    fn identical_symbols() {
        for len in 2..20 {
            let text = vec![1; len];
            let expected: Vec<_> = (0..len).rev().collect();
            assert_eq!(suffix_array(&text, 1), expected);
        }
    }

    #[test]
    fn recursion_on_periodic_texts() {
        for text in [
            b"abababababababab".as_slice(),
            b"abcabcabcabcabcabcab",
            b"aabaabaabaabaab",
            b"banana",
            b"yabbadabbado",
        ] {
            let text = codes(text);
            assert_eq!(suffix_array(&text, 256), naive_suffix_array(&text));
        }
    }

    #[test]
    fn random_texts_match_naive_sort() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..300 {
            let len = rng.random_range(2..200);
            let alphabet_bound = rng.random_range(1..5);
            let text: Vec<_> = (0..len)
                .map(|_| rng.random_range(1..=alphabet_bound))
                .collect();

            assert_eq!(
                suffix_array(&text, alphabet_bound),
                naive_suffix_array(&text),
                "text: {text:?}"
            );
        }
    }
}
