#![allow(unused)]

use rand::{Rng, SeedableRng, rngs::StdRng};
use skewsa::{InputElement, OutputElement};

use num_traits::NumCast;

pub fn setup_basic_example() -> &'static [u8; 11] {
    b"mississippi"
}

pub fn random_texts(seed: u64, count: usize, max_len: usize, alphabet: &[u8]) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let len = rng.random_range(0..=max_len);
            (0..len)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect()
        })
        .collect()
}

pub fn naive_suffix_array<I: InputElement>(text: &[I]) -> Vec<usize> {
    if text.is_empty() {
        return vec![0];
    }

    let mut suffix_array: Vec<_> = (0..text.len()).collect();
    suffix_array.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
    suffix_array
}

pub fn as_usize<O: OutputElement>(values: &[O]) -> Vec<usize> {
    values
        .iter()
        .map(|&v| <usize as NumCast>::from(v).unwrap())
        .collect()
}

pub fn is_suffix_array<I: InputElement, O: OutputElement>(
    text: &[I],
    maybe_suffix_array: &[O],
) -> bool {
    if text.is_empty() {
        return maybe_suffix_array.len() == 1 && maybe_suffix_array[0] == O::ZERO;
    }

    if text.len() != maybe_suffix_array.len() {
        return false;
    }

    let mut seen = vec![false; text.len()];

    for &entry in maybe_suffix_array {
        let i = <usize as NumCast>::from(entry).unwrap();

        if i >= text.len() || seen[i] {
            return false;
        }

        seen[i] = true;
    }

    for indices in maybe_suffix_array.windows(2) {
        let previous = <usize as NumCast>::from(indices[0]).unwrap();
        let current = <usize as NumCast>::from(indices[1]).unwrap();

        if text[previous..] >= text[current..] {
            return false;
        }
    }

    true
}

pub fn is_inverse<O: OutputElement>(suffix_array: &[O], inverse: &[O]) -> bool {
    if suffix_array.len() != inverse.len() {
        return false;
    }

    suffix_array.iter().enumerate().all(|(k, &i)| {
        let i = <usize as NumCast>::from(i).unwrap();
        <usize as NumCast>::from(inverse[i]).unwrap() == k
    })
}

pub fn is_lcp_array<I: InputElement, O: OutputElement>(
    text: &[I],
    suffix_array: &[O],
    lcp: &[O],
) -> bool {
    if lcp.len() != suffix_array.len() || lcp[0] != O::ZERO {
        return false;
    }

    for (i, indices) in suffix_array.windows(2).enumerate() {
        let first = <usize as NumCast>::from(indices[0]).unwrap();
        let second = <usize as NumCast>::from(indices[1]).unwrap();

        let lcp_value = <usize as NumCast>::from(lcp[i + 1]).unwrap();

        if longest_common_prefix(&text[first..], &text[second..]) != lcp_value {
            return false;
        }
    }

    true
}

pub fn longest_common_prefix<I: InputElement>(t1: &[I], t2: &[I]) -> usize {
    std::iter::zip(t1, t2).take_while(|(c1, c2)| c1 == c2).count()
}
