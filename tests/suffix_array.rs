use skewsa::{SuffixArrayConstruction, suffix_array::SuffixArrayWithText, typestate::OwnedBuffer};

mod common;

use common::*;

#[test]
fn empty_text() {
    let res: SuffixArrayWithText<u8, u32, OwnedBuffer> = SuffixArrayConstruction::for_text(&[])
        .in_owned_buffer32()
        .run();

    assert_eq!(res.suffix_array(), &[0]);
    assert!(is_suffix_array(res.text(), res.suffix_array()));
}

#[test]
fn single_symbol() {
    let res = SuffixArrayConstruction::for_text(b"x".as_slice())
        .in_owned_buffer32()
        .run();

    assert_eq!(res.suffix_array(), &[0]);
}

#[test]
fn mississippi() {
    let text = setup_basic_example();

    let res = SuffixArrayConstruction::for_text(text)
        .in_owned_buffer32()
        .run();

    assert_eq!(as_usize(res.suffix_array()), naive_suffix_array(text));
    assert_eq!(res.suffix_array(), &[10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]);
}

#[test]
fn identical_symbols_sort_shorter_suffixes_first() {
    let text = b"aaaa";

    let res = SuffixArrayConstruction::for_text(text)
        .in_owned_buffer32()
        .run();

    assert_eq!(as_usize(res.suffix_array()), naive_suffix_array(text));
    assert_eq!(res.suffix_array(), &[3, 2, 1, 0]);
}

#[test]
fn zero_bytes_in_text() {
    let text = [0u8, 0, 1, 0, 0, 1, 0];

    let res = SuffixArrayConstruction::for_text(&text)
        .in_owned_buffer64()
        .run();

    assert!(is_suffix_array(&text, res.suffix_array()));
}

#[test]
fn random_binary_and_dna_texts() {
    for text in random_texts(42, 200, 300, b"ab") {
        let res = SuffixArrayConstruction::for_text(&text)
            .in_owned_buffer32()
            .run();

        assert!(is_suffix_array(&text, res.suffix_array()), "text: {text:?}");
    }

    for text in random_texts(43, 100, 500, b"acgt") {
        let res = SuffixArrayConstruction::for_text(&text)
            .in_owned_buffer::<usize>()
            .run();

        assert_eq!(res.suffix_array(), naive_suffix_array(&text));
    }
}

#[test]
fn all_byte_values() {
    let text: Vec<u8> = (0..=255u8).rev().chain(0..=255).collect();

    let res = SuffixArrayConstruction::for_text(&text)
        .in_owned_buffer32()
        .run();

    assert!(is_suffix_array(&text, res.suffix_array()));
}

#[test]
fn wide_symbols() {
    let text: Vec<u16> = vec![1000, 3, 1000, 3, 65535, 0, 1000, 3];

    let res = SuffixArrayConstruction::for_text(&text)
        .in_owned_buffer32()
        .run();

    assert!(is_suffix_array(&text, res.suffix_array()));

    let text: Vec<u32> = vec![u32::MAX, 7, u32::MAX, 7, 7];

    let dense = SuffixArrayConstruction::for_text(&text)
        .in_owned_buffer32()
        .with_dense_alphabet()
        .run();

    assert!(is_suffix_array(&text, dense.suffix_array()));

    // the ordinal encoding of this text falls back to the dense encoding
    let ordinal = SuffixArrayConstruction::for_text(&text)
        .in_owned_buffer32()
        .run();

    assert_eq!(ordinal.suffix_array(), &[4, 3, 1, 2, 0]);
    assert_eq!(ordinal.suffix_array(), dense.suffix_array());
}

#[test]
fn dense_alphabet_gives_the_same_suffix_array() {
    let text: Vec<char> = "tschüß, straße, größe, süß".chars().collect();

    let ordinal = SuffixArrayConstruction::for_text(&text)
        .in_owned_buffer32()
        .run();

    let dense = SuffixArrayConstruction::for_text(&text)
        .in_owned_buffer32()
        .with_dense_alphabet()
        .run();

    assert_eq!(ordinal.suffix_array(), dense.suffix_array());
    assert!(is_suffix_array(&text, dense.suffix_array()));
}

#[test]
fn borrowed_buffer() {
    let text = setup_basic_example();
    let mut suffix_array_buffer = vec![0u64; text.len() + 5];

    let res = SuffixArrayConstruction::for_text(text)
        .in_borrowed_buffer(&mut suffix_array_buffer)
        .run();

    assert!(is_suffix_array(text, res.suffix_array()));

    let (suffix_array, returned_text) = res.into_parts();
    assert_eq!(suffix_array.len(), text.len());
    assert_eq!(returned_text, text);

    assert_eq!(&suffix_array_buffer[..text.len()], &[10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]);
}

#[test]
#[should_panic]
fn borrowed_buffer_too_short() {
    let text = setup_basic_example();
    let mut suffix_array_buffer = vec![0u32; text.len() - 1];

    let _ = SuffixArrayConstruction::for_text(text)
        .in_borrowed_buffer(&mut suffix_array_buffer)
        .run();
}

#[test]
fn deterministic() {
    for text in random_texts(7, 20, 200, b"xyz") {
        let first = SuffixArrayConstruction::for_text(&text)
            .in_owned_buffer32()
            .run()
            .lcp_construction()
            .run();

        let second = SuffixArrayConstruction::for_text(&text)
            .in_owned_buffer32()
            .run()
            .lcp_construction()
            .run();

        assert_eq!(first.suffix_array(), second.suffix_array());
        assert_eq!(first.inverse_suffix_array(), second.inverse_suffix_array());
        assert_eq!(first.lcp(), second.lcp());
    }
}

#[test]
fn from_parts() {
    let text = b"banana".as_slice();
    let suffix_array = vec![5u32, 3, 1, 0, 4, 2];

    // SAFETY: this is the suffix array of "banana"
    let res: SuffixArrayWithText<_, _, OwnedBuffer> =
        unsafe { SuffixArrayWithText::from_parts(suffix_array, text) };

    let res_with_lcp = res.lcp_construction().run();

    assert_eq!(res_with_lcp.lcp(), &[0, 1, 3, 0, 0, 2]);
}
