/*!
 * Construct the [suffix array] for a text using [`SuffixArrayConstruction`].
 *
 * The construction is based on the DC3 algorithm by Kärkkäinen and Sanders, also known as the [skew algorithm].
 * It runs in linear time. The suffixes starting at offsets `i % 3 != 0` are sorted recursively on a text of
 * two thirds of the size, the remaining suffixes are sorted using their ranks and both lists are merged.
 *
 * The entry point to the API is the [`SuffixArrayConstruction`] builder-like struct. It is always required to
 * pass the input text and register the output element. Further configuration options include supplying an
 * output buffer and requesting a dense re-encoding of the alphabet.
 *
 * ```
 * use skewsa::SuffixArrayConstruction;
 *
 * let text: Vec<char> = "アイスクリーム".chars().collect();
 *
 * let mut my_suffix_array_buffer = vec![0u64; 10];
 *
 * let res = SuffixArrayConstruction::for_text(&text)
 *     .in_borrowed_buffer(&mut my_suffix_array_buffer)
 *     .with_dense_alphabet()
 *     .run();
 *
 * assert_eq!(res.suffix_array().len(), text.len());
 * ```
 *
 * # Alphabet Encoding
 *
 * Every symbol is mapped to an integer code before the construction starts. By default, the code is the
 * ordinal of the symbol plus one, because the code 0 is reserved for the implicit sentinel. The radix sort
 * passes of the algorithm allocate one counter per possible code, which is wasteful when the largest ordinal
 * of the text is much larger than the number of distinct symbols, e.g. for `char` texts.
 * [`SuffixArrayConstruction::with_dense_alphabet`] maps the distinct symbols of the text to `1..=sigma` in their
 * original order instead. The resulting suffix array is the same.
 *
 * When the ordinal encoding would lead to an alphabet bound larger than both [`MAX_ORDINAL_ALPHABET_BOUND`] and
 * the text length, the dense encoding is used automatically.
 *
 * # Return Type and LCP
 *
 * The read-only return type of [`SuffixArrayConstruction::run`] bundles the suffix array and a reference to the
 * input text. It is generic over whether an owned or borrowed suffix array buffer is used. The object can be
 * destructured into parts or used to compute the inverse suffix array and LCP array, see [`lcp`](super::lcp).
 *
 * [suffix array]: https://en.wikipedia.org/wiki/Suffix_array
 * [skew algorithm]: https://doi.org/10.1145/1217856.1217858
 */

use std::marker::PhantomData;

use log::debug;

use crate::{
    InputElement, OutputElement,
    construction::{alphabet, skew},
    lcp::LcpConstruction,
    owned_or_borrowed::OwnedOrBorrowed,
    typestate::{
        BorrowedBuffer, BufferMode, BufferModeOrUndecided, OutputElementOrUndecided, OwnedBuffer,
        Undecided,
    },
};

/// Above this alphabet bound (and the text length), the ordinal encoding is replaced by the dense encoding.
pub const MAX_ORDINAL_ALPHABET_BOUND: usize = 1 << 17;

/// One of the two main entry points of this library, for constructing suffix arrays.
///
/// See [`suffix_array`](self) for details.
#[derive(Debug)]
pub struct SuffixArrayConstruction<
    's,
    't,
    I: InputElement,
    O: OutputElementOrUndecided,
    B: BufferModeOrUndecided,
> {
    text: &'t [I],
    suffix_array_buffer: Option<&'s mut [O]>,
    dense_alphabet: bool,
    _buffer_mode_marker: PhantomData<B>,
}

impl<'t, I: InputElement> SuffixArrayConstruction<'static, 't, I, Undecided, Undecided> {
    /// The first method to call.
    ///
    /// The text has to be at most as long as the maximum value of the output element type you will choose.
    pub fn for_text(text: &'t [I]) -> Self {
        Self {
            text,
            suffix_array_buffer: None,
            dense_alphabet: false,
            _buffer_mode_marker: PhantomData,
        }
    }

    /// Provide a buffer in which the suffix array will be stored.
    ///
    /// The buffer has to be at least as large as the text (and at least of length 1, for the empty text).
    /// Only its beginning will be used.
    pub fn in_borrowed_buffer<'s, O: OutputElement>(
        self,
        suffix_array_buffer: &'s mut [O],
    ) -> SuffixArrayConstruction<'s, 't, I, O, BorrowedBuffer> {
        SuffixArrayConstruction {
            text: self.text,
            suffix_array_buffer: Some(suffix_array_buffer),
            dense_alphabet: self.dense_alphabet,
            _buffer_mode_marker: PhantomData,
        }
    }

    /// Inform the library of your desired output element type,
    /// if you want to obtain the suffix array in a [`Vec`].
    pub fn in_owned_buffer<O: OutputElement>(
        self,
    ) -> SuffixArrayConstruction<'static, 't, I, O, OwnedBuffer> {
        SuffixArrayConstruction {
            text: self.text,
            suffix_array_buffer: None,
            dense_alphabet: self.dense_alphabet,
            _buffer_mode_marker: PhantomData,
        }
    }

    /// Inform the library that you want to obtain the suffix array in a [`Vec<u32>`].
    pub fn in_owned_buffer32(self) -> SuffixArrayConstruction<'static, 't, I, u32, OwnedBuffer> {
        self.in_owned_buffer()
    }

    /// Inform the library that you want to obtain the suffix array in a [`Vec<u64>`].
    pub fn in_owned_buffer64(self) -> SuffixArrayConstruction<'static, 't, I, u64, OwnedBuffer> {
        self.in_owned_buffer()
    }
}

impl<'s, 't, I: InputElement, O: OutputElement, B: BufferMode>
    SuffixArrayConstruction<'s, 't, I, O, B>
{
    /// Map the distinct symbols of the text to a dense range of codes before the construction.
    ///
    /// See [`suffix_array`](self#alphabet-encoding) for details.
    pub fn with_dense_alphabet(self) -> Self {
        Self {
            dense_alphabet: true,
            ..self
        }
    }

    /// Construct the suffix array for the given text.
    ///
    /// # Panics
    ///
    /// If the text is too long for the output element type or the borrowed buffer is too short.
    ///
    /// # Returns
    ///
    /// A type that bundles the suffix array with a reference to the text.
    /// See [`suffix_array`](self#return-type-and-lcp) for details.
    pub fn run(mut self) -> SuffixArrayWithText<'s, 't, I, O, B> {
        // the empty text has the suffix array [0]
        let suffix_array_len = self.text.len().max(1);

        assert!(
            self.text.len() <= O::max_text_len(),
            "The text is too long for the chosen output type. Text len: {}, Max allowed len: {}",
            self.text.len(),
            O::MAX
        );

        if let Some(buffer) = self.suffix_array_buffer.as_ref() {
            assert!(
                buffer.len() >= suffix_array_len,
                "suffix_array_buffer must be at least as large as the text"
            );
        }

        let encoded = if self.dense_alphabet {
            alphabet::encode_dense(self.text)
        } else {
            let encoded = alphabet::encode_ordinal(self.text);

            if encoded.alphabet_bound > MAX_ORDINAL_ALPHABET_BOUND.max(self.text.len()) {
                debug!(
                    "alphabet bound {} of the ordinal encoding is too large, using dense encoding",
                    encoded.alphabet_bound
                );
                alphabet::encode_dense(self.text)
            } else {
                encoded
            }
        };

        debug!(
            "constructing suffix array for text of length {} with alphabet bound {}",
            self.text.len(),
            encoded.alphabet_bound
        );

        let raw_suffix_array = skew::suffix_array(&encoded.codes, encoded.alphabet_bound);

        let mut suffix_array =
            OwnedOrBorrowed::take_buffer_or_allocate(self.suffix_array_buffer.take(), || {
                vec![O::ZERO; suffix_array_len]
            });

        suffix_array.shorten_buffer_to(suffix_array_len);

        for (slot, &i) in suffix_array.as_mut_slice().iter_mut().zip(&raw_suffix_array) {
            *slot = O::from_usize(i);
        }

        SuffixArrayWithText {
            suffix_array,
            text: self.text,
        }
    }
}

/// The read-only return type of a suffix array construction.
///
/// See [`suffix_array`](self#return-type-and-lcp) for details.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SuffixArrayWithText<'s, 't, I: InputElement, O: OutputElement, B: BufferMode> {
    pub(crate) suffix_array: OwnedOrBorrowed<'s, O, B>,
    pub(crate) text: &'t [I],
}

impl<'s, 't, I: InputElement, O: OutputElement, B: BufferMode> SuffixArrayWithText<'s, 't, I, O, B> {
    pub fn suffix_array(&self) -> &[O] {
        self.suffix_array.as_slice()
    }

    pub fn text(&self) -> &'t [I] {
        self.text
    }

    pub fn into_parts(self) -> (B::Buffer<'s, O>, &'t [I]) {
        (self.suffix_array.into_inner(), self.text)
    }

    /// Obtain a builder for the inverse suffix array and the LCP array of this suffix array.
    pub fn lcp_construction(self) -> LcpConstruction<'s, 't, I, O, B> {
        LcpConstruction::new(self)
    }

    /// Bundle a suffix array with its text without running the construction.
    ///
    /// # Safety
    ///
    /// By calling this function you are claiming that the suffix array is correct for the text. Otherwise the
    /// LCP construction and queries are not guaranteed to behave correctly or might panic.
    ///
    /// # Panics
    ///
    /// If the suffix array does not have the same length as the text (or length 1, for the empty text).
    pub unsafe fn from_parts(suffix_array: B::Buffer<'s, O>, text: &'t [I]) -> Self {
        let suffix_array = OwnedOrBorrowed::new(suffix_array);

        assert_eq!(
            suffix_array.as_slice().len(),
            text.len().max(1),
            "suffix array and text must have the same length"
        );

        Self { suffix_array, text }
    }
}
