use thiserror::Error;

/// Errors reported by the queries of a [`SuffixArrayWithLcp`](crate::SuffixArrayWithLcp).
///
/// The construction itself never fails.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuffixArrayError {
    /// A text offset or rank was not in the range `[0, len)`.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub(crate) fn check_index(index: usize, len: usize) -> Result<usize, SuffixArrayError> {
    if index < len {
        Ok(index)
    } else {
        Err(SuffixArrayError::IndexOutOfRange { index, len })
    }
}
