/// Minimum of `values[lo..=hi]` by scanning the range.
pub(crate) fn scan_min<T: Ord + Copy>(values: &[T], lo: usize, hi: usize) -> T {
    values[lo..=hi]
        .iter()
        .copied()
        .min()
        .expect("range should not be empty")
}

/// Sparse table for constant time range minimum queries.
///
/// `levels[k][i]` is the minimum of `values[i..i + 2^k]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct SparseTable<T> {
    levels: Vec<Vec<T>>,
}

impl<T: Ord + Copy> SparseTable<T> {
    pub(crate) fn new(values: &[T]) -> Self {
        let mut levels = vec![values.to_vec()];
        let mut width = 1;

        while 2 * width <= values.len() {
            let previous = &levels[levels.len() - 1];
            let next = (0..=values.len() - 2 * width)
                .map(|i| previous[i].min(previous[i + width]))
                .collect();

            levels.push(next);
            width *= 2;
        }

        Self { levels }
    }

    /// Minimum of `values[lo..=hi]`.
    ///
    /// # Panics
    ///
    /// If `lo > hi` or `hi` is out of range of the values this table was built for.
    pub(crate) fn min(&self, lo: usize, hi: usize) -> T {
        assert!(lo <= hi, "range minimum query on an empty range");

        let level = (hi - lo + 1).ilog2() as usize;
        let row = &self.levels[level];

        row[lo].min(row[hi + 1 - (1 << level)])
    }

    pub(crate) fn num_levels(&self) -> usize {
        self.levels.len()
    }
}
