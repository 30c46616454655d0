/// Stable counting sort of `offsets` by `key(offset)`.
///
/// All keys have to be in `[0, key_bound]`. Offsets with equal keys keep their relative order, which
/// makes it possible to sort by multiple keys by running one pass per key, least significant key first.
pub(crate) fn radix_pass<K>(offsets: &[usize], key: K, key_bound: usize) -> Vec<usize>
where
    K: Fn(usize) -> usize,
{
    let mut bucket_starts = vec![0usize; key_bound + 1];

    for &offset in offsets {
        bucket_starts[key(offset)] += 1;
    }

    let mut sum = 0;
    for bucket in bucket_starts.iter_mut() {
        let count = *bucket;
        *bucket = sum;
        sum += count;
    }

    let mut sorted = vec![0; offsets.len()];

    for &offset in offsets {
        let bucket = &mut bucket_starts[key(offset)];
        sorted[*bucket] = offset;
        *bucket += 1;
    }

    sorted
}
