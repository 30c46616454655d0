use skewsa::{RangeMinimum, SuffixArrayConstruction};

fn main() {
    let text = b"barnabasbabblesaboutbananas";

    // To answer longest common prefix queries, we need the suffix array, its inverse and the lcp array.
    // You can read more about these data structures and conventions of this library in the API documentation.

    // first, we create the suffix array
    let suffix_array = SuffixArrayConstruction::for_text(text)
        .in_owned_buffer32()
        .run();

    // then we add the inverse suffix array and the lcp array. The sparse table makes every query constant time.
    let suffix_array_with_lcp = suffix_array
        .lcp_construction()
        .with_range_minimum(RangeMinimum::SparseTable)
        .run();

    println!("Suffix array: {:?}", suffix_array_with_lcp.suffix_array());
    println!("Longest common prefix array: {:?}", suffix_array_with_lcp.lcp());

    // "bananas" and "barnabas..." start at offsets 20 and 0
    let lcp = suffix_array_with_lcp.longest_common_prefix(20, 0).unwrap();
    println!("The suffixes at offsets 20 and 0 share a prefix of length {lcp}");

    for rank in 0..3 {
        let suffix = suffix_array_with_lcp.suffix_text(rank).unwrap();
        println!("Rank {rank}: {}", String::from_utf8_lossy(suffix));
    }

    // we can destructure the returned object and drop the text reference
    let (suffix_array, inverse_suffix_array, lcp, _) = suffix_array_with_lcp.into_parts();

    println!("Inverse suffix array: {inverse_suffix_array:?}");
    assert_eq!(suffix_array.len(), lcp.len());
}
