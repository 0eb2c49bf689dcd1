//! Binary search over sorted slices.

/// Binary search in an ascending-sorted slice
///
/// Returns an index whose element equals `target`, or `None` if the slice
/// does not contain it. With duplicate elements any matching index may be
/// returned. The slice must be sorted from lowest to highest; the result
/// is unspecified otherwise.
pub fn binary_search<T: Ord>(slice: &[T], target: &T) -> Option<usize> {
    let mut low = 0usize;
    let mut high = slice.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match slice[mid].cmp(target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
        }
    }
    None
}
