use std::cmp::Ordering;

/// Index of the first element that is smaller than its predecessor.
pub fn first_inversion(arr: &[f64]) -> Option<usize> {
    arr.windows(2)
        .position(|pair| pair[1].total_cmp(&pair[0]) == Ordering::Less)
        .map(|i| i + 1)
}

/// Reports whether `arr` is in non-decreasing order.
///
/// An absent array has nothing to verify and reports `false`; empty and
/// single-element arrays are sorted.
pub fn is_sorted(arr: Option<&[f64]>) -> bool {
    match arr {
        Some(arr) => first_inversion(arr).is_none(),
        None => false,
    }
}
