use std::cmp::Ordering;

#[inline]
fn le(a: f64, b: f64) -> bool {
    a.total_cmp(&b) != Ordering::Greater
}

#[inline]
fn gt(a: f64, b: f64) -> bool {
    a.total_cmp(&b) == Ordering::Greater
}

/// Partitions `arr` around its first element and returns the pivot's final index.
///
/// The cursors stop at the slice bounds (`i < high`, `j > low`) rather than only
/// at their crossing point. Everything past the returned index compares greater
/// than the pivot, and every sub-slice handed back to the caller is strictly
/// shorter than `arr`.
///
/// Requires `arr.len() >= 2`.
pub fn partition(arr: &mut [f64]) -> usize {
    debug_assert!(arr.len() >= 2, "partition called on a base-case range");

    let low = 0;
    let high = arr.len() - 1;
    let pivot = arr[low];

    let mut i = low;
    let mut j = high;

    while i < j {
        while le(arr[i], pivot) && i < high {
            i += 1;
        }

        while gt(arr[j], pivot) && j > low {
            j -= 1;
        }

        if i < j {
            arr.swap(i, j);
        }
    }

    arr[low] = arr[j];
    arr[j] = pivot;
    j
}
