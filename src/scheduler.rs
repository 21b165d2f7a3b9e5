use super::{budget::Budget, fork::Fork, partition::partition};
use std::mem;

/// Sorts `arr` in place, forking right branches through `fork` while `budget` has permits.
///
/// When a permit is granted the right branch runs concurrently and the left
/// branch runs on the calling thread. Permits are never returned, so once one
/// is refused every later partition of the call runs inline: the shorter half
/// is sorted by a nested call and the longer half becomes the next loop
/// iteration, which keeps the stack depth logarithmic on presorted input.
pub fn quick_sort<F: Fork>(mut arr: &mut [f64], budget: &Budget, fork: &F) {
    while arr.len() > 1 {
        let mid = partition(arr);
        let (low, high) = mem::take(&mut arr).split_at_mut(mid);
        let high = &mut high[1..];

        if budget.try_acquire() {
            log::trace!(
                "forking {} elements ({} permits left)",
                high.len(),
                budget.remaining()
            );
            fork.fork_join(
                move || quick_sort(low, budget, fork),
                move || quick_sort(high, budget, fork),
            );
            return;
        }

        if low.len() < high.len() {
            quick_sort(low, budget, fork);
            arr = high;
        } else {
            quick_sort(high, budget, fork);
            arr = low;
        }
    }
}
