use std::sync::atomic::{AtomicUsize, Ordering};

/// A one-shot pool of fork permits shared by every branch of a single sort call.
///
/// Permits are taken with [`Budget::try_acquire`] and are never handed back:
/// once `capacity` branches have been forked anywhere in the recursion tree,
/// every later branch runs inline, even if earlier forks have already finished.
#[derive(Debug)]
pub struct Budget {
    capacity: usize,
    remaining: AtomicUsize,
}

impl Budget {
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            remaining: AtomicUsize::new(capacity),
        }
    }

    /// Budget of a call that is allowed `max_parallel_branches` branches running at once,
    /// the calling thread included.
    pub const fn for_branches(max_parallel_branches: usize) -> Self {
        Self::new(max_parallel_branches.saturating_sub(1))
    }

    /// Takes one permit if any is left. Never blocks.
    pub fn try_acquire(&self) -> bool {
        self.remaining
            .fetch_update(Ordering::AcqRel, Ordering::Relaxed, |remaining| {
                remaining.checked_sub(1)
            })
            .is_ok()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Acquire)
    }

    pub fn granted(&self) -> usize {
        self.capacity - self.remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::Budget;
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        thread,
    };

    #[test]
    fn empty_budget_never_grants() {
        let budget = Budget::new(0);
        assert!(!budget.try_acquire());
        assert!(!budget.try_acquire());
        assert_eq!(budget.granted(), 0);
    }

    #[test]
    fn permits_are_not_renewed() {
        let budget = Budget::new(2);
        assert!(budget.try_acquire());
        assert!(budget.try_acquire());
        assert!(!budget.try_acquire());
        assert_eq!(budget.remaining(), 0);
        assert_eq!(budget.granted(), 2);
    }

    #[test]
    fn branch_width_excludes_the_caller() {
        assert_eq!(Budget::for_branches(0).capacity(), 0);
        assert_eq!(Budget::for_branches(1).capacity(), 0);
        assert_eq!(Budget::for_branches(4).capacity(), 3);
    }

    #[test]
    fn concurrent_acquires_respect_capacity() {
        const CAPACITY: usize = 37;
        const THREADS: usize = 8;

        let budget = Budget::new(CAPACITY);
        let won = AtomicUsize::new(0);

        thread::scope(|s| {
            for _ in 0..THREADS {
                s.spawn(|| {
                    for _ in 0..100 {
                        if budget.try_acquire() {
                            won.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                });
            }
        });

        assert_eq!(won.load(Ordering::Relaxed), CAPACITY);
        assert_eq!(budget.granted(), CAPACITY);
    }
}
