use super::{
    budget::Budget,
    fork::{RayonPool, ScopedThreads},
    scheduler::quick_sort,
    verify::is_sorted,
};

/// Sorts `arr` in place on the calling thread.
pub fn sort_sequential(arr: &mut [f64]) -> bool {
    Sorter::new(1).sort(arr).sorted
}

/// Sorts `arr` in place, letting at most `max_parallel_branches - 1` branches
/// of the call ever be forked onto their own threads.
pub fn sort_parallel(arr: &mut [f64], max_parallel_branches: usize) -> bool {
    Sorter::new(max_parallel_branches).sort(arr).sorted
}

/// Outcome of one top-level sort call.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SortReport {
    pub len: usize,
    pub sorted: bool,
    pub capacity: usize,
    pub permits_granted: usize,
}

#[derive(Clone, Debug)]
pub(crate) enum Backend {
    Threads(ScopedThreads),
    Rayon(RayonPool),
}

/// A reusable sort configuration. Each call to [`Sorter::sort`] gets a fresh budget.
#[derive(Clone, Debug)]
pub struct Sorter {
    max_branches: usize,
    backend: Backend,
}

impl Sorter {
    pub fn new(max_branches: usize) -> Self {
        Self::with_backend(max_branches, Backend::Threads(ScopedThreads::new()))
    }

    pub(crate) fn with_backend(max_branches: usize, backend: Backend) -> Self {
        Self {
            max_branches,
            backend,
        }
    }

    pub fn max_branches(&self) -> usize {
        self.max_branches
    }

    pub fn uses_pool(&self) -> bool {
        matches!(self.backend, Backend::Rayon(_))
    }

    pub fn sort(&self, arr: &mut [f64]) -> SortReport {
        let budget = Budget::for_branches(self.max_branches);

        match &self.backend {
            Backend::Threads(fork) => quick_sort(arr, &budget, fork),
            Backend::Rayon(fork) => fork.install(|| quick_sort(arr, &budget, fork)),
        }

        let report = SortReport {
            len: arr.len(),
            sorted: is_sorted(Some(&*arr)),
            capacity: budget.capacity(),
            permits_granted: budget.granted(),
        };

        log::debug!(
            "sorted {} elements with {}/{} forks (verified: {})",
            report.len,
            report.permits_granted,
            report.capacity,
            report.sorted
        );

        report
    }
}
