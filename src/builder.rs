use super::{
    driver::{Backend, Sorter},
    error::Result,
    fork::{RayonPool, ScopedThreads},
};
use std::{num::NonZeroUsize, sync::Arc};

#[derive(Debug, Default)]
pub struct Builder {
    pub max_branches: Option<NonZeroUsize>,
    pub cpus: Option<NonZeroUsize>,
    pub stack_size: Option<NonZeroUsize>,
}

impl Builder {
    pub const fn new() -> Self {
        Self {
            max_branches: None,
            cpus: None,
            stack_size: None,
        }
    }

    /// Upper bound on branches of one sort call running at once, the caller included.
    pub fn max_branches(mut self, max_branches: NonZeroUsize) -> Self {
        self.max_branches = Some(max_branches);
        self
    }

    /// Runs forked branches on a dedicated pool of `cpus` threads instead of
    /// spawning a thread per fork.
    pub fn cpus(mut self, cpus: NonZeroUsize) -> Self {
        self.cpus = Some(cpus);
        self
    }

    pub fn stack_size(mut self, stack_size: NonZeroUsize) -> Self {
        self.stack_size = Some(stack_size);
        self
    }

    pub fn build(self) -> Result<Sorter> {
        let max_branches = self.max_branches.map_or(1, NonZeroUsize::get);

        let backend = match self.cpus {
            None => Backend::Threads(ScopedThreads::with_stack_size(self.stack_size)),
            Some(cpus) => {
                let mut pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(cpus.get())
                    .thread_name(|index| format!("parsort-worker-{}", index));
                if let Some(stack_size) = self.stack_size {
                    pool = pool.stack_size(stack_size.get());
                }

                let pool = RayonPool::new(Arc::new(pool.build()?));
                log::debug!("built sort pool with {} threads", pool.num_threads());
                Backend::Rayon(pool)
            }
        };

        Ok(Sorter::with_backend(max_branches, backend))
    }
}
