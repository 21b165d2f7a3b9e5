use super::signal::CompletionSignal;
use std::{
    fmt,
    num::NonZeroUsize,
    sync::{Arc, Mutex, PoisonError},
    thread,
};

/// Runs a granted right branch concurrently with the left branch.
///
/// Implementations must not return before both closures have finished.
pub trait Fork: Sync {
    fn fork_join<I, F>(&self, inline: I, forked: F)
    where
        I: FnOnce() + Send,
        F: FnOnce() + Send;
}

/// Every forked branch gets its own scoped OS thread and reports back
/// through a [`CompletionSignal`].
#[derive(Copy, Clone, Debug, Default)]
pub struct ScopedThreads {
    stack_size: Option<NonZeroUsize>,
}

impl ScopedThreads {
    pub const fn new() -> Self {
        Self { stack_size: None }
    }

    pub const fn with_stack_size(stack_size: Option<NonZeroUsize>) -> Self {
        Self { stack_size }
    }
}

impl Fork for ScopedThreads {
    fn fork_join<I, F>(&self, inline: I, forked: F)
    where
        I: FnOnce() + Send,
        F: FnOnce() + Send,
    {
        let signal = CompletionSignal::new();
        let branch = Mutex::new(Some(forked));
        let take_branch = || branch.lock().unwrap_or_else(PoisonError::into_inner).take();

        thread::scope(|scope| {
            let mut builder = thread::Builder::new().name(String::from("parsort-branch"));
            if let Some(stack_size) = self.stack_size {
                builder = builder.stack_size(stack_size.get());
            }

            let spawned = builder.spawn_scoped(scope, || {
                let _done = signal.notify_on_drop();
                if let Some(forked) = take_branch() {
                    forked();
                }
            });

            match spawned {
                Ok(_) => {
                    inline();
                    signal.wait();
                }
                Err(err) => {
                    log::warn!("failed to spawn branch thread, sorting inline: {}", err);
                    if let Some(forked) = take_branch() {
                        forked();
                    }
                    inline();
                }
            }
        });
    }
}

/// Forked branches are offered to a dedicated rayon pool and joined with
/// [`rayon::ThreadPool::join`].
#[derive(Clone)]
pub struct RayonPool {
    pool: Arc<rayon::ThreadPool>,
}

impl RayonPool {
    pub fn new(pool: Arc<rayon::ThreadPool>) -> Self {
        Self { pool }
    }

    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub(crate) fn install<R: Send>(&self, f: impl FnOnce() -> R + Send) -> R {
        self.pool.install(f)
    }
}

impl fmt::Debug for RayonPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RayonPool")
            .field("num_threads", &self.num_threads())
            .finish()
    }
}

impl Fork for RayonPool {
    fn fork_join<I, F>(&self, inline: I, forked: F)
    where
        I: FnOnce() + Send,
        F: FnOnce() + Send,
    {
        self.pool.join(inline, forked);
    }
}
