use std::{
    sync::atomic::{AtomicU8, Ordering},
    thread::{self, Thread},
};

const EMPTY: u8 = 0;
const WAITING: u8 = 1;
const NOTIFIED: u8 = 2;

/// Single-use handshake between a forked branch and the thread that forked it.
///
/// The signal belongs to the thread that creates it: only that thread may
/// [`wait`](Self::wait), and exactly one other party may [`notify`](Self::notify).
pub struct CompletionSignal {
    waiter: Thread,
    state: AtomicU8,
}

impl Default for CompletionSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionSignal {
    pub fn new() -> Self {
        Self {
            waiter: thread::current(),
            state: AtomicU8::new(EMPTY),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_notified(&self) -> bool {
        self.state.load(Ordering::Acquire) == NOTIFIED
    }

    pub fn notify(&self) {
        match self.state.swap(NOTIFIED, Ordering::Release) {
            EMPTY => {}
            WAITING => self.waiter.unpark(),
            NOTIFIED => unreachable!("CompletionSignal notified multiple times"),
            _ => unreachable!("invalid CompletionSignal state"),
        }
    }

    /// Returns a guard which notifies the signal when dropped, unwinding included.
    pub fn notify_on_drop(&self) -> NotifyOnDrop<'_> {
        NotifyOnDrop { signal: self }
    }

    pub fn wait(&self) {
        debug_assert_eq!(
            thread::current().id(),
            self.waiter.id(),
            "CompletionSignal waited on by a thread that did not create it",
        );

        match self
            .state
            .compare_exchange(EMPTY, WAITING, Ordering::Acquire, Ordering::Acquire)
        {
            Ok(_) => {}
            Err(NOTIFIED) => return,
            Err(_) => unreachable!("multiple waiters on the same CompletionSignal"),
        }

        loop {
            thread::park();
            match self.state.load(Ordering::Acquire) {
                WAITING => continue,
                NOTIFIED => return,
                _ => unreachable!("CompletionSignal waiting while empty"),
            }
        }
    }
}

pub struct NotifyOnDrop<'a> {
    signal: &'a CompletionSignal,
}

impl Drop for NotifyOnDrop<'_> {
    fn drop(&mut self) {
        self.signal.notify();
    }
}
