//! In-place parallel quicksort for `f64` slices whose fan-out is capped by a
//! non-renewable budget of fork permits shared by the whole recursion tree.

mod builder;
mod budget;
mod driver;
mod error;
mod fork;
mod partition;
mod scheduler;
mod signal;
mod verify;

pub mod harness;

pub use builder::Builder;
pub use budget::Budget;
pub use driver::{sort_parallel, sort_sequential, SortReport, Sorter};
pub use error::{Error, Result};
pub use fork::{Fork, RayonPool, ScopedThreads};
pub use partition::partition;
pub use scheduler::quick_sort;
pub use signal::{CompletionSignal, NotifyOnDrop};
pub use verify::{first_inversion, is_sorted};
