//! Parallel evaluation of independent work items
//!
//! A fixed number of workers, each on its own thread of a dedicated pool,
//! share one cursor into the item list. Each worker claims the next index
//! under a lock, folds the item into its own accumulator and keeps going
//! until the list is exhausted. Accumulators are handed back after every
//! worker has finished, so callers merge them without any shared mutable
//! state during the run.

use log::warn;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// Default number of workers
pub const DEFAULT_WORKERS: usize = 8;

/// Progress observer, called with (total, completed)
pub type ProgressFn<'a> = dyn Fn(usize, usize) + Send + Sync + 'a;

/// Runs per-item work across a bounded set of workers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    workers: usize,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS)
    }
}

impl Scheduler {
    /// Create a scheduler with `workers` workers (at least one)
    #[must_use]
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    #[must_use]
    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// Fold every item into per-worker accumulators
    ///
    /// `fold` receives the worker's accumulator, the item index and the item.
    /// Returns one accumulator per worker; workers that found no work left
    /// return a fresh `init()`.
    ///
    /// # Examples
    /// ```
    /// use wordle_partition::solver::Scheduler;
    ///
    /// let items: Vec<u64> = (1..=100).collect();
    /// let partials = Scheduler::new(4).run(&items, || 0u64, |sum, _, &x| *sum += x, None);
    ///
    /// assert_eq!(partials.len(), 4);
    /// assert_eq!(partials.iter().sum::<u64>(), 5050);
    /// ```
    pub fn run<T, A, I, F>(
        &self,
        items: &[T],
        init: I,
        fold: F,
        progress: Option<&ProgressFn<'_>>,
    ) -> Vec<A>
    where
        T: Sync,
        A: Send,
        I: Fn() -> A + Sync + Send,
        F: Fn(&mut A, usize, &T) + Sync + Send,
    {
        let total = items.len();
        let cursor = Mutex::new(0usize);
        let completed = AtomicUsize::new(0);

        let work = || {
            (0..self.workers)
                .into_par_iter()
                .map(|_| {
                    let mut acc = init();
                    while let Some(index) = claim(&cursor, total) {
                        fold(&mut acc, index, &items[index]);

                        let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        if let Some(report) = progress {
                            report(total, done);
                        }
                    }
                    acc
                })
                .collect::<Vec<A>>()
        };

        match ThreadPoolBuilder::new().num_threads(self.workers).build() {
            Ok(pool) => pool.install(work),
            Err(e) => {
                warn!("falling back to the global thread pool: {e}");
                work()
            }
        }
    }
}

/// Take the next unclaimed index, if any
fn claim(cursor: &Mutex<usize>, total: usize) -> Option<usize> {
    // a plain index cannot be left half-updated, so a poisoned lock is still usable
    let mut next = cursor.lock().unwrap_or_else(PoisonError::into_inner);
    if *next < total {
        let index = *next;
        *next += 1;
        Some(index)
    } else {
        None
    }
}
