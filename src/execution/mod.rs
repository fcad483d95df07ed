//! Parallel execution of the recipes that are worth running concurrently.
//!
//! Every recipe in [`crate::processing`] is sequential. This module owns a dedicated rayon pool
//! and provides:
//!
//! - [`ExecutionEngine::traverse_chars`]: the same text visited sequentially, in parallel without
//!   ordering, and in parallel with the result forced back into input order
//! - [`ExecutionEngine::find_any`]: a parallel search that may return any matching employee
//! - [`ExecutionEngine::sum_ages`]: the identity/accumulator/combiner age sum, in parallel
//! - real-time metrics and observer hooks for monitoring

mod observer;

use std::sync::{Arc, Mutex};
use std::time::Instant;

use rayon::ThreadPool;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::error::{RecipeError, RecipeResult};
use crate::types::Employee;

pub use observer::{
    ExecutionEvent, ExecutionMetrics, ExecutionMetricsSnapshot, ExecutionObserver,
    StdErrExecutionObserver,
};

/// Configuration for the [`ExecutionEngine`].
#[derive(Debug, Clone)]
pub struct ExecutionOptions {
    /// Number of worker threads used by the engine.
    ///
    /// If `None`, uses the platform's available parallelism.
    pub num_threads: Option<usize>,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        let n = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self {
            num_threads: Some(n),
        }
    }
}

/// The three traversals produced by [`ExecutionEngine::traverse_chars`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharTraversal {
    /// Characters in input order, visited on one thread.
    pub sequential: String,
    /// Characters in the order parallel workers happened to emit them. Any permutation of the
    /// input is a valid outcome.
    pub unordered: String,
    /// Characters visited in parallel, reassembled in input order. Always equal to the input.
    pub ordered: String,
}

/// A configurable execution engine for employee recipes.
pub struct ExecutionEngine {
    pool: ThreadPool,
    observer: Option<Arc<dyn ExecutionObserver>>,
    metrics: Arc<ExecutionMetrics>,
}

impl ExecutionEngine {
    /// Create a new engine with the given options.
    ///
    /// # Panics
    ///
    /// Panics if `num_threads == Some(0)`.
    pub fn new(opts: ExecutionOptions) -> Self {
        if let Some(n) = opts.num_threads {
            assert!(n > 0, "num_threads must be > 0 when set");
        }

        let n_threads = opts
            .num_threads
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1)
            })
            .max(1);

        let pool = ThreadPoolBuilder::new()
            .num_threads(n_threads)
            .build()
            .expect("failed to build rayon thread pool");

        Self {
            pool,
            observer: None,
            metrics: Arc::new(ExecutionMetrics::new()),
        }
    }

    /// Attach an observer for execution events (metrics/logging).
    pub fn with_observer(mut self, observer: Arc<dyn ExecutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Get a handle to real-time execution metrics.
    pub fn metrics(&self) -> Arc<ExecutionMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Number of worker threads in the engine's pool.
    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Visit every character of `text` three ways: sequentially, in parallel with no ordering,
    /// and in parallel with the output kept in input order.
    pub fn traverse_chars(&self, text: &str) -> CharTraversal {
        self.run("traverse_chars", || {
            let sequential: String = text.chars().map(|c| self.visit(|| c)).collect();

            let unordered = Mutex::new(String::with_capacity(text.len()));
            text.par_chars().for_each(|c| {
                self.visit(|| unordered.lock().expect("traversal mutex poisoned").push(c));
            });

            let ordered: String = text.par_chars().map(|c| self.visit(|| c)).collect();

            CharTraversal {
                sequential,
                unordered: unordered.into_inner().expect("traversal mutex poisoned"),
                ordered,
            }
        })
    }

    /// Some employee matching `predicate`, searched in parallel.
    ///
    /// Which match is returned is unspecified and can change between runs; it need not be the
    /// one [`crate::processing::search::find_first`] would return.
    pub fn find_any<'a, F>(
        &self,
        employees: &'a [Employee],
        predicate: F,
    ) -> RecipeResult<&'a Employee>
    where
        F: Fn(&Employee) -> bool + Send + Sync,
    {
        self.run("find_any", || {
            employees
                .par_iter()
                .find_any(|e| self.visit(|| predicate(e)))
        })
        .ok_or(RecipeError::not_found("find_any"))
    }

    /// Sum of ages with identity `0`: each worker folds its share, partial sums are combined.
    ///
    /// Accumulates in `u64` like [`crate::processing::reduce::sum_ages_seeded`].
    pub fn sum_ages(&self, employees: &[Employee]) -> u64 {
        self.run("sum_ages", || {
            employees
                .par_iter()
                .fold(|| 0u64, |acc, e| self.visit(|| acc + u64::from(e.age())))
                .reduce(|| 0, |a, b| a + b)
        })
    }

    fn run<R, F>(&self, operation: &'static str, op: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        self.pool.install(|| {
            let start = Instant::now();
            self.metrics.begin_run();
            self.emit(ExecutionEvent::RunStarted { operation });

            let out = op();

            self.metrics.end_run(start.elapsed());
            self.emit(ExecutionEvent::RunFinished {
                operation,
                elapsed: start.elapsed(),
                metrics: self.metrics.snapshot(),
            });
            out
        })
    }

    fn visit<T>(&self, f: impl FnOnce() -> T) -> T {
        let worker = rayon::current_thread_index();
        self.metrics.on_item_start(worker);
        self.emit(ExecutionEvent::ItemVisited { worker });
        let out = f();
        self.metrics.on_item_end();
        out
    }

    fn emit(&self, event: ExecutionEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}

impl Default for ExecutionEngine {
    fn default() -> Self {
        Self::new(ExecutionOptions::default())
    }
}
