use std::collections::HashSet;
use std::fmt;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

/// Execution events emitted by the engine.
#[derive(Debug, Clone)]
pub enum ExecutionEvent {
    RunStarted {
        operation: &'static str,
    },
    /// One element was visited. `worker` is the rayon thread index, if any.
    ItemVisited {
        worker: Option<usize>,
    },
    RunFinished {
        operation: &'static str,
        elapsed: Duration,
        metrics: ExecutionMetricsSnapshot,
    },
}

/// Observer hook for execution events.
pub trait ExecutionObserver: Send + Sync {
    fn on_event(&self, event: &ExecutionEvent);
}

/// A simple stderr logger for execution events.
#[derive(Default)]
pub struct StdErrExecutionObserver;

impl ExecutionObserver for StdErrExecutionObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        match event {
            ExecutionEvent::RunStarted { operation } => eprintln!("[exec][start] {operation}"),
            ExecutionEvent::ItemVisited { worker } => eprintln!("[exec][item] worker={worker:?}"),
            ExecutionEvent::RunFinished {
                operation, metrics, ..
            } => eprintln!("[exec][done] {operation} {metrics}"),
        }
    }
}

/// Real-time metrics for an execution run.
///
/// The engine updates these counters during execution; callers can snapshot them at any time.
pub struct ExecutionMetrics {
    run_id: AtomicU64,
    elapsed_ns: AtomicU64,

    items_processed: AtomicU64,
    active_items: AtomicUsize,
    max_active_items: AtomicUsize,
    workers: Mutex<HashSet<usize>>,
}

impl ExecutionMetrics {
    pub fn new() -> Self {
        Self {
            run_id: AtomicU64::new(0),
            elapsed_ns: AtomicU64::new(0),
            items_processed: AtomicU64::new(0),
            active_items: AtomicUsize::new(0),
            max_active_items: AtomicUsize::new(0),
            workers: Mutex::new(HashSet::new()),
        }
    }

    pub fn begin_run(&self) {
        let _ = self.run_id.fetch_add(1, Ordering::SeqCst);

        self.elapsed_ns.store(0, Ordering::SeqCst);
        self.items_processed.store(0, Ordering::SeqCst);
        self.active_items.store(0, Ordering::SeqCst);
        self.max_active_items.store(0, Ordering::SeqCst);
        if let Ok(mut workers) = self.workers.lock() {
            workers.clear();
        }
    }

    pub fn end_run(&self, elapsed: Duration) {
        self.elapsed_ns
            .store(elapsed.as_nanos().min(u64::MAX as u128) as u64, Ordering::SeqCst);
    }

    /// `worker` is the rayon thread index of the visiting thread; `None` is not counted as a worker.
    pub fn on_item_start(&self, worker: Option<usize>) {
        let now = self.active_items.fetch_add(1, Ordering::SeqCst) + 1;
        update_max_usize(&self.max_active_items, now);
        if let (Some(idx), Ok(mut workers)) = (worker, self.workers.lock()) {
            workers.insert(idx);
        }
    }

    pub fn on_item_end(&self) {
        let _ = self.items_processed.fetch_add(1, Ordering::SeqCst);
        let _ = self.active_items.fetch_sub(1, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> ExecutionMetricsSnapshot {
        let elapsed_ns = self.elapsed_ns.load(Ordering::SeqCst);
        let elapsed = if elapsed_ns > 0 {
            Some(Duration::from_nanos(elapsed_ns))
        } else {
            None
        };

        ExecutionMetricsSnapshot {
            run_id: self.run_id.load(Ordering::SeqCst),
            elapsed,
            items_processed: self.items_processed.load(Ordering::SeqCst),
            max_active_items: self.max_active_items.load(Ordering::SeqCst),
            distinct_workers: self.workers.lock().map(|w| w.len()).unwrap_or(0),
        }
    }
}

impl Default for ExecutionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

fn update_max_usize(dst: &AtomicUsize, now: usize) {
    loop {
        let cur = dst.load(Ordering::SeqCst);
        if now <= cur {
            break;
        }
        if dst
            .compare_exchange(cur, now, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            break;
        }
    }
}

/// Immutable snapshot of [`ExecutionMetrics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionMetricsSnapshot {
    pub run_id: u64,
    pub elapsed: Option<Duration>,
    pub items_processed: u64,
    pub max_active_items: usize,
    /// Number of different pool threads that visited at least one item.
    pub distinct_workers: usize,
}

impl fmt::Display for ExecutionMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "run_id={}, items_processed={}, max_active_items={}, distinct_workers={}, elapsed={:?}",
            self.run_id,
            self.items_processed,
            self.max_active_items,
            self.distinct_workers,
            self.elapsed
        )
    }
}
