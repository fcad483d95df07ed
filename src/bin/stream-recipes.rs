//! Run every recipe scenario against the sample roster and print the results.
//!
//! Usage:
//!   stream-recipes
//!
//! Set `STREAM_RECIPES_TRACE=1` to log execution-engine events to stderr.

use std::env;
use std::io;
use std::process;
use std::sync::Arc;

use employee_streams::execution::{ExecutionEngine, ExecutionOptions, StdErrExecutionObserver};
use employee_streams::scenarios;

fn main() {
    let mut engine = ExecutionEngine::new(ExecutionOptions::default());
    if env::var_os("STREAM_RECIPES_TRACE").is_some() {
        engine = engine.with_observer(Arc::new(StdErrExecutionObserver));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = scenarios::run_all(&engine, &mut out) {
        eprintln!("stream-recipes failed: {}", e);
        process::exit(1);
    }
}
