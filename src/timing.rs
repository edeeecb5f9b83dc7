//! Scoped wall-clock timing for the benchmark runner.

use std::time::{Duration, Instant};

/// Prints `<label> = <seconds>(s)` when dropped.
///
/// The start timestamp is captured on construction and the report happens in
/// `Drop`, so the elapsed time is recorded even if the timed block panics.
///
/// # Example
///
/// ```
/// use numbench::timing::ScopedTimer;
///
/// {
///     let _timer = ScopedTimer::new("noop");
///     // timed work here
/// } // prints "noop = 0.000(s)"
/// ```
pub struct ScopedTimer {
    label: String,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
        }
    }

    /// Elapsed time since construction.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        println!(
            "{} = {:.3}(s)",
            self.label,
            self.start.elapsed().as_secs_f64()
        );
    }
}

/// Run `f` inside a [`ScopedTimer`] scope, returning its result and the
/// elapsed seconds.
///
/// The timing line prints when the scope closes; the returned seconds let
/// the caller build speedup summaries without a second clock read.
pub fn report<R>(label: &str, f: impl FnOnce() -> R) -> (R, f64) {
    let timer = ScopedTimer::new(label);
    let out = f();
    let secs = timer.elapsed().as_secs_f64();
    (out, secs)
}
