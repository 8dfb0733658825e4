// LineSift - util/timing.rs
//
// Wall-clock instrumentation for a call or a lexical scope.
// Uses a monotonic clock; the timing line is logged on every exit path.

use std::time::{Duration, Instant};

/// Logs the elapsed time of its scope when dropped.
#[derive(Debug)]
pub struct ScopedTimer {
    label: &'static str,
    start: Instant,
}

impl ScopedTimer {
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    /// Time elapsed since the timer was started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        tracing::info!(
            label = self.label,
            elapsed_ms = elapsed.as_millis() as u64,
            "'{}' took {:.4} s",
            self.label,
            elapsed.as_secs_f64()
        );
    }
}

/// Run `f`, logging one timing line for it, and return its value with the
/// elapsed duration.
pub fn timed<T>(label: &'static str, f: impl FnOnce() -> T) -> (T, Duration) {
    let timer = ScopedTimer::start(label);
    let value = f();
    let elapsed = timer.elapsed();
    drop(timer);
    (value, elapsed)
}
