//! This module contains simple helpers for measuring how long a solver runs.
//! Measuring never influences the result of the measured operation.

use std::time::{Duration, Instant};

/// Measures the wall-clock time that passed since it was started.
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch {
    start: Instant
}

impl Stopwatch {

    /// Creates a new stopwatch which starts measuring immediately.
    pub fn start() -> Stopwatch {
        Stopwatch {
            start: Instant::now()
        }
    }

    /// Gets the time that passed since this stopwatch was started, without
    /// stopping it.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stops this stopwatch and returns the time that passed since it was
    /// started.
    pub fn stop(self) -> Duration {
        self.elapsed()
    }
}

/// Runs the given operation and returns its result together with the time it
/// took.
pub fn measure<T>(operation: impl FnOnce() -> T) -> (T, Duration) {
    let stopwatch = Stopwatch::start();
    let result = operation();
    (result, stopwatch.stop())
}

/// Formats a duration for console output, in nanoseconds as well as seconds.
pub fn format_duration(duration: Duration) -> String {
    format!("{} nanoseconds ( {} seconds )", duration.as_nanos(),
        duration.as_secs_f64())
}

#[cfg(test)]
mod tests {

    use super::*;

    use std::thread;

    #[test]
    fn measure_passes_result_through() {
        let (result, _) = measure(|| 6 * 7);
        assert_eq!(42, result);
    }

    #[test]
    fn measure_is_at_least_operation_time() {
        let (_, duration) =
            measure(|| thread::sleep(Duration::from_millis(5)));
        assert!(duration >= Duration::from_millis(5));
    }

    #[test]
    fn elapsed_is_monotone() {
        let stopwatch = Stopwatch::start();
        let first = stopwatch.elapsed();
        let second = stopwatch.elapsed();
        assert!(second >= first);
        assert!(stopwatch.stop() >= second);
    }

    #[test]
    fn formatting() {
        assert_eq!("1500000000 nanoseconds ( 1.5 seconds )",
            format_duration(Duration::from_millis(1500)));
    }
}
