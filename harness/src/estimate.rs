//! Wall-clock probe estimate for a list size.
//!
//! Timing is display-only. The iteration count comes from the search crate
//! and is what tests assert on.

use std::time::{Duration, Instant};

use bisect_search::estimate::worst_case_probes;

/// Result of a timed estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    pub size: usize,
    /// Worst-case probe count for `size`.
    pub iterations: u32,
    pub elapsed: Duration,
}

impl Estimate {
    /// Elapsed time in milliseconds, for display.
    #[must_use]
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Count worst-case probes for `size` and time the count.
#[must_use]
pub fn estimate(size: usize) -> Estimate {
    let start = Instant::now();
    let iterations = std::hint::black_box(worst_case_probes(std::hint::black_box(size)));
    let elapsed = start.elapsed();
    tracing::debug!(size, iterations, ?elapsed, "estimated probe count");
    Estimate {
        size,
        iterations,
        elapsed,
    }
}
