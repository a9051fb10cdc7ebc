//! Probe-count estimation without real data.
//!
//! The halving loop here mirrors the tracer's window arithmetic but never
//! touches elements. It always continues in the right half, which under floor
//! midpoints is never smaller than the left half, so it counts the worst case.

/// Number of probes a worst-case search performs on a sequence of length `n`.
///
/// Equals the step count of [`crate::tracer::trace`] for a target greater than
/// every element.
#[must_use]
pub fn worst_case_probes(n: usize) -> u32 {
    let Some(right) = n.checked_sub(1) else {
        return 0;
    };
    let mut left = 0usize;
    let mut iterations = 0u32;
    loop {
        let mid = left + (right - left) / 2;
        iterations += 1;
        if mid == right {
            return iterations;
        }
        left = mid + 1;
    }
}

/// Closed-form upper bound on probes: `floor(log2 n) + 1`, or 0 for `n = 0`.
#[must_use]
pub fn probe_bound(n: usize) -> u32 {
    if n == 0 {
        0
    } else {
        n.ilog2() + 1
    }
}
