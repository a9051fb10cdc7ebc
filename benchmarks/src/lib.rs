//! Shared helpers for bisect benchmark suites.

use bisect_harness::policy::{build_policy, RunConfig, RunPolicySnapshotV1};

/// Input sizes swept by every size-parameterized benchmark.
pub const SIZES: [usize; 4] = [10, 1_000, 100_000, 1_000_000];

/// Evenly spaced sorted sequence `0, 2, 4, ...` of length `len`.
///
/// Even values only, so any odd target is a guaranteed miss.
#[must_use]
pub fn even_sequence(len: usize) -> Vec<i64> {
    (0..len)
        .map(|i| i64::try_from(i).unwrap_or(i64::MAX / 2) * 2)
        .collect()
}

/// Target that forces the worst-case probe count: larger than every element.
#[must_use]
pub fn above_range_target(sequence: &[i64]) -> i64 {
    sequence.last().map_or(0, |last| last + 1)
}

/// Default run policy snapshot.
///
/// # Panics
///
/// Panics if the policy cannot be canonicalized. Benchmark setup failures
/// are fatal.
#[must_use]
pub fn default_policy() -> RunPolicySnapshotV1 {
    build_policy(&RunConfig::default()).expect("build_policy")
}
