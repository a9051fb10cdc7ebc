//! Run policy: auditable declaration of the limits a trace was produced under.
//!
//! The runner derives a [`RunPolicySnapshotV1`] deterministically from a
//! [`RunConfig`]. The snapshot is embedded in every report so a reader can
//! tell which limits were in force.

use bisect_kernel::proof::canon::{canonical_json_bytes, CanonError};

/// Default upper bound on sequence length.
pub const DEFAULT_MAX_ELEMENTS: usize = 1_000_000;

/// Policy configuration that can override defaults.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Maximum number of elements accepted. `None` uses [`DEFAULT_MAX_ELEMENTS`].
    pub max_elements: Option<usize>,
}

impl RunConfig {
    /// Effective element limit.
    #[must_use]
    pub fn max_elements(&self) -> usize {
        self.max_elements.unwrap_or(DEFAULT_MAX_ELEMENTS)
    }
}

/// Canonical JSON bytes of the effective policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPolicySnapshotV1 {
    pub bytes: Vec<u8>,
}

/// Error enforcing a policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyViolation {
    /// The sequence has more elements than the policy allows.
    #[error("sequence has {actual} elements, policy allows at most {max_elements}")]
    SequenceTooLong { max_elements: usize, actual: usize },
}

/// Build a [`RunPolicySnapshotV1`] from config.
///
/// # Errors
///
/// Returns [`CanonError`] if canonical JSON serialization fails.
pub fn build_policy(config: &RunConfig) -> Result<RunPolicySnapshotV1, CanonError> {
    let snapshot_value = serde_json::json!({
        "budgets": {
            "max_elements": config.max_elements(),
        },
        "determinism_contract": {
            "no_env_reads": true,
            "no_randomness": true,
            "no_wall_time": true,
        },
        "midpoint": "floor",
        "schema_version": "run_policy.v1",
    });
    Ok(RunPolicySnapshotV1 {
        bytes: canonical_json_bytes(&snapshot_value)?,
    })
}

/// Validate a sequence length against the policy BEFORE tracing.
///
/// # Errors
///
/// Returns [`PolicyViolation::SequenceTooLong`] if `len` exceeds the limit.
pub fn enforce_pre_execution(len: usize, config: &RunConfig) -> Result<(), PolicyViolation> {
    let max_elements = config.max_elements();
    if len > max_elements {
        return Err(PolicyViolation::SequenceTooLong {
            max_elements,
            actual: len,
        });
    }
    Ok(())
}
