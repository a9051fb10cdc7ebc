//! Canonical JSON rendering and content digest of a trace.
//!
//! The normative surface is the ordered `steps` array. Field names are
//! stable; consumers must not reorder steps.

use bisect_kernel::proof::canon::{canonical_json_bytes, CanonError};
use bisect_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use serde::Serialize;
use serde_json::{json, Value};

use crate::probe::{ProbeStep, Window};
use crate::tracer::{TraceOutcome, TraceResult};

/// Failure rendering a trace to canonical JSON.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// An element value could not be converted to a JSON value.
    #[error("element value is not representable as JSON: {detail}")]
    ValueNotRepresentable { detail: String },
    /// The JSON value contained a non-integer number.
    #[error(transparent)]
    Canon(#[from] CanonError),
}

impl<T: Serialize> TraceResult<T> {
    /// Convert to a `serde_json::Value`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::ValueNotRepresentable`] if an element cannot be
    /// serialized.
    pub fn to_json_value(&self) -> Result<Value, RecordError> {
        let steps = self
            .steps
            .iter()
            .map(step_to_json)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(json!({
            "found_index": self.found_index(),
            "outcome": outcome_to_json(self.outcome),
            "steps": steps,
            "total_steps": self.steps.len(),
        }))
    }

    /// Serialize to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] if an element is not representable or is a
    /// non-integer number.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, RecordError> {
        Ok(canonical_json_bytes(&self.to_json_value()?)?)
    }

    /// Content hash of the canonical bytes under [`HashDomain::ProbeTrace`].
    ///
    /// # Errors
    ///
    /// Same as [`TraceResult::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<ContentHash, RecordError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::ProbeTrace, &bytes))
    }
}

fn step_to_json<T: Serialize>(step: &ProbeStep<T>) -> Result<Value, RecordError> {
    let mid_value =
        serde_json::to_value(&step.mid_value).map_err(|e| RecordError::ValueNotRepresentable {
            detail: e.to_string(),
        })?;
    Ok(json!({
        "mid_index": step.mid_index,
        "mid_value": mid_value,
        "outcome": step.outcome.as_str(),
        "window": window_to_json(step.window),
    }))
}

fn window_to_json(w: Window) -> Value {
    json!({"left": w.left, "right": w.right})
}

fn outcome_to_json(o: TraceOutcome) -> Value {
    match o {
        TraceOutcome::Found { index } => json!({"index": index, "type": "found"}),
        TraceOutcome::NotFound => json!({"type": "not_found"}),
    }
}
