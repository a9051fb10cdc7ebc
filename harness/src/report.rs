//! Trace report: a self-describing canonical JSON artifact for one run.
//!
//! # Layout (`trace_report.v1`)
//!
//! ```text
//! {
//!   "policy":         run policy snapshot (object)
//!   "schema_version": "trace_report.v1"
//!   "sequence":       input list
//!   "target":         input target
//!   "trace":          canonical trace (outcome, steps, found_index, total_steps)
//!   "trace_digest":   "sha256:..." over the canonical trace bytes
//! }
//! ```
//!
//! Reading is fail-closed: non-canonical bytes or a trace digest that does
//! not match the embedded trace are errors.

use std::path::Path;

use bisect_kernel::proof::canon::{canonical_json_bytes, CanonError};
use bisect_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use bisect_search::record::RecordError;
use bisect_search::tracer::TraceResult;

use crate::policy::RunPolicySnapshotV1;

pub const REPORT_SCHEMA_VERSION: &str = "trace_report.v1";

/// In-memory report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceReportV1 {
    /// Canonical JSON bytes of the report.
    pub bytes: Vec<u8>,
    /// Digest of the embedded trace (`HashDomain::ProbeTrace`).
    pub trace_digest: ContentHash,
    /// Digest of the whole report (`HashDomain::TraceReport`).
    pub digest: ContentHash,
}

/// Error building a report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportBuildError {
    #[error("trace could not be rendered: {0}")]
    Record(#[from] RecordError),
    #[error("policy snapshot is not valid JSON: {detail}")]
    PolicySnapshot { detail: String },
    #[error(transparent)]
    Canon(#[from] CanonError),
}

/// Error reading or verifying a report file.
#[derive(Debug, thiserror::Error)]
pub enum ReportReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("report is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("report bytes are not in canonical form")]
    NonCanonical,
    #[error("unsupported schema_version {found:?}")]
    SchemaVersion { found: String },
    #[error("report field {field:?} is missing or malformed")]
    MissingField { field: &'static str },
    #[error("trace digest mismatch: declared {declared}, computed {computed}")]
    TraceDigestMismatch { declared: String, computed: String },
    #[error(transparent)]
    Canon(#[from] CanonError),
}

/// Build the report for one traced run.
///
/// # Errors
///
/// Returns [`ReportBuildError`] if the trace, policy, or report cannot be
/// canonicalized.
pub fn build_report(
    sequence: &[i64],
    target: i64,
    result: &TraceResult<i64>,
    policy: &RunPolicySnapshotV1,
) -> Result<TraceReportV1, ReportBuildError> {
    let trace_value = result.to_json_value()?;
    let trace_digest = canonical_hash(HashDomain::ProbeTrace, &canonical_json_bytes(&trace_value)?);
    let policy_value: serde_json::Value = serde_json::from_slice(&policy.bytes)
        .map_err(|e| ReportBuildError::PolicySnapshot {
            detail: e.to_string(),
        })?;

    let report_value = serde_json::json!({
        "policy": policy_value,
        "schema_version": REPORT_SCHEMA_VERSION,
        "sequence": sequence,
        "target": target,
        "trace": trace_value,
        "trace_digest": trace_digest.as_str(),
    });
    let bytes = canonical_json_bytes(&report_value)?;
    let digest = canonical_hash(HashDomain::TraceReport, &bytes);

    Ok(TraceReportV1 {
        bytes,
        trace_digest,
        digest,
    })
}

/// Write the report's canonical bytes to `path`.
///
/// # Errors
///
/// Returns the underlying I/O error.
pub fn write_report(report: &TraceReportV1, path: &Path) -> std::io::Result<()> {
    std::fs::write(path, &report.bytes)
}

/// Read a report from `path` and verify it.
///
/// # Errors
///
/// Returns [`ReportReadError`] if the file cannot be read, is not canonical,
/// has an unknown schema version, or its trace digest does not match.
pub fn read_report(path: &Path) -> Result<TraceReportV1, ReportReadError> {
    let bytes = std::fs::read(path)?;
    verify_report_bytes(bytes)
}

/// Verify report bytes and recompute both digests.
///
/// # Errors
///
/// See [`read_report`].
pub fn verify_report_bytes(bytes: Vec<u8>) -> Result<TraceReportV1, ReportReadError> {
    let value: serde_json::Value = serde_json::from_slice(&bytes)?;
    if canonical_json_bytes(&value)? != bytes {
        return Err(ReportReadError::NonCanonical);
    }

    let version = value["schema_version"]
        .as_str()
        .ok_or(ReportReadError::MissingField {
            field: "schema_version",
        })?;
    if version != REPORT_SCHEMA_VERSION {
        return Err(ReportReadError::SchemaVersion {
            found: version.to_string(),
        });
    }

    let trace = value
        .get("trace")
        .filter(|t| t.is_object())
        .ok_or(ReportReadError::MissingField { field: "trace" })?;
    let declared = value["trace_digest"]
        .as_str()
        .and_then(ContentHash::parse)
        .ok_or(ReportReadError::MissingField {
            field: "trace_digest",
        })?;
    let computed = canonical_hash(HashDomain::ProbeTrace, &canonical_json_bytes(trace)?);
    if computed != declared {
        return Err(ReportReadError::TraceDigestMismatch {
            declared: declared.as_str().to_string(),
            computed: computed.as_str().to_string(),
        });
    }

    let digest = canonical_hash(HashDomain::TraceReport, &bytes);
    Ok(TraceReportV1 {
        bytes,
        trace_digest: computed,
        digest,
    })
}
