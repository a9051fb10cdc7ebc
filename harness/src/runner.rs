//! Harness runner: orchestrates the tracer and its presentation collaborators.
//!
//! The runner does not implement any search logic itself; it delegates to
//! `bisect_search::tracer`.
//!
//! # Pipeline
//!
//! ```text
//! parse input → build_policy() → enforce_pre_execution()
//!   → trace() → narrate() / step_lines() → build_report()
//! ```

use bisect_kernel::proof::canon::CanonError;
use bisect_search::error::TraceError;
use bisect_search::tracer::{trace, TraceResult};
use tracing::{debug, info, warn};

use crate::input::{parse_sequence, parse_target, InputError};
use crate::narration::narrate_messages;
use crate::policy::{build_policy, enforce_pre_execution, PolicyViolation, RunConfig};
use crate::render::{outcome_line, step_lines};
use crate::report::{build_report, ReportBuildError, TraceReportV1};

/// A fully specified trace request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRequest {
    pub sequence: Vec<i64>,
    pub target: i64,
}

impl TraceRequest {
    /// Build a request from the text forms used by the CLI.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if either field fails to parse.
    pub fn parse(sequence: &str, target: &str) -> Result<Self, InputError> {
        Ok(Self {
            sequence: parse_sequence(sequence)?,
            target: parse_target(target)?,
        })
    }
}

/// Everything a presentation layer needs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRun {
    pub request: TraceRequest,
    pub result: TraceResult<i64>,
    /// One line per probe step, in probe order.
    pub step_lines: Vec<String>,
    /// Narration messages, in cue order.
    pub narration: Vec<String>,
    /// Final success or failure line.
    pub outcome_line: String,
    pub report: TraceReportV1,
}

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
    #[error("policy violation: {0}")]
    Policy(#[from] PolicyViolation),
    #[error(transparent)]
    Trace(#[from] TraceError),
    #[error("policy snapshot failed: {0}")]
    PolicyBuild(#[from] CanonError),
    #[error("report build failed: {0}")]
    Report(#[from] ReportBuildError),
}

/// Run one traced search.
///
/// # Errors
///
/// Returns [`RunError`] if the policy rejects the request, the tracer rejects
/// the sequence, or the report cannot be built. No partial run is returned.
pub fn run_trace(request: &TraceRequest, config: &RunConfig) -> Result<TraceRun, RunError> {
    let len = request.sequence.len();
    debug!(len, target = request.target, "trace requested");

    let policy = build_policy(config)?;
    if let Err(violation) = enforce_pre_execution(len, config) {
        warn!(%violation, "request rejected by run policy");
        return Err(violation.into());
    }

    let result = match trace(&request.sequence, &request.target) {
        Ok(result) => result,
        Err(err) => {
            warn!(%err, "trace rejected");
            return Err(err.into());
        }
    };
    debug!(steps = result.steps.len(), "trace complete");

    let report = build_report(&request.sequence, request.target, &result, &policy)?;
    info!(
        found_index = ?result.found_index(),
        steps = result.steps.len(),
        trace_digest = %report.trace_digest,
        "run finished"
    );

    Ok(TraceRun {
        request: request.clone(),
        step_lines: step_lines(&result, &request.sequence),
        narration: narrate_messages(&result),
        outcome_line: outcome_line(&result, &request.target),
        result,
        report,
    })
}

/// Parse text input and run it.
///
/// # Errors
///
/// Returns [`RunError::Input`] for unparsable text, otherwise as
/// [`run_trace`].
pub fn run_trace_text(
    sequence: &str,
    target: &str,
    config: &RunConfig,
) -> Result<TraceRun, RunError> {
    let request = TraceRequest::parse(sequence, target).inspect_err(|err| {
        warn!(%err, "input rejected");
    })?;
    run_trace(&request, config)
}
