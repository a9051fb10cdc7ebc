//! Trace entry points and the probe loop.

use std::cmp::Ordering;
use std::convert::Infallible;

use bisect_kernel::order::{check_non_decreasing_by, OrderedSequence};

use crate::error::TraceError;
use crate::probe::{ProbeOutcome, ProbeStep, Window};

/// How a trace terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceOutcome {
    /// The probe at `index` matched the target.
    Found { index: usize },
    /// The window emptied without a match.
    NotFound,
}

/// Result of a trace execution: the outcome plus every probe, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceResult<T> {
    pub outcome: TraceOutcome,
    pub steps: Vec<ProbeStep<T>>,
}

impl<T> TraceResult<T> {
    /// The found index, or `None` (the not-found sentinel).
    #[must_use]
    pub fn found_index(&self) -> Option<usize> {
        match self.outcome {
            TraceOutcome::Found { index } => Some(index),
            TraceOutcome::NotFound => None,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, TraceOutcome::Found { .. })
    }

    /// The window left over after the last probe.
    ///
    /// `None` after a successful search, after an exhausted search, and for
    /// an empty sequence.
    #[must_use]
    pub fn final_window(&self) -> Option<Window> {
        self.steps.last().and_then(ProbeStep::next_window)
    }
}

/// Run a traced binary search for `target` over `sequence`.
///
/// The sequence is validated before any probing; see [`trace_ordered`] for the
/// loop itself.
///
/// # Errors
///
/// Returns [`TraceError::NotSorted`] if `sequence` is not non-decreasing.
/// No steps are produced in that case.
pub fn trace<T: Ord + Clone>(sequence: &[T], target: &T) -> Result<TraceResult<T>, TraceError> {
    let ordered = OrderedSequence::new(sequence)?;
    Ok(trace_ordered(ordered, target))
}

/// Run a traced binary search over an already validated sequence.
///
/// With duplicates, the reported index is the first floor-midpoint that lands
/// on an equal element, not necessarily the first or last occurrence.
#[must_use]
pub fn trace_ordered<T: Ord + Clone>(sequence: OrderedSequence<'_, T>, target: &T) -> TraceResult<T> {
    let probed = probe_loop(sequence.as_slice(), |_, mid_value| {
        Ok::<_, Infallible>(mid_value.cmp(target))
    });
    match probed {
        Ok(result) => result,
        Err(never) => match never {},
    }
}

/// Traced binary search for partially ordered elements (e.g. floats).
///
/// # Errors
///
/// - [`TraceError::NotSorted`] if the sequence is not non-decreasing.
/// - [`TraceError::IncomparableElements`] if two adjacent elements cannot be
///   ordered.
/// - [`TraceError::IncomparableTarget`] if the target cannot be ordered
///   against the sequence. A target that is not comparable with itself (NaN)
///   is rejected before probing.
pub fn trace_partial<T: PartialOrd + Clone>(
    sequence: &[T],
    target: &T,
) -> Result<TraceResult<T>, TraceError> {
    check_non_decreasing_by(sequence, |a: &T, b: &T| a.partial_cmp(b))?;
    if let Some(first) = sequence.first() {
        if target.partial_cmp(target).is_none() || first.partial_cmp(target).is_none() {
            return Err(TraceError::IncomparableTarget { index: 0 });
        }
    }
    probe_loop(sequence, |index, mid_value| {
        mid_value
            .partial_cmp(target)
            .ok_or(TraceError::IncomparableTarget { index })
    })
}

/// The iterative loop shared by every entry point.
///
/// `compare(mid_index, mid_value)` orders the midpoint value against the
/// target.
fn probe_loop<T, E, F>(values: &[T], mut compare: F) -> Result<TraceResult<T>, E>
where
    T: Clone,
    F: FnMut(usize, &T) -> Result<Ordering, E>,
{
    let mut steps = Vec::new();
    let mut window = values.len().checked_sub(1).map(|right| Window { left: 0, right });

    while let Some(current) = window {
        let mid_index = current.midpoint();
        let mid_value = &values[mid_index];
        let outcome = match compare(mid_index, mid_value)? {
            Ordering::Equal => ProbeOutcome::Found,
            Ordering::Less => ProbeOutcome::MoveRight,
            Ordering::Greater => ProbeOutcome::MoveLeft,
        };
        let step = ProbeStep {
            window: current,
            mid_index,
            mid_value: mid_value.clone(),
            outcome,
        };
        window = step.next_window();
        steps.push(step);

        if outcome == ProbeOutcome::Found {
            return Ok(TraceResult {
                outcome: TraceOutcome::Found { index: mid_index },
                steps,
            });
        }
    }

    Ok(TraceResult {
        outcome: TraceOutcome::NotFound,
        steps,
    })
}
