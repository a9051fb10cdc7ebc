//! Plain-text step and outcome lines.

use std::fmt::Display;

use bisect_search::probe::ProbeStep;
use bisect_search::tracer::{TraceOutcome, TraceResult};

/// Message shown when the input list fails the sortedness check.
pub const NOT_SORTED_MESSAGE: &str = "List must be sorted for Binary Search!";

/// Renders `Step N: Checking <mid> in [<window values>]`, with the midpoint
/// and the window values each wrapped in backticks.
///
/// `ordinal` is 1-based. `sequence` must be the slice the trace was run on.
#[must_use]
pub fn step_line<T: Display>(ordinal: usize, step: &ProbeStep<T>, sequence: &[T]) -> String {
    let window = &sequence[step.window.left..=step.window.right];
    let values = window
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Step {ordinal}: Checking `{}` in `[{values}]`",
        step.mid_value
    )
}

/// Final success or failure line.
#[must_use]
pub fn outcome_line<T, U: Display>(result: &TraceResult<T>, target: &U) -> String {
    match result.outcome {
        TraceOutcome::Found { index } => format!("Found at index {index}!"),
        TraceOutcome::NotFound => format!("Number {target} not found."),
    }
}

/// Every step line in probe order.
#[must_use]
pub fn step_lines<T: Display>(result: &TraceResult<T>, sequence: &[T]) -> Vec<String> {
    result
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| step_line(i + 1, step, sequence))
        .collect()
}
