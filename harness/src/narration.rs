//! Narration: trace → ordered cues → display strings.
//!
//! Cues are derived from a finished trace; the tracer itself never produces
//! text. Every step yields a `Checking` cue followed by its decision, so a
//! presentation layer can pace the two halves separately.

use std::fmt::Display;

use bisect_search::probe::ProbeOutcome;
use bisect_search::tracer::TraceResult;

/// One narration event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cue<T> {
    Start,
    Checking { value: T },
    MoveLeft,
    MoveRight,
    Found { value: T },
    NotFound,
}

/// Derive the cue sequence for a trace.
#[must_use]
pub fn narrate<T: Clone>(result: &TraceResult<T>) -> Vec<Cue<T>> {
    let mut cues = Vec::with_capacity(2 * result.steps.len() + 2);
    cues.push(Cue::Start);
    for step in &result.steps {
        cues.push(Cue::Checking {
            value: step.mid_value.clone(),
        });
        cues.push(match step.outcome {
            ProbeOutcome::MoveLeft => Cue::MoveLeft,
            ProbeOutcome::MoveRight => Cue::MoveRight,
            ProbeOutcome::Found => Cue::Found {
                value: step.mid_value.clone(),
            },
        });
    }
    if !result.is_found() {
        cues.push(Cue::NotFound);
    }
    cues
}

/// Display string for a cue.
#[must_use]
pub fn cue_message<T: Display>(cue: &Cue<T>) -> String {
    match cue {
        Cue::Start => "Let's start the Binary Search!".to_string(),
        Cue::Checking { value } => format!("Checking the middle element: {value}"),
        Cue::MoveLeft => "Your number is smaller, searching left".to_string(),
        Cue::MoveRight => "Your number is larger, searching right".to_string(),
        Cue::Found { value } => format!("Great! Your number {value} is found!"),
        Cue::NotFound => "Oops! Number not in the list.".to_string(),
    }
}

/// Narrate a trace straight to display strings.
#[must_use]
pub fn narrate_messages<T: Clone + Display>(result: &TraceResult<T>) -> Vec<String> {
    narrate(result).iter().map(cue_message).collect()
}
