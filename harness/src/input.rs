//! Text input parsing for sequences and targets.
//!
//! Sequences are comma-separated integers (`"5, 10, 15"`). Parsing does not
//! check sortedness; that is the tracer's precondition and is reported by it.

/// Failure parsing user-supplied text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// An item of the comma-separated list is not an integer.
    #[error("item {position} ({raw:?}) is not an integer")]
    InvalidElement { position: usize, raw: String },
    /// The target is not an integer, so it cannot be compared with the list.
    #[error("target {raw:?} is not an integer")]
    InvalidTarget { raw: String },
}

/// Parse a comma-separated list of integers.
///
/// Whitespace around items is ignored. Blank input yields an empty list,
/// which is a valid (if uninteresting) sequence.
///
/// # Errors
///
/// Returns [`InputError::InvalidElement`] for the first unparsable item,
/// including empty items such as the middle of `"1,,2"`.
pub fn parse_sequence(text: &str) -> Result<Vec<i64>, InputError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    text.split(',')
        .enumerate()
        .map(|(position, item)| {
            let item = item.trim();
            item.parse::<i64>().map_err(|_| InputError::InvalidElement {
                position,
                raw: item.to_string(),
            })
        })
        .collect()
}

/// Parse a single integer target.
///
/// # Errors
///
/// Returns [`InputError::InvalidTarget`] if `text` is not an integer.
pub fn parse_target(text: &str) -> Result<i64, InputError> {
    let trimmed = text.trim();
    trimmed.parse().map_err(|_| InputError::InvalidTarget {
        raw: trimmed.to_string(),
    })
}

/// Render a sequence back to the comma-separated input form.
#[must_use]
pub fn format_sequence(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
