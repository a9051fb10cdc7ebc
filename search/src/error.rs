//! Typed trace errors.
//!
//! `TraceError` represents pre-flight failures only. A returned
//! [`crate::tracer::TraceResult`] is always complete; no partial trace is
//! ever handed back alongside an error.

use bisect_kernel::order::OrderViolation;

/// Typed failure for trace validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    /// `sequence[index] > sequence[index + 1]`.
    #[error("sequence is not sorted: element {index} is greater than element {}", .index + 1)]
    NotSorted { index: usize },
    /// `sequence[index]` and `sequence[index + 1]` cannot be ordered.
    #[error("elements {index} and {} cannot be ordered", .index + 1)]
    IncomparableElements { index: usize },
    /// The target cannot be ordered against `sequence[index]`.
    #[error("target cannot be compared with element {index}")]
    IncomparableTarget { index: usize },
}

impl From<OrderViolation> for TraceError {
    fn from(v: OrderViolation) -> Self {
        match v {
            OrderViolation::Descending { index } => Self::NotSorted { index },
            OrderViolation::Incomparable { index } => Self::IncomparableElements { index },
        }
    }
}
