//! Sortedness validation and the validated `OrderedSequence` view.
//!
//! Binary search is only meaningful over a non-decreasing sequence. This
//! module is the single place that checks that invariant. Callers either get
//! an [`OrderedSequence`] back, which proves the check succeeded, or an
//! [`OrderViolation`] naming the first offending position.

use std::cmp::Ordering;
use std::ops::Deref;

/// First position at which a sequence fails the non-decreasing invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OrderViolation {
    /// `sequence[index] > sequence[index + 1]`.
    #[error("element {index} is greater than element {}", .index + 1)]
    Descending { index: usize },
    /// `sequence[index]` and `sequence[index + 1]` cannot be ordered (e.g. NaN).
    #[error("elements {index} and {} are not comparable", .index + 1)]
    Incomparable { index: usize },
}

impl OrderViolation {
    /// Index of the left element of the offending adjacent pair.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Descending { index } | Self::Incomparable { index } => *index,
        }
    }
}

/// Check that `values` is non-decreasing under `compare`.
///
/// Only adjacent pairs are compared; for a total (or partial, transitive)
/// order that is equivalent to checking all `i < j`. The scan stops at the
/// first violation so the reported index is deterministic.
///
/// # Errors
///
/// Returns [`OrderViolation::Descending`] for the first adjacent pair that is
/// strictly decreasing, or [`OrderViolation::Incomparable`] if `compare`
/// returns `None` for a pair.
pub fn check_non_decreasing_by<T, F>(values: &[T], mut compare: F) -> Result<(), OrderViolation>
where
    F: FnMut(&T, &T) -> Option<Ordering>,
{
    for (index, pair) in values.windows(2).enumerate() {
        match compare(&pair[0], &pair[1]) {
            Some(Ordering::Less | Ordering::Equal) => {}
            Some(Ordering::Greater) => return Err(OrderViolation::Descending { index }),
            None => return Err(OrderViolation::Incomparable { index }),
        }
    }
    Ok(())
}

/// Check that `values` is non-decreasing under `Ord`.
///
/// # Errors
///
/// Returns [`OrderViolation::Descending`] for the first decreasing pair.
pub fn check_non_decreasing<T: Ord>(values: &[T]) -> Result<(), OrderViolation> {
    check_non_decreasing_by(values, |a, b| Some(a.cmp(b)))
}

/// A borrowed slice that has been validated as non-decreasing.
///
/// Construct via [`OrderedSequence::new`]; there is no unchecked constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedSequence<'a, T> {
    values: &'a [T],
}

impl<'a, T: Ord> OrderedSequence<'a, T> {
    /// Validate `values` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns [`OrderViolation::Descending`] if `values` is not sorted.
    pub fn new(values: &'a [T]) -> Result<Self, OrderViolation> {
        check_non_decreasing(values)?;
        Ok(Self { values })
    }
}

impl<'a, T> OrderedSequence<'a, T> {
    /// The underlying slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        self.values
    }
}

impl<T> Deref for OrderedSequence<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.values
    }
}
