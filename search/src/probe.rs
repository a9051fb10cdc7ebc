//! Probe step records.

use std::fmt;

/// Inclusive index range `[left, right]` still under consideration.
///
/// A `Window` is never empty: an exhausted search is represented by the
/// absence of a window (`Option<Window>::None`), not by `left > right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    pub left: usize,
    pub right: usize,
}

impl Window {
    /// Floor midpoint `(left + right) / 2`, computed without overflow.
    #[must_use]
    pub fn midpoint(&self) -> usize {
        self.left + (self.right - self.left) / 2
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.left <= index && index <= self.right
    }

    /// `true` if every index of `self` is in `other` and `self != other`.
    #[must_use]
    pub fn is_strict_subset_of(&self, other: &Window) -> bool {
        other.left <= self.left && self.right <= other.right && self != other
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.left, self.right)
    }
}

/// The decision taken after comparing the midpoint value to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeOutcome {
    /// Midpoint value is greater than the target; continue in the left half.
    MoveLeft,
    /// Midpoint value is less than the target; continue in the right half.
    MoveRight,
    /// Midpoint value equals the target; the search terminates.
    Found,
}

impl ProbeOutcome {
    /// Stable snake-case tag used in canonical JSON.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MoveLeft => "move_left",
            Self::MoveRight => "move_right",
            Self::Found => "found",
        }
    }
}

/// One iteration of the search loop.
///
/// Created once per iteration and appended to the trace in probe order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeStep<T> {
    /// Window under consideration before this probe.
    pub window: Window,
    /// Probed index: `window.midpoint()`.
    pub mid_index: usize,
    /// Element at `mid_index`.
    pub mid_value: T,
    /// Decision taken after the comparison.
    pub outcome: ProbeOutcome,
}

impl<T> ProbeStep<T> {
    /// The window the next probe examines, or `None` if the search ends here.
    ///
    /// `Found` always ends the search. A move ends it when the chosen half is
    /// empty (the midpoint was the window's edge).
    #[must_use]
    pub fn next_window(&self) -> Option<Window> {
        let Window { left, right } = self.window;
        match self.outcome {
            ProbeOutcome::Found => None,
            ProbeOutcome::MoveLeft => (self.mid_index > left).then(|| Window {
                left,
                right: self.mid_index - 1,
            }),
            ProbeOutcome::MoveRight => (self.mid_index < right).then(|| Window {
                left: self.mid_index + 1,
                right,
            }),
        }
    }
}
