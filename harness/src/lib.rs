//! Bisect Harness: presentation-side collaborators for the tracer.
//!
//! The harness turns a finished trace into things people read: step lines,
//! narration, a canonical report. It also owns the pieces that must stay out
//! of the core: text input parsing, seeded sample generation, and wall-clock
//! estimates.
//!
//! The harness does NOT implement search logic; it delegates to
//! `bisect_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod estimate;
pub mod generate;
pub mod input;
pub mod narration;
pub mod policy;
pub mod render;
pub mod report;
pub mod runner;
