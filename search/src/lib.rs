//! Bisect Search: step-traced binary search over validated sequences.
//!
//! This crate provides the search layer. It depends only on `bisect_kernel`;
//! it does NOT depend on `bisect_harness`, and it embeds no display text.
//!
//! # Crate dependency graph
//!
//! ```text
//! bisect_kernel  ←  bisect_search  ←  bisect_harness  ←  bisect_cli
//! (order, proof)    (tracer, steps)    (narration, IO)    (binary)
//! ```
//!
//! # Key types
//!
//! - [`tracer::trace`] -- validate, then probe
//! - [`probe::ProbeStep`] -- immutable record of one probe
//! - [`tracer::TraceResult`] -- outcome plus the ordered steps
//! - [`estimate::worst_case_probes`] -- halving-iteration count for size `n`

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod estimate;
pub mod probe;
pub mod record;
pub mod tracer;
