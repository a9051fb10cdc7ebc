//! Bisect Kernel: order validation and canonical proof primitives.
//!
//! # API Surface
//!
//! - [`order::OrderedSequence`] -- a slice proven non-decreasing
//! - [`order::check_non_decreasing_by`] -- the single sortedness check
//! - [`proof::canon::canonical_json_bytes`] -- canonical JSON for hashing
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256
//!
//! The kernel has no knowledge of probing or traces; `bisect_search` builds
//! on it.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod order;
pub mod proof;
