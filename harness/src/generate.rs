//! Seeded generation of sorted sample sequences.
//!
//! The generator owns its RNG; nothing here reads a global or thread-local
//! random source, so the same `(config, seed)` always yields the same list.

use bisect_kernel::proof::canon::{canonical_json_bytes, CanonError};
use bisect_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Sample shape. The default matches the classic demo: ten distinct values
/// drawn from `1..=99`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleConfig {
    pub len: usize,
    pub low: i64,
    pub high: i64,
    /// Sample without replacement when `true`.
    pub distinct: bool,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            len: 10,
            low: 1,
            high: 99,
            distinct: true,
        }
    }
}

/// Error generating a sample.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// `low > high`.
    #[error("empty value range {low}..={high}")]
    EmptyRange { low: i64, high: i64 },
    /// More distinct values requested than the range holds.
    #[error("cannot draw {requested} distinct values from a range of {available}")]
    SampleTooLarge { requested: usize, available: u64 },
}

/// Generate a sorted sample from `config` using a `StdRng` seeded with `seed`.
///
/// # Errors
///
/// Returns [`GenerateError::EmptyRange`] if `low > high`, or
/// [`GenerateError::SampleTooLarge`] if a distinct sample cannot fit.
pub fn generate_sorted_sample(config: &SampleConfig, seed: u64) -> Result<Vec<i64>, GenerateError> {
    if config.low > config.high {
        return Err(GenerateError::EmptyRange {
            low: config.low,
            high: config.high,
        });
    }
    // Width of an inclusive i64 range minus one always fits in u64.
    let span = config.high.abs_diff(config.low);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut values: Vec<i64> = if config.distinct {
        let available = span.saturating_add(1);
        if u64::try_from(config.len).map_or(true, |len| len > available) {
            return Err(GenerateError::SampleTooLarge {
                requested: config.len,
                available,
            });
        }
        sample_distinct(&mut rng, config.low, span, config.len)
    } else {
        (0..config.len)
            .map(|_| rng.gen_range(config.low..=config.high))
            .collect()
    };
    values.sort_unstable();

    debug!(
        len = values.len(),
        seed,
        distinct = config.distinct,
        "generated sample"
    );
    Ok(values)
}

/// Content hash of a sample, so a generated list can be cited by digest.
///
/// # Errors
///
/// Propagates [`CanonError`] from canonicalization.
pub fn sample_digest(values: &[i64]) -> Result<ContentHash, CanonError> {
    let bytes = canonical_json_bytes(&serde_json::json!(values))?;
    Ok(canonical_hash(HashDomain::SampleSequence, &bytes))
}

/// Draw `len` distinct offsets from `0..=span` and shift them by `low`.
///
/// Floyd's algorithm: O(len) draws regardless of how large the range is.
fn sample_distinct(rng: &mut StdRng, low: i64, span: u64, len: usize) -> Vec<i64> {
    let mut chosen = std::collections::BTreeSet::new();
    let len_u64 = len as u64;
    let total = span.wrapping_add(1);
    // `total == 0` means the full u64 offset space.
    let start = if total == 0 {
        0u64.wrapping_sub(len_u64)
    } else {
        total - len_u64
    };
    for j in 0..len_u64 {
        let upper = start.wrapping_add(j);
        let pick = rng.gen_range(0..=upper);
        if !chosen.insert(pick) {
            chosen.insert(upper);
        }
    }
    chosen
        .into_iter()
        .map(|offset| low.wrapping_add_unsigned(offset))
        .collect()
}
