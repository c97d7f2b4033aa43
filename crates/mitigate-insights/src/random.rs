//! Random selection behind an injectable source.
//!
//! The hospital query assigns a hospital uniformly at random per row. That is
//! a simulated assignment, so callers pass the source in and tests can pin it.

use crate::error::InsightError;

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Return an index in `0..len`. `len` is never zero.
    ///
    /// # Errors
    ///
    /// Returns `InsightError::Random` if the underlying source fails.
    fn next_index(&mut self, len: usize) -> Result<usize, InsightError>;
}

/// Operating-system randomness via `getrandom`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_index(&mut self, len: usize) -> Result<usize, InsightError> {
        let len = len as u64;
        // Reject the tail of the u64 range so every index is equally likely.
        let zone = u64::MAX - (u64::MAX % len);
        loop {
            let mut bytes = [0u8; 8];
            getrandom::fill(&mut bytes).map_err(|e| InsightError::Random(e.to_string()))?;
            let draw = u64::from_le_bytes(bytes);
            if draw < zone {
                return usize::try_from(draw % len)
                    .map_err(|e| InsightError::Random(e.to_string()));
            }
        }
    }
}

/// Pick one element uniformly at random. `None` for an empty slice.
///
/// # Errors
///
/// Returns `InsightError::Random` if the source fails.
pub fn choose<'a, T, R: RandomSource + ?Sized>(
    source: &mut R,
    items: &'a [T],
) -> Result<Option<&'a T>, InsightError> {
    if items.is_empty() {
        return Ok(None);
    }
    let index = source.next_index(items.len())?;
    Ok(items.get(index))
}
