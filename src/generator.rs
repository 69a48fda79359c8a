//! Seeded input generation for both benchmarks.
//!
//! Every generator takes the random source by `&mut` so a driver can derive
//! all of its inputs from one seeded [`rand::rngs::StdRng`], which keeps runs
//! reproducible and tests deterministic.

use rand::Rng;

use crate::{BenchError, Result};

/// Generates `size` integers drawn uniformly from `0..max_exclusive`.
///
/// A non-positive `max_exclusive` yields an array of zeros.
pub fn random_array<R: Rng + ?Sized>(rng: &mut R, size: usize, max_exclusive: i32) -> Vec<i32> {
    if max_exclusive <= 0 {
        return vec![0; size];
    }
    (0..size).map(|_| rng.random_range(0..max_exclusive)).collect()
}

/// Generates `size` bytes drawn uniformly from `b'a'..=b'z'`.
pub fn random_lowercase<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Vec<u8> {
    (0..size).map(|_| b'a' + rng.random_range(0..26u8)).collect()
}

/// Returns the `len`-byte slice of `text` starting at its midpoint (`text.len() / 2`).
///
/// The returned pattern is guaranteed to occur in `text`.
///
/// # Errors
///
/// * `BenchError::TextTooShort` – if the slice would run past the end of `text`.
pub fn midpoint_pattern(text: &[u8], len: usize) -> Result<&[u8]> {
    let start = text.len() / 2;
    start
        .checked_add(len)
        .and_then(|end| text.get(start..end))
        .ok_or(BenchError::TextTooShort {
            size: text.len(),
            pattern_len: len,
        })
}
