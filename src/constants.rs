#![allow(clippy::unreadable_literal)]

// Global constants shared by the generators, algorithms and drivers.

// `ALPHABET_SIZE` – Number of distinct byte values (0..255).
pub const ALPHABET_SIZE: usize = 256;

// `DEFAULT_REPETITIONS` – Timed runs averaged per (algorithm, size) pair.
pub const DEFAULT_REPETITIONS: usize = 10;

// `DEFAULT_SEED` – Seed of the input generator when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// Input sizes of the sorting benchmark.
pub const SORT_SIZES: [usize; 4] = [1_000, 5_000, 10_000, 20_000];

/// Text lengths of the substring-search benchmark.
pub const SEARCH_SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

/// Exclusive upper bound of generated array values (values are `0..MAX_VALUE`).
pub const MAX_VALUE: i32 = 10_000;

/// Length of the pattern cut from the middle of each generated text.
pub const PATTERN_LEN: usize = 10;

/// Radix of the Rabin-Karp polynomial hash.
pub const RK_BASE: u64 = ALPHABET_SIZE as u64;

/// Default prime modulus of the Rabin-Karp hash.
pub const RK_MODULUS: u64 = 101;

/// Largest accepted Rabin-Karp modulus. Keeps `base * 2q + 255` inside `u64`.
pub const MAX_MODULUS: u64 = 1 << 31;

/// Largest `max - min + 1` counting sort will allocate a count array for.
pub const MAX_COUNTING_RANGE: u64 = 1 << 24;
