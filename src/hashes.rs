use crate::{BenchError, MAX_MODULUS, Result};

/// Polynomial rolling hash of a fixed-width byte window.
///
/// The hash of `w[0..m]` is `(w[0]·d^(m-1) + … + w[m-1]) mod q`. Rolling the
/// window one byte to the right is O(1) via
/// `t' = (d·(t - out·h) + in) mod q` with `h = d^(m-1) mod q`.
///
/// All arithmetic is unsigned. The subtraction is done as `t + q - (out·h mod q)`
/// so intermediate values never go negative, and [`MAX_MODULUS`] bounds `q`
/// so `d·2q + 255` cannot overflow `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHash {
    base:    u64, // radix `d`
    modulus: u64, // prime `q`
    high:    u64, // `d^(m-1) mod q`, weight of the outgoing byte
    value:   u64, // hash of the current window
}

impl RollingHash {
    /// Hashes the initial `window` with radix `base` and modulus `modulus`.
    ///
    /// # Errors
    ///
    /// * `BenchError::InvalidModulus` – if `modulus` is outside `2..=MAX_MODULUS`.
    pub fn new(window: &[u8], base: u64, modulus: u64) -> Result<Self> {
        if !(2..=MAX_MODULUS).contains(&modulus) {
            return Err(BenchError::InvalidModulus(modulus));
        }
        Ok(Self::with_checked_modulus(window, base, modulus))
    }

    /// Same as [`RollingHash::new`] for a modulus already known to be in range.
    pub(crate) fn with_checked_modulus(window: &[u8], base: u64, modulus: u64) -> Self {
        debug_assert!((2..=MAX_MODULUS).contains(&modulus));
        let base = base % modulus;
        let mut high = 1;
        for _ in 1..window.len() {
            high = (high * base) % modulus;
        }

        Self {
            base,
            modulus,
            high,
            value: Self::fold(window, base, modulus),
        }
    }

    /// Hashes `bytes` from scratch; equal to `RollingHash::new(bytes, ..)?.value()`.
    pub fn hash_of(bytes: &[u8], base: u64, modulus: u64) -> Result<u64> {
        Self::new(bytes, base, modulus).map(|h| h.value)
    }

    fn fold(bytes: &[u8], base: u64, modulus: u64) -> u64 {
        bytes
            .iter()
            .fold(0, |acc, &b| (base * acc + u64::from(b)) % modulus)
    }

    /// Current window hash, always in `0..modulus`.
    #[inline(always)]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Slides the window one byte: drops `outgoing` (the first byte of the
    /// current window) and appends `incoming`.
    #[inline(always)]
    pub fn roll(&mut self, outgoing: u8, incoming: u8) {
        let q = self.modulus;
        let drop = (u64::from(outgoing) * self.high) % q;
        let without = self.value + q - drop; // in 1..2q
        self.value = (self.base * without + u64::from(incoming)) % q;
    }
}
