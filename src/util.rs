use std::time::Duration;

/// Returns `true` if `data` is in non-decreasing order.
///
/// Empty and single-element slices are sorted.
#[inline]
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Returns `true` if `a` and `b` hold the same multiset of elements.
///
/// Both slices are copied and sorted with the standard library sort, so the
/// check is independent of the algorithms under test.
pub fn is_permutation<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// Arithmetic mean of `runs` samples whose sum is `total`.
///
/// Returns `Duration::ZERO` for zero runs.
///
/// # Examples
/// - `mean_duration(Duration::from_secs(10), 10)` → 1s
/// - `mean_duration(Duration::from_millis(3), 2)` → 1.5ms
#[inline]
pub fn mean_duration(total: Duration, runs: usize) -> Duration {
    if runs == 0 {
        return Duration::ZERO;
    }
    Duration::from_secs_f64(total.as_secs_f64() / runs as f64)
}

/// Validates a benchmark configuration and returns early on error.
///
/// Intended for the start of functions that require:
/// - A non-empty list of input sizes (`$sizes`)
/// - A repetition count (`$reps`) of at least one
///
/// Returns the corresponding `BenchError` on any validation failure:
/// - `EmptySizes` if `sizes` is empty
/// - `ZeroRepetitions` if `reps` is 0
///
/// # Example
///
/// ```ignore
/// validate_config!(self.sizes, self.repetitions);
/// ```
macro_rules! validate_config {
    ($sizes:expr, $reps:expr) => {{
        if $sizes.is_empty() {
            return Err(BenchError::EmptySizes);
        }
        if $reps == 0 {
            return Err(BenchError::ZeroRepetitions);
        }
    }};
}
