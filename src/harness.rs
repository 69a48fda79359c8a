//! Timing harness shared by both benchmarks.
//!
//! Each algorithm runs `repetitions` times on the same reference input and
//! the wall-clock mean is reported. No warm-up run is discarded and no
//! variance or outlier statistics are kept.

use std::fmt;
use std::time::{Duration, Instant};

use log::debug;

use crate::{Result, Searcher, Sorter, util::mean_duration};

/// Unit a [`BenchmarkResult`] is printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// `"{name}: {secs:.6} seconds"`, used by the sorting benchmark.
    Seconds,
    /// `"{name:<12}: {ms:.3} ms"`, used by the search benchmark.
    Millis,
}

/// Average duration of one algorithm over all timed runs at one input size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkResult {
    pub name:    &'static str,
    pub average: Duration,
    pub unit:    TimeUnit,
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            TimeUnit::Seconds => {
                write!(f, "{}: {:.6} seconds", self.name, self.average.as_secs_f64())
            }
            TimeUnit::Millis => {
                let ms = self.average.as_secs_f64() * 1_000.0;
                write!(f, "{:<12}: {:.3} ms", self.name, ms)
            }
        }
    }
}

/// Times `sorter` over `repetitions` fresh copies of `original`.
///
/// Copying happens outside the timed region, so only the sort itself is
/// measured. `original` is never modified.
///
/// # Errors
///
/// Propagates the first error returned by [`Sorter::sort`].
pub fn time_sort<S: Sorter + ?Sized>(
    sorter: &S,
    original: &[i32],
    repetitions: usize,
) -> Result<BenchmarkResult> {
    let mut total = Duration::ZERO;
    for run in 0..repetitions {
        let mut copy = original.to_vec();

        let start = Instant::now();
        sorter.sort(&mut copy)?;
        let elapsed = start.elapsed();

        debug_assert!(crate::is_sorted(&copy), "{} left unsorted output", sorter.name());
        debug!("{} run {}/{}: {:?}", sorter.name(), run + 1, repetitions, elapsed);
        total += elapsed;
    }

    Ok(BenchmarkResult {
        name: sorter.name(),
        average: mean_duration(total, repetitions),
        unit: TimeUnit::Seconds,
    })
}

/// Times `searcher` looking for `pattern` in `text`, `repetitions` times.
///
/// Search algorithms only read their input, so every run shares `text`.
/// Returns the timing together with the match position the runs reported,
/// so callers can check it without an extra untimed search.
pub fn time_search<S: Searcher + ?Sized>(
    searcher: &S,
    text: &[u8],
    pattern: &[u8],
    repetitions: usize,
) -> (BenchmarkResult, Option<usize>) {
    let mut total = Duration::ZERO;
    let mut found = None;
    for run in 0..repetitions {
        let start = Instant::now();
        found = std::hint::black_box(searcher.find(
            std::hint::black_box(text),
            std::hint::black_box(pattern),
        ));
        let elapsed = start.elapsed();

        debug!(
            "{} run {}/{}: {:?} (match {:?})",
            searcher.name(),
            run + 1,
            repetitions,
            elapsed,
            found
        );
        total += elapsed;
    }

    let result = BenchmarkResult {
        name: searcher.name(),
        average: mean_duration(total, repetitions),
        unit: TimeUnit::Millis,
    };
    (result, found)
}
