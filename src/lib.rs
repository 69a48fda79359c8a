mod constants;
#[macro_use]
mod util;
pub mod config;
pub mod driver;
pub mod generator;
pub mod harness;
mod hashes;
pub mod search;
pub mod sorting;

pub use config::{BenchConfig, Cli};
pub use constants::*;
pub use driver::{bench_searchers, bench_sorters, run_search_suite, run_sorting_suite};
pub use harness::{BenchmarkResult, TimeUnit, time_search, time_sort};
pub use hashes::RollingHash;
pub use search::{BoyerMoore, NaiveSearch, RabinKarp, Searcher};
pub use sorting::{BubbleSort, CountingSort, QuickSort, Sorter};
pub use util::*;

/// Common `Result` type for all library operations, using `BenchError` for errors.
pub type Result<T, E = BenchError> = core::result::Result<T, E>;

/// Error variants for benchmark configuration, input generation and the
/// algorithms that guard their resource use.
#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    /// Thrown when a benchmark is configured without any input sizes.
    #[error("at least one input size is required")]
    EmptySizes,

    /// Thrown when the repetition count is zero; an average of no samples is undefined.
    #[error("repetition count must be ≥ 1")]
    ZeroRepetitions,

    /// Thrown by counting sort when `max - min + 1` would need a count array
    /// larger than [`MAX_COUNTING_RANGE`].
    #[error("value range {range} too large for counting sort (limit {limit})", limit = MAX_COUNTING_RANGE)]
    RangeTooLarge { range: u64 },

    /// Thrown when a Rabin-Karp modulus is outside `2..=MAX_MODULUS`.
    #[error("rolling hash modulus {0} out of range (must be ≥ 2 and ≤ {max})", max = MAX_MODULUS)]
    InvalidModulus(u64),

    /// Thrown when a generated text cannot hold a pattern taken from its midpoint.
    #[error("text of length {size} too short for a midpoint pattern of length {pattern_len}")]
    TextTooShort { size: usize, pattern_len: usize },

    /// Thrown when the search algorithms report different match positions
    /// for the same text and pattern.
    #[error("search algorithms disagree on the match position for text length {size}")]
    Disagreement { size: usize },

    /// Wraps failures writing the benchmark report.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
