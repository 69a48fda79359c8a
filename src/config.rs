use clap::Parser;

use crate::{
    BenchError, DEFAULT_REPETITIONS, DEFAULT_SEED, Result, SEARCH_SIZES, SORT_SIZES,
};

/// Parameters of one benchmark run.
///
/// The two constructors reproduce the fixed size lists of the sorting and
/// search programs; [`Cli`] overrides individual fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Input sizes, benchmarked in order.
    pub sizes:       Vec<usize>,
    /// Timed runs averaged per (algorithm, size) pair.
    pub repetitions: usize,
    /// Seed of the input generator.
    pub seed:        u64,
}

impl BenchConfig {
    /// Defaults of the sorting benchmark: sizes 1000, 5000, 10000, 20000.
    pub fn sorting() -> Self {
        Self {
            sizes: SORT_SIZES.to_vec(),
            repetitions: DEFAULT_REPETITIONS,
            seed: DEFAULT_SEED,
        }
    }

    /// Defaults of the search benchmark: text lengths 10³ to 10⁶.
    pub fn search() -> Self {
        Self {
            sizes: SEARCH_SIZES.to_vec(),
            repetitions: DEFAULT_REPETITIONS,
            seed: DEFAULT_SEED,
        }
    }

    /// Checks that at least one size and one repetition are configured.
    ///
    /// # Errors
    ///
    /// * `BenchError::EmptySizes` – if `sizes` is empty.
    /// * `BenchError::ZeroRepetitions` – if `repetitions` is 0.
    pub fn validate(&self) -> Result<()> {
        validate_config!(self.sizes, self.repetitions);
        Ok(())
    }
}

/// Command line of both benchmark binaries. Every flag is optional; with no
/// flags the built-in defaults run unchanged.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Comma-separated input sizes, e.g. `--sizes 1000,5000`
    #[arg(long, value_delimiter = ',')]
    pub sizes: Option<Vec<usize>>,

    /// Timed runs per algorithm and size
    #[arg(long, short = 'n')]
    pub repetitions: Option<usize>,

    /// Seed of the input generator
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Applies the given flags on top of `defaults` and validates the result.
    pub fn into_config(self, defaults: BenchConfig) -> Result<BenchConfig> {
        let config = BenchConfig {
            sizes: self.sizes.unwrap_or(defaults.sizes),
            repetitions: self.repetitions.unwrap_or(defaults.repetitions),
            seed: self.seed.unwrap_or(defaults.seed),
        };
        config.validate()?;
        Ok(config)
    }
}
