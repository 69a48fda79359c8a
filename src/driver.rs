//! The two benchmark programs: generate one input per size, time every
//! algorithm against that same input, print a header and one line per
//! algorithm.
//!
//! Reports go to any [`io::Write`] so the binaries can target stdout and
//! tests an in-memory buffer. Diagnostics go through `log`.

use std::io;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{
    BenchConfig, BenchError, BenchmarkResult, BoyerMoore, BubbleSort, CountingSort, MAX_VALUE,
    NaiveSearch, PATTERN_LEN, QuickSort, RabinKarp, Result, Searcher, Sorter,
    generator::{midpoint_pattern, random_array, random_lowercase},
    harness::{time_search, time_sort},
};

/// Runs the sorting benchmark: bubble, quick and counting sort over random
/// arrays with values in `0..MAX_VALUE`.
///
/// Per size the output is a blank line, `Array size: {size}`, then one
/// result line per algorithm in seconds.
pub fn run_sorting_suite<W: io::Write>(config: &BenchConfig, out: &mut W) -> Result<()> {
    config.validate()?;
    info!(
        "sorting suite: sizes {:?}, {} repetitions, seed {}",
        config.sizes, config.repetitions, config.seed
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let sorters: [&dyn Sorter; 3] = [&BubbleSort, &QuickSort, &CountingSort];

    for &size in &config.sizes {
        let input = random_array(&mut rng, size, MAX_VALUE);
        info!("array size {size}");

        writeln!(out)?;
        writeln!(out, "Array size: {size}")?;
        for result in bench_sorters(&sorters, &input, config.repetitions)? {
            writeln!(out, "{result}")?;
        }
    }
    Ok(())
}

/// Times every sorter against the same `input`, in order.
///
/// Each sorter gets its own fresh copies, so all of them see identical data.
pub fn bench_sorters(
    sorters: &[&dyn Sorter],
    input: &[i32],
    repetitions: usize,
) -> Result<Vec<BenchmarkResult>> {
    sorters
        .iter()
        .map(|sorter| time_sort(*sorter, input, repetitions))
        .collect()
}

/// Runs the search benchmark: naive, Boyer-Moore and Rabin-Karp over random
/// lowercase texts, searching for the [`PATTERN_LEN`]-byte slice at each
/// text's midpoint.
///
/// Per size the output is `Text length {size}, pattern length {m}`, then one
/// result line per algorithm in milliseconds.
///
/// # Errors
///
/// * `BenchError::TextTooShort` – if a size cannot hold the midpoint pattern.
/// * `BenchError::Disagreement` – if the algorithms report different matches.
pub fn run_search_suite<W: io::Write>(config: &BenchConfig, out: &mut W) -> Result<()> {
    config.validate()?;
    info!(
        "search suite: sizes {:?}, {} repetitions, seed {}",
        config.sizes, config.repetitions, config.seed
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let rabin_karp = RabinKarp::default();
    let searchers: [&dyn Searcher; 3] = [&NaiveSearch, &BoyerMoore, &rabin_karp];

    for &size in &config.sizes {
        let text = random_lowercase(&mut rng, size);
        let pattern = midpoint_pattern(&text, PATTERN_LEN)?;
        info!("text length {size}, pattern {:?}", String::from_utf8_lossy(pattern));

        let results = bench_searchers(&searchers, &text, pattern, config.repetitions)?;
        writeln!(out, "Text length {size}, pattern length {}", pattern.len())?;
        for result in results {
            writeln!(out, "{result}")?;
        }
    }
    Ok(())
}

/// Times every searcher on the same `text` and `pattern`, in order.
///
/// Agreement is checked on the match positions the timed runs reported, so
/// no search runs outside the timed region.
///
/// # Errors
///
/// * `BenchError::Disagreement` – if two searchers report different matches.
pub fn bench_searchers(
    searchers: &[&dyn Searcher],
    text: &[u8],
    pattern: &[u8],
    repetitions: usize,
) -> Result<Vec<BenchmarkResult>> {
    let mut results = Vec::with_capacity(searchers.len());
    let mut expected = None;
    for searcher in searchers {
        let (result, found) = time_search(*searcher, text, pattern, repetitions);
        match expected {
            None => expected = Some(found),
            Some(first) if first != found => {
                return Err(BenchError::Disagreement { size: text.len() });
            }
            Some(_) => {}
        }
        results.push(result);
    }
    Ok(results)
}
