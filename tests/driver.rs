//! Shape of the two benchmark reports, using tiny sizes and an in-memory sink.

use std::cell::{Cell, RefCell};

use algobench::{
    BenchConfig, BenchError, NaiveSearch, Result, Searcher, Sorter, bench_searchers,
    bench_sorters, generator::random_array, run_search_suite, run_sorting_suite,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn tiny(sizes: &[usize]) -> BenchConfig {
    BenchConfig {
        sizes: sizes.to_vec(),
        repetitions: 2,
        seed: 1,
    }
}

#[test]
fn sorting_report_lines() -> Result<()> {
    let mut out = Vec::new();
    run_sorting_suite(&tiny(&[10, 50]), &mut out)?;
    let report = String::from_utf8(out).expect("report is UTF-8");
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines.len(), 2 * 5);
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "Array size: 10");
    assert!(lines[2].starts_with("Bubble sort: "));
    assert!(lines[3].starts_with("Quick sort: "));
    assert!(lines[4].starts_with("Counting sort: "));
    assert_eq!(lines[6], "Array size: 50");

    for line in lines.iter().filter(|l| l.ends_with(" seconds")) {
        let secs = line.rsplit(": ").next().unwrap().trim_end_matches(" seconds");
        let (_, frac) = secs.split_once('.').expect("decimal point");
        assert_eq!(frac.len(), 6, "six decimals in {line:?}");
    }
    Ok(())
}

#[test]
fn search_report_lines() -> Result<()> {
    let mut out = Vec::new();
    run_search_suite(&tiny(&[100, 1_000]), &mut out)?;
    let report = String::from_utf8(out).expect("report is UTF-8");
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines.len(), 2 * 4);
    assert_eq!(lines[0], "Text length 100, pattern length 10");
    assert!(lines[1].starts_with("Naive       : "));
    assert!(lines[2].starts_with("Boyer-Moore : "));
    assert!(lines[3].starts_with("Rabin-Karp  : "));
    assert_eq!(lines[4], "Text length 1000, pattern length 10");

    for line in &lines[1..4] {
        assert!(line.ends_with(" ms"));
        let ms = line[14..].trim_end_matches(" ms");
        assert_eq!(ms.split_once('.').map(|(_, f)| f.len()), Some(3), "{line:?}");
    }
    Ok(())
}

#[test]
fn search_rejects_text_shorter_than_pattern() {
    let mut out = Vec::new();
    assert!(matches!(
        run_search_suite(&tiny(&[15]), &mut out),
        Err(BenchError::TextTooShort { size: 15, pattern_len: 10 })
    ));
}

#[test]
fn invalid_config_writes_nothing() {
    let mut out = Vec::new();
    let config = BenchConfig { repetitions: 0, ..tiny(&[10]) };
    assert!(matches!(
        run_sorting_suite(&config, &mut out),
        Err(BenchError::ZeroRepetitions)
    ));
    assert!(out.is_empty());
}

#[test]
fn same_seed_same_report_shape() -> Result<()> {
    // timings differ between runs; headers and names must not
    let strip = |r: &str| -> Vec<String> {
        r.lines().map(|l| l.split(':').next().unwrap_or("").to_owned()).collect()
    };
    let (mut a, mut b) = (Vec::new(), Vec::new());
    run_sorting_suite(&tiny(&[20]), &mut a)?;
    run_sorting_suite(&tiny(&[20]), &mut b)?;
    assert_eq!(
        strip(&String::from_utf8_lossy(&a)),
        strip(&String::from_utf8_lossy(&b))
    );
    Ok(())
}

/// Sorts with the standard library and remembers every input it was handed.
struct RecordingSort {
    seen: RefCell<Vec<Vec<i32>>>,
}

impl Sorter for RecordingSort {
    fn name(&self) -> &'static str {
        "Recording"
    }

    fn sort(&self, data: &mut [i32]) -> Result<()> {
        self.seen.borrow_mut().push(data.to_vec());
        data.sort_unstable();
        Ok(())
    }
}

/// Delegates to naive search, optionally shifting its answer, and counts calls.
struct CountingSearch {
    calls: Cell<usize>,
    offset: usize,
}

impl Searcher for CountingSearch {
    fn name(&self) -> &'static str {
        "Counting"
    }

    fn find(&self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        self.calls.set(self.calls.get() + 1);
        NaiveSearch.find(text, pattern).map(|i| i + self.offset)
    }
}

#[test]
fn every_sorter_sees_the_same_input() -> Result<()> {
    let input = random_array(&mut StdRng::seed_from_u64(3), 200, 10_000);
    let recorders: Vec<RecordingSort> = (0..3)
        .map(|_| RecordingSort { seen: RefCell::new(Vec::new()) })
        .collect();
    let sorters: Vec<&dyn Sorter> = recorders.iter().map(|r| r as &dyn Sorter).collect();

    let results = bench_sorters(&sorters, &input, 4)?;
    assert_eq!(results.len(), 3);

    for recorder in &recorders {
        let seen = recorder.seen.borrow();
        assert_eq!(seen.len(), 4);
        assert!(seen.iter().all(|v| *v == input));
    }
    Ok(())
}

#[test]
fn search_agreement_uses_only_timed_runs() -> Result<()> {
    let text = b"abcxabcdabxabcdabcdabcy";
    let pattern = b"abcdabcy";
    let searchers: Vec<CountingSearch> = (0..3)
        .map(|_| CountingSearch { calls: Cell::new(0), offset: 0 })
        .collect();
    let dyns: Vec<&dyn Searcher> = searchers.iter().map(|s| s as &dyn Searcher).collect();

    bench_searchers(&dyns, text, pattern, 5)?;
    for s in &searchers {
        assert_eq!(s.calls.get(), 5, "no search outside the timed runs");
    }
    Ok(())
}

#[test]
fn search_disagreement_is_reported() {
    let agree = CountingSearch { calls: Cell::new(0), offset: 0 };
    let off_by_one = CountingSearch { calls: Cell::new(0), offset: 1 };
    let searchers: [&dyn Searcher; 2] = [&agree, &off_by_one];
    assert!(matches!(
        bench_searchers(&searchers, b"xxneedle", b"needle", 2),
        Err(BenchError::Disagreement { size: 8 })
    ));
}
