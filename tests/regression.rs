//! Fixed worked examples. If one of these changes, an algorithm's observable
//! behaviour changed.

use algobench::{
    BoyerMoore, BubbleSort, CountingSort, NaiveSearch, QuickSort, RabinKarp, Result, Searcher,
    Sorter,
};

const TEXT: &[u8] = b"abcxabcdabxabcdabcdabcy";
const PATTERN: &[u8] = b"abcdabcy";

#[test]
fn regression_search_first_match() {
    let searchers: [&dyn Searcher; 3] = [&NaiveSearch, &BoyerMoore, &RabinKarp::default()];
    for s in searchers {
        assert_eq!(s.find(TEXT, PATTERN), Some(15), "{}", s.name());
    }
}

#[test]
fn regression_sort_small_array() -> Result<()> {
    let sorters: [&dyn Sorter; 3] = [&BubbleSort, &QuickSort, &CountingSort];
    for s in sorters {
        let mut v = [5, 3, 8, 1, 9, 2];
        s.sort(&mut v)?;
        assert_eq!(v, [1, 2, 3, 5, 8, 9], "{}", s.name());
    }
    Ok(())
}

#[test]
fn regression_rabin_karp_repeated_pattern() {
    let rk = RabinKarp::default();
    assert_eq!(rk.find_all(b"aabaab", b"aab"), vec![0, 3]);
    assert_eq!(rk.find(b"aabaab", b"aab"), Some(0));
}

#[test]
fn regression_absent_pattern() {
    let searchers: [&dyn Searcher; 3] = [&NaiveSearch, &BoyerMoore, &RabinKarp::default()];
    for s in searchers {
        assert_eq!(s.find(TEXT, b"abcz"), None, "{}", s.name());
    }
}
