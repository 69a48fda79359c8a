use crate::{
    ALPHABET_SIZE, RK_BASE, RK_MODULUS, Result,
    hashes::RollingHash,
};

/// A substring-search algorithm under benchmark.
///
/// `find` returns the lowest index `i` with `text[i..i + pattern.len()] == pattern`,
/// or `None` when the pattern does not occur.
///
/// Shared conventions:
/// - An empty pattern matches at `Some(0)`.
/// - A pattern longer than the text never matches.
pub trait Searcher {
    /// Human-readable name used in the benchmark report.
    fn name(&self) -> &'static str;

    /// Returns the first match position of `pattern` in `text`.
    fn find(&self, text: &[u8], pattern: &[u8]) -> Option<usize>;

    /// Returns every (possibly overlapping) match position in ascending order.
    ///
    /// The default implementation restarts [`Searcher::find`] one byte after
    /// each hit.
    fn find_all(&self, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        if pattern.is_empty() {
            return (0..=text.len()).collect();
        }
        let mut hits = Vec::new();
        let mut from = 0;
        while let Some(i) = self.find(&text[from..], pattern) {
            hits.push(from + i);
            from += i + 1;
        }
        hits
    }
}

/// Slides a pattern-width window across the text and compares byte by byte.
/// O(n·m) worst case.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveSearch;

impl Searcher for NaiveSearch {
    fn name(&self) -> &'static str {
        "Naive"
    }

    fn find(&self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        let (n, m) = (text.len(), pattern.len());
        if m > n {
            return None;
        }
        'window: for i in 0..=n - m {
            for j in 0..m {
                if text[i + j] != pattern[j] {
                    continue 'window;
                }
            }
            return Some(i);
        }
        None
    }
}

/// Boyer-Moore with the bad-character rule only.
///
/// Compares right to left. On a mismatch at pattern index `j` against text
/// byte `c`, the alignment advances by `max(1, j - last[c])`, where `last`
/// is the [`bad_char_table`]. There is no good-suffix rule, so the textbook
/// sublinear worst case does not apply.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoyerMoore;

/// Last index of every byte value in `pattern`, or `-1` if the byte is absent.
pub fn bad_char_table(pattern: &[u8]) -> [isize; ALPHABET_SIZE] {
    let mut last = [-1isize; ALPHABET_SIZE];
    for (i, &b) in pattern.iter().enumerate() {
        last[b as usize] = i as isize;
    }
    last
}

impl Searcher for BoyerMoore {
    fn name(&self) -> &'static str {
        "Boyer-Moore"
    }

    fn find(&self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        let (n, m) = (text.len(), pattern.len());
        if m > n {
            return None;
        }
        let last = bad_char_table(pattern);

        let mut shift = 0;
        while shift <= n - m {
            // `j` counts the pattern bytes not yet matched, scanning from the right
            let mut j = m;
            while j > 0 && pattern[j - 1] == text[shift + j - 1] {
                j -= 1;
            }
            if j == 0 {
                return Some(shift);
            }

            let mismatch = j - 1;
            let skip = mismatch as isize - last[text[shift + mismatch] as usize];
            shift += skip.max(1) as usize;
        }
        None
    }
}

/// Rabin-Karp: compares rolling window hashes first and verifies every hash
/// hit byte by byte, so collisions never produce false matches.
///
/// Radix is [`RK_BASE`] (256); the modulus defaults to [`RK_MODULUS`] (101).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RabinKarp {
    modulus: u64,
}

impl Default for RabinKarp {
    fn default() -> Self {
        Self { modulus: RK_MODULUS }
    }
}

impl RabinKarp {
    /// Creates a searcher hashing modulo `modulus` instead of the default 101.
    ///
    /// # Errors
    ///
    /// * `BenchError::InvalidModulus` – if `modulus` is outside `2..=MAX_MODULUS`.
    pub fn with_modulus(modulus: u64) -> Result<Self> {
        // validates the modulus
        RollingHash::new(b"", RK_BASE, modulus)?;
        Ok(Self { modulus })
    }

    /// The modulus window hashes are reduced by.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Lazily yields every match position of `pattern` in `text`, in one
    /// rolling pass over the text.
    pub fn matches<'a>(&self, text: &'a [u8], pattern: &'a [u8]) -> Matches<'a> {
        let m = pattern.len();
        let window = if m <= text.len() {
            Some(RollingHash::with_checked_modulus(&text[..m], RK_BASE, self.modulus))
        } else {
            None
        };
        let target = RollingHash::with_checked_modulus(pattern, RK_BASE, self.modulus).value();

        Matches {
            text,
            pattern,
            window,
            target,
            pos: 0,
        }
    }
}

impl Searcher for RabinKarp {
    fn name(&self) -> &'static str {
        "Rabin-Karp"
    }

    fn find(&self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        self.matches(text, pattern).next()
    }

    fn find_all(&self, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        self.matches(text, pattern).collect()
    }
}

/// Iterator over Rabin-Karp match positions, created by [`RabinKarp::matches`].
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    text:    &'a [u8],
    pattern: &'a [u8],
    window:  Option<RollingHash>, // hash of text[pos..pos + m]; None if m > n
    target:  u64,                 // hash of the pattern
    pos:     usize,               // start of the current window
}

impl Iterator for Matches<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let window = self.window.as_mut()?;
        let (n, m) = (self.text.len(), self.pattern.len());

        while self.pos + m <= n {
            let i = self.pos;
            let hit = window.value() == self.target && &self.text[i..i + m] == self.pattern;

            // the empty window has nothing to roll
            if m > 0 && i + m < n {
                window.roll(self.text[i], self.text[i + m]);
            }
            self.pos += 1;

            if hit {
                return Some(i);
            }
        }
        None
    }
}
