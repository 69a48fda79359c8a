use crate::{BenchError, MAX_COUNTING_RANGE, Result};

/// An in-place sorting algorithm under benchmark.
///
/// Implementations sort `data` into non-decreasing order without changing
/// the multiset of its elements.
pub trait Sorter {
    /// Human-readable name used in the benchmark report.
    fn name(&self) -> &'static str;

    /// Sorts `data` in place.
    ///
    /// Only [`CountingSort`] can fail, when the value range is too wide to
    /// allocate a count array for.
    fn sort(&self, data: &mut [i32]) -> Result<()>;
}

/// Bubble sort: `n - 1` passes over a shrinking prefix, swapping adjacent
/// out-of-order pairs. Stable, in place, O(n²) comparisons.
///
/// Every pass runs to completion; there is no early exit on a swap-free pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct BubbleSort;

impl Sorter for BubbleSort {
    fn name(&self) -> &'static str {
        "Bubble sort"
    }

    fn sort(&self, data: &mut [i32]) -> Result<()> {
        let n = data.len();
        for i in 0..n.saturating_sub(1) {
            for j in 0..n - i - 1 {
                if data[j] > data[j + 1] {
                    data.swap(j, j + 1);
                }
            }
        }
        Ok(())
    }
}

/// Quicksort with Lomuto partitioning around the last element.
///
/// Recurses into the smaller side of each partition and loops over the
/// larger one, so stack depth stays O(log n) even though already-sorted
/// input still costs O(n²) time.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuickSort;

impl Sorter for QuickSort {
    fn name(&self) -> &'static str {
        "Quick sort"
    }

    fn sort(&self, data: &mut [i32]) -> Result<()> {
        quick_sort(data);
        Ok(())
    }
}

fn quick_sort(mut data: &mut [i32]) {
    while data.len() > 1 {
        let p = partition(data);
        let (left, rest) = std::mem::take(&mut data).split_at_mut(p);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            quick_sort(left);
            data = right;
        } else {
            quick_sort(right);
            data = left;
        }
    }
}

/// Lomuto partition of `data` around its last element.
///
/// Moves every element strictly less than the pivot in front of it and
/// returns the pivot's final index. Elements equal to the pivot end up on
/// its right.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn partition(data: &mut [i32]) -> usize {
    let high = data.len() - 1;
    let pivot = data[high];
    // `store` is one past the last element known to be < pivot
    let mut store = 0;
    for j in 0..high {
        if data[j] < pivot {
            data.swap(store, j);
            store += 1;
        }
    }
    data.swap(store, high);
    store
}

/// Counting sort over the observed `min..=max` range.
///
/// Builds cumulative counts, then places elements into an output buffer
/// walking the input from the end, which keeps equal keys in input order.
/// O(n + range) time and space.
#[derive(Debug, Default, Clone, Copy)]
pub struct CountingSort;

impl Sorter for CountingSort {
    fn name(&self) -> &'static str {
        "Counting sort"
    }

    /// # Errors
    ///
    /// * `BenchError::RangeTooLarge` – if `max - min + 1` exceeds [`MAX_COUNTING_RANGE`].
    fn sort(&self, data: &mut [i32]) -> Result<()> {
        let (Some(&min), Some(&max)) = (data.iter().min(), data.iter().max()) else {
            return Ok(());
        };

        // i64 so that i32::MIN..=i32::MAX cannot overflow
        let range = (i64::from(max) - i64::from(min) + 1) as u64;
        if range > MAX_COUNTING_RANGE {
            return Err(BenchError::RangeTooLarge { range });
        }

        let slot = |v: i32| (i64::from(v) - i64::from(min)) as usize;
        let mut count = vec![0usize; range as usize];
        for &v in data.iter() {
            count[slot(v)] += 1;
        }
        for i in 1..count.len() {
            count[i] += count[i - 1];
        }

        let mut output = vec![0i32; data.len()];
        for &v in data.iter().rev() {
            let c = &mut count[slot(v)];
            *c -= 1;
            output[*c] = v;
        }
        data.copy_from_slice(&output);
        Ok(())
    }
}
