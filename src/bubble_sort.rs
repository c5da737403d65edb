//! Instrumented Bubble Sort
//!
//! Scans adjacent pairs over `n - 1` passes. Every comparison is reported
//! with the pair highlighted, but only swaps pause the host, so an already
//! sorted input produces comparisons and no paced steps.
//!
//! Complexity: O(n²) comparisons, no progress marker.

use crate::step::{Highlights, Progress, Step, StepKind, StepSink};

/// Sort `data` in place, reporting each comparison and swap to `sink`.
pub fn sort<T, S>(data: &mut [T], sink: &mut S)
where
    T: Ord + Clone,
    S: StepSink<T>,
{
    let n = data.len();
    if n <= 1 {
        return;
    }

    let progress = Progress::None;
    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            let pair = Highlights::Pair(j, j + 1);
            sink.emit(Step::new(StepKind::Compare, data, pair, &progress, false));

            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                sink.emit(Step::new(StepKind::Swap, data, pair, &progress, true));
            }
        }
    }
}
