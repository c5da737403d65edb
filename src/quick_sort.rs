//! Instrumented Quick Sort
//!
//! Lomuto partitioning with the last element of each range as pivot. The
//! scan reports `(j, high)` for every comparison; swaps and the final pivot
//! placement pause the host. Once both halves of a range return, the whole
//! range is unioned into the accumulated "sorted" set.

use std::collections::BTreeSet;

use crate::step::{Highlights, Progress, Step, StepKind, StepSink};

/// Sort `data` in place, reporting comparisons, swaps and sorted ranges.
pub fn sort<T, S>(data: &mut [T], sink: &mut S)
where
    T: Ord + Clone,
    S: StepSink<T>,
{
    if data.len() <= 1 {
        return;
    }

    let mut sorted = BTreeSet::new();
    let high = data.len() - 1;
    sort_range(data, 0, high, &mut sorted, sink);
}

fn sort_range<T, S>(
    data: &mut [T],
    low: usize,
    high: usize,
    sorted: &mut BTreeSet<usize>,
    sink: &mut S,
) where
    T: Ord + Clone,
    S: StepSink<T>,
{
    if low < high {
        let pivot = partition(data, low, high, sorted, sink);
        if pivot > low {
            sort_range(data, low, pivot - 1, sorted, sink);
        }
        if pivot < high {
            sort_range(data, pivot + 1, high, sorted, sink);
        }
    }

    sorted.extend(low..=high);
    sink.emit(Step::new(
        StepKind::Mark,
        data,
        Highlights::None,
        &Progress::Sorted(sorted.clone()),
        false,
    ));
}

/// Partition `[low, high]` around `data[high]`, returning the pivot's final index.
fn partition<T, S>(
    data: &mut [T],
    low: usize,
    high: usize,
    sorted: &BTreeSet<usize>,
    sink: &mut S,
) -> usize
where
    T: Ord + Clone,
    S: StepSink<T>,
{
    let progress = Progress::Sorted(sorted.clone());
    let pivot = data[high].clone();
    // Next slot for an element smaller than the pivot
    let mut boundary = low;

    for j in low..high {
        sink.emit(Step::new(
            StepKind::Compare,
            data,
            Highlights::Pair(j, high),
            &progress,
            false,
        ));

        if data[j] < pivot {
            data.swap(boundary, j);
            sink.emit(Step::new(
                StepKind::Swap,
                data,
                Highlights::pair(boundary, j),
                &progress,
                true,
            ));
            boundary += 1;
        }
    }

    data.swap(boundary, high);
    sink.emit(Step::new(
        StepKind::Swap,
        data,
        Highlights::pair(boundary, high),
        &progress,
        true,
    ));
    boundary
}
