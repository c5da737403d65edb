//! Instrumented Merge Sort
//!
//! Top-down recursive merge sort over inclusive ranges `[left, right]`.
//! Each placement during a merge is reported with the source indices being
//! compared highlighted (or the single remaining source once a side is
//! exhausted). After every merge, the range joins the accumulated "merged"
//! set, which only grows for the rest of the run.
//!
//! Stable: equal elements take the left half first.

use std::collections::BTreeSet;

use crate::step::{Highlights, Progress, Step, StepKind, StepSink};

/// Sort `data` in place, reporting every placement and merge to `sink`.
pub fn sort<T, S>(data: &mut [T], sink: &mut S)
where
    T: Ord + Clone,
    S: StepSink<T>,
{
    if data.len() <= 1 {
        return;
    }

    let mut merged = BTreeSet::new();
    let right = data.len() - 1;
    sort_range(data, 0, right, &mut merged, sink);
}

fn sort_range<T, S>(
    data: &mut [T],
    left: usize,
    right: usize,
    merged: &mut BTreeSet<usize>,
    sink: &mut S,
) where
    T: Ord + Clone,
    S: StepSink<T>,
{
    if left >= right {
        return;
    }

    let mid = left + (right - left) / 2;
    sort_range(data, left, mid, merged, sink);
    sort_range(data, mid + 1, right, merged, sink);
    merge(data, left, mid, right, merged, sink);
}

fn merge<T, S>(
    data: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    merged: &mut BTreeSet<usize>,
    sink: &mut S,
) where
    T: Ord + Clone,
    S: StepSink<T>,
{
    let lhs = data[left..=mid].to_vec();
    let rhs = data[mid + 1..=right].to_vec();
    let progress = Progress::Merged(merged.clone());

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < lhs.len() && j < rhs.len() {
        let compared = Highlights::Pair(left + i, mid + 1 + j);
        if lhs[i] <= rhs[j] {
            data[k] = lhs[i].clone();
            i += 1;
        } else {
            data[k] = rhs[j].clone();
            j += 1;
        }
        k += 1;
        sink.emit(Step::new(StepKind::Place, data, compared, &progress, true));
    }

    while i < lhs.len() {
        let source = Highlights::One(left + i);
        data[k] = lhs[i].clone();
        i += 1;
        k += 1;
        sink.emit(Step::new(StepKind::Place, data, source, &progress, true));
    }

    while j < rhs.len() {
        let source = Highlights::One(mid + 1 + j);
        data[k] = rhs[j].clone();
        j += 1;
        k += 1;
        sink.emit(Step::new(StepKind::Place, data, source, &progress, true));
    }

    merged.extend(left..=right);
    sink.emit(Step::new(
        StepKind::Mark,
        data,
        Highlights::None,
        &Progress::Merged(merged.clone()),
        false,
    ));
}
