//! Instrumented Heap Sort
//!
//! Builds a max-heap bottom-up, then repeatedly swaps the root with the last
//! unsorted slot. The progress marker is a descending boundary: every index
//! at or above it is final.

use crate::step::{Highlights, Progress, Step, StepKind, StepSink};

/// Sort `data` in place, reporting heap repairs and extractions to `sink`.
pub fn sort<T, S>(data: &mut [T], sink: &mut S)
where
    T: Ord + Clone,
    S: StepSink<T>,
{
    let n = data.len();
    if n <= 1 {
        return;
    }

    // Nothing is final while the heap is being built
    let building = Progress::SortedFrom(n);
    for i in (0..n / 2).rev() {
        heapify(data, n, i, &building, sink);
    }

    for i in (1..n).rev() {
        let ends = Highlights::Pair(0, i);
        sink.emit(Step::new(
            StepKind::Compare,
            data,
            ends,
            &Progress::SortedFrom(i + 1),
            true,
        ));

        data.swap(0, i);
        let progress = Progress::SortedFrom(i);
        sink.emit(Step::new(StepKind::Swap, data, ends, &progress, true));

        heapify(data, i, 0, &progress, sink);
    }

    sink.emit(Step::new(
        StepKind::Mark,
        data,
        Highlights::None,
        &Progress::SortedFrom(0),
        false,
    ));
}

/// Sift `data[i]` down within the heap `data[..size]`.
fn heapify<T, S>(data: &mut [T], size: usize, i: usize, progress: &Progress, sink: &mut S)
where
    T: Ord + Clone,
    S: StepSink<T>,
{
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < size && data[left] > data[largest] {
        largest = left;
    }
    if right < size && data[right] > data[largest] {
        largest = right;
    }

    if largest != i {
        let pair = Highlights::Pair(i, largest);
        sink.emit(Step::new(StepKind::Compare, data, pair, progress, true));

        data.swap(i, largest);
        sink.emit(Step::new(StepKind::Swap, data, pair, progress, false));

        heapify(data, size, largest, progress, sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::is_sorted;
    use rand::Rng;

    fn run(data: &mut [i32]) -> Vec<Step> {
        let mut steps = Vec::new();
        sort(data, &mut steps);
        steps
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut empty: Vec<i32> = vec![];
        assert!(run(&mut empty).is_empty());

        let mut single = vec![7];
        assert!(run(&mut single).is_empty());
    }

    #[test]
    fn test_sort_fixture() {
        let mut data = vec![45, 20, 35, 10, 60, 80, 55, 15];
        let steps = run(&mut data);
        assert_eq!(data, vec![10, 15, 20, 35, 45, 55, 60, 80]);

        let last = steps.last().unwrap();
        assert_eq!(last.kind, StepKind::Mark);
        assert_eq!(last.progress, Progress::SortedFrom(0));
        assert!(last.highlights.is_empty());
    }

    #[test]
    fn test_extraction_boundary_descends() {
        let mut data = vec![5, 4, 3, 2, 1];
        let steps = run(&mut data);

        let boundaries: Vec<usize> = steps
            .iter()
            .filter(|s| s.kind == StepKind::Swap && s.highlights.contains(0) && s.paced)
            .filter_map(|s| match s.progress {
                Progress::SortedFrom(b) => Some(b),
                _ => None,
            })
            .collect();
        assert_eq!(boundaries, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_heapify_reports_compare_then_swap() {
        // root 1 is smaller than its left child 3
        let mut data = vec![1, 3, 2];
        let steps = run(&mut data);

        assert_eq!(steps[0].kind, StepKind::Compare);
        assert_eq!(steps[0].highlights, Highlights::Pair(0, 1));
        assert_eq!(steps[0].snapshot, vec![1, 3, 2]);
        assert!(steps[0].paced);

        assert_eq!(steps[1].kind, StepKind::Swap);
        assert_eq!(steps[1].snapshot, vec![3, 1, 2]);
        assert!(!steps[1].paced);
        assert_eq!(steps[1].progress, Progress::SortedFrom(3));
    }

    #[test]
    fn test_sort_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<i32> = (0..100).map(|_| rng.gen_range(-100..100)).collect();
        let mut expected = data.clone();
        expected.sort();
        run(&mut data);
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }
}
