//! Instrumented Selection Sort
//!
//! For each position `i`, scans the unsorted tail tracking the running
//! minimum. Every comparison pauses with `(min, j)` highlighted and the
//! minimum marker visible for the whole scan; a single swap follows when the
//! minimum is not already at `i`.

use crate::step::{Highlights, Progress, Step, StepKind, StepSink};

/// Sort `data` in place, reporting every comparison and swap to `sink`.
pub fn sort<T, S>(data: &mut [T], sink: &mut S)
where
    T: Ord + Clone,
    S: StepSink<T>,
{
    let n = data.len();
    if n <= 1 {
        return;
    }

    for i in 0..n {
        let mut min = i;

        for j in i + 1..n {
            let compared = Highlights::pair(min, j);
            if data[j] < data[min] {
                min = j;
            }
            sink.emit(Step::new(
                StepKind::Compare,
                data,
                compared,
                &Progress::MinIndex(min),
                true,
            ));
        }

        if min != i {
            data.swap(i, min);
            sink.emit(Step::new(
                StepKind::Swap,
                data,
                Highlights::pair(i, min),
                &Progress::MinIndex(min),
                true,
            ));
        }
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
        run(&mut data);
        assert_eq!(data, vec![10, 15, 20, 35, 45, 55, 60, 80]);
    }

    #[test]
    fn test_min_marker_visible_during_scan() {
        let mut data = vec![30, 10, 20];
        let steps = run(&mut data);

        // First scan: compare (0,1) finds 10, then (1,2) keeps 10
        assert_eq!(steps[0].highlights, Highlights::Pair(0, 1));
        assert_eq!(steps[0].progress, Progress::MinIndex(1));
        assert_eq!(steps[1].highlights, Highlights::Pair(1, 2));
        assert_eq!(steps[1].progress, Progress::MinIndex(1));

        assert_eq!(steps[2].kind, StepKind::Swap);
        assert_eq!(steps[2].snapshot, vec![10, 30, 20]);
        assert!(steps
            .iter()
            .all(|s| matches!(s.progress, Progress::MinIndex(_)) && s.paced));
    }

    #[test]
    fn test_sorted_input_has_no_swaps() {
        let mut data: Vec<i32> = (0..6).collect();
        let steps = run(&mut data);
        assert_eq!(steps.len(), 15);
        assert!(steps.iter().all(|s| s.kind == StepKind::Compare));
    }

    #[test]
    fn test_sort_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<i32> = (0..64).map(|_| rng.gen_range(-100..100)).collect();
        let mut expected = data.clone();
        expected.sort();
        run(&mut data);
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }
}
