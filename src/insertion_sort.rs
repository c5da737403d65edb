//! Instrumented Insertion Sort
//!
//! For each index `i` from 1, the key is lifted out and larger left
//! neighbours shift one slot right. Each shift is reported with the vacated
//! slot highlighted, and the final placement is reported once more even
//! when no shift happened. The progress marker is the insertion boundary.

use crate::step::{Highlights, Progress, Step, StepKind, StepSink};

/// Sort `data` in place, reporting every shift and placement to `sink`.
pub fn sort<T, S>(data: &mut [T], sink: &mut S)
where
    T: Ord + Clone,
    S: StepSink<T>,
{
    let n = data.len();
    if n <= 1 {
        return;
    }

    for i in 1..n {
        let progress = Progress::Prefix(i);
        let key = data[i].clone();
        let mut hole = i;

        while hole > 0 && data[hole - 1] > key {
            data[hole] = data[hole - 1].clone();
            hole -= 1;
            sink.emit(Step::new(
                StepKind::Shift,
                data,
                Highlights::One(hole),
                &progress,
                true,
            ));
        }

        data[hole] = key;
        sink.emit(Step::new(
            StepKind::Place,
            data,
            Highlights::One(hole),
            &progress,
            true,
        ));
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
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn test_sort_fixture() {
        let mut data = vec![45, 20, 35, 10, 60, 80, 55, 15];
        run(&mut data);
        assert_eq!(data, vec![10, 15, 20, 35, 45, 55, 60, 80]);
    }

    #[test]
    fn test_key_in_place_still_reports_placement() {
        let mut data = vec![1, 2, 3];
        let steps = run(&mut data);
        assert_eq!(steps.len(), 2);
        assert!(steps.iter().all(|s| s.kind == StepKind::Place && s.paced));
        assert_eq!(steps[0].highlights, Highlights::One(1));
        assert_eq!(steps[0].progress, Progress::Prefix(1));
        assert_eq!(steps[1].highlights, Highlights::One(2));
        assert_eq!(steps[1].progress, Progress::Prefix(2));
    }

    #[test]
    fn test_shift_highlights_vacated_slot() {
        let mut data = vec![20, 10];
        let steps = run(&mut data);
        assert_eq!(steps.len(), 2);

        // 20 moved right, slot 0 is now the hole
        assert_eq!(steps[0].kind, StepKind::Shift);
        assert_eq!(steps[0].snapshot, vec![20, 20]);
        assert_eq!(steps[0].highlights, Highlights::One(0));

        assert_eq!(steps[1].kind, StepKind::Place);
        assert_eq!(steps[1].snapshot, vec![10, 20]);
        assert_eq!(steps[1].highlights, Highlights::One(0));
    }

    #[test]
    fn test_step_count_matches_inversions() {
        let mut data = vec![4, 3, 2, 1];
        let steps = run(&mut data);
        let shifts = steps.iter().filter(|s| s.kind == StepKind::Shift).count();
        let places = steps.iter().filter(|s| s.kind == StepKind::Place).count();
        assert_eq!(shifts, 6);
        assert_eq!(places, 3);
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
