//! Instrumented Counting Sort
//!
//! Tallies keys offset by the minimum, prefix-sums the counts in place and
//! then scatters the source into an output buffer from the last index to the
//! first, which keeps equal keys in their original order. The output
//! replaces the input once the scatter completes.
//!
//! Complexity: O(n + k) where k = max - min + 1. The counts buffer grows with
//! k, so the range is checked against a caller-supplied limit before any
//! allocation happens.

use crate::error::{Error, Result};
use crate::step::{Highlights, Progress, Step, StepKind, StepSink};

/// Default upper bound on `max - min + 1`.
pub const DEFAULT_MAX_RANGE: u64 = 1024;

/// Sort integers in place, reporting every read and placement to `sink`.
pub fn sort<S: StepSink<i32>>(data: &mut [i32], max_range: u64, sink: &mut S) -> Result<()> {
    sort_by_key(data, |&v| i64::from(v), max_range, sink)
}

/// Sort `data` by an integer key. Stable for equal keys.
///
/// Unplaced output slots hold `T::default()` in intermediate snapshots.
pub fn sort_by_key<T, K, S>(data: &mut [T], key: K, max_range: u64, sink: &mut S) -> Result<()>
where
    T: Clone + Default,
    K: Fn(&T) -> i64,
    S: StepSink<T>,
{
    let n = data.len();
    if n <= 1 {
        return Ok(());
    }

    let keys: Vec<i64> = data.iter().map(&key).collect();
    let (min, range) = key_range(&keys, max_range)?;

    let mut counts = vec![0usize; range];
    for &k in &keys {
        counts[(k - min) as usize] += 1;
    }
    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }

    let mut output = vec![T::default(); n];
    let mut placed_any = false;

    for i in (0..n).rev() {
        let progress = Progress::Placed(n - i - 1);
        let shown: &[T] = if placed_any { &output[..] } else { &data[..] };
        sink.emit(Step::new(
            StepKind::Compare,
            shown,
            Highlights::One(i),
            &progress,
            true,
        ));

        let slot = (keys[i] - min) as usize;
        let dest = counts[slot] - 1;
        output[dest] = data[i].clone();
        counts[slot] -= 1;
        placed_any = true;

        sink.emit(Step::new(
            StepKind::Place,
            &output,
            Highlights::One(i),
            &Progress::Placed(n - i),
            true,
        ));
    }

    data.clone_from_slice(&output);
    sink.emit(Step::new(
        StepKind::Mark,
        data,
        Highlights::None,
        &Progress::Placed(n),
        false,
    ));
    Ok(())
}

/// Minimum key and the width of the counts buffer, checked against `max_range`.
fn key_range(keys: &[i64], max_range: u64) -> Result<(i64, usize)> {
    let min = keys.iter().copied().min().unwrap_or(0);
    let max = keys.iter().copied().max().unwrap_or(0);

    // i128 so that extreme i64 keys cannot overflow the subtraction
    let range = (i128::from(max) - i128::from(min) + 1) as u128;
    if range > u128::from(max_range) {
        return Err(Error::RangeTooLarge {
            range: u64::try_from(range).unwrap_or(u64::MAX),
            limit: max_range,
        });
    }

    Ok((min, range as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::is_sorted;
    use rand::Rng;

    fn run(data: &mut [i32]) -> Vec<Step> {
        let mut steps = Vec::new();
        sort(data, DEFAULT_MAX_RANGE, &mut steps).unwrap();
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
        let steps = run(&mut data);
        assert_eq!(data, vec![10, 15, 20, 35, 45, 55, 60, 80]);

        // a read and a placement per element, plus the final mark
        assert_eq!(steps.len(), 17);
        assert_eq!(steps.iter().filter(|s| s.paced).count(), 16);
    }

    #[test]
    fn test_negative_values_and_duplicates() {
        let mut data = vec![-3, 5, -3, 0];
        run(&mut data);
        assert_eq!(data, vec![-3, -3, 0, 5]);
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let mut data = vec![(5, "a"), (5, "b"), (3, "c")];
        let mut steps: Vec<Step<(i32, &str)>> = Vec::new();
        sort_by_key(&mut data, |r| i64::from(r.0), DEFAULT_MAX_RANGE, &mut steps).unwrap();
        assert_eq!(data, vec![(3, "c"), (5, "a"), (5, "b")]);
    }

    #[test]
    fn test_placed_marker_increments() {
        let mut data = vec![3, 1, 2];
        let steps = run(&mut data);

        let placed: Vec<usize> = steps
            .iter()
            .filter(|s| s.kind == StepKind::Place)
            .filter_map(|s| match s.progress {
                Progress::Placed(c) => Some(c),
                _ => None,
            })
            .collect();
        assert_eq!(placed, vec![1, 2, 3]);
        assert_eq!(steps.last().unwrap().progress, Progress::Placed(3));
    }

    #[test]
    fn test_first_read_shows_source_then_output() {
        let mut data = vec![3, 1, 2];
        let steps = run(&mut data);

        assert_eq!(steps[0].kind, StepKind::Compare);
        assert_eq!(steps[0].snapshot, vec![3, 1, 2]);
        assert_eq!(steps[0].highlights, Highlights::One(2));

        // 2 lands in the middle slot of a zeroed output, the source index stays lit
        assert_eq!(steps[1].snapshot, vec![0, 2, 0]);
        assert_eq!(steps[1].highlights, Highlights::One(2));

        assert_eq!(steps[2].snapshot, vec![0, 2, 0]);
        assert_eq!(steps[2].highlights, Highlights::One(1));
    }

    #[test]
    fn test_placement_keeps_source_highlight() {
        let mut data = vec![45, 20, 35, 10, 60, 80, 55, 15];
        let steps = run(&mut data);

        // 15 is read from index 7 and written to output slot 1
        assert_eq!(steps[0].highlights, Highlights::One(7));
        assert_eq!(steps[1].kind, StepKind::Place);
        assert_eq!(steps[1].highlights, Highlights::One(7));
        assert_eq!(steps[1].snapshot[1], 15);

        for pair in steps[..16].chunks(2) {
            assert_eq!(pair[0].highlights, pair[1].highlights);
        }
    }

    #[test]
    fn test_range_guard() {
        let mut data = vec![0, 1_000_000];
        let mut steps: Vec<Step> = Vec::new();
        let err = sort(&mut data, DEFAULT_MAX_RANGE, &mut steps).unwrap_err();
        assert!(matches!(
            err,
            Error::RangeTooLarge {
                range: 1_000_001,
                limit: 1024
            }
        ));
        assert!(steps.is_empty());
        assert_eq!(data, vec![0, 1_000_000]);
    }

    #[test]
    fn test_range_guard_extreme_keys() {
        let mut data = vec![i32::MIN, i32::MAX];
        let mut steps: Vec<Step> = Vec::new();
        assert!(sort(&mut data, DEFAULT_MAX_RANGE, &mut steps).is_err());
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
