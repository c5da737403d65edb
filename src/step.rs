//! Step Reporting Model
//!
//! Every instrumented procedure reports its progress as a sequence of
//! [`Step`]s instead of sleeping between operations. A step carries a full
//! snapshot of the array, the indices the host should emphasize and the
//! algorithm-specific progress marker.
//!
//! Procedures write steps into a [`StepSink`]. Recording into a `Vec` and
//! wrapping it in [`Steps`] gives the host a lazy sequence it can pull from
//! at its own pacing, while tests can drain it with no delay at all.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What a step did to the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Elements are being compared or inspected; the array is unchanged.
    Compare,
    /// Two elements exchanged positions.
    Swap,
    /// An element was copied one slot to the right (insertion sort).
    Shift,
    /// A value was written into its destination slot.
    Place,
    /// Only the progress marker changed.
    Mark,
}

impl StepKind {
    /// Whether this kind of step moved data.
    pub fn is_move(self) -> bool {
        matches!(self, StepKind::Swap | StepKind::Shift | StepKind::Place)
    }
}

/// Indices the current step wants visually emphasized. At most two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlights {
    #[default]
    None,
    One(usize),
    Pair(usize, usize),
}

impl Highlights {
    /// Build a pair, collapsing to a single index when both are equal.
    pub fn pair(a: usize, b: usize) -> Self {
        if a == b {
            Highlights::One(a)
        } else {
            Highlights::Pair(a, b)
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        match *self {
            Highlights::None => false,
            Highlights::One(i) => i == index,
            Highlights::Pair(a, b) => a == index || b == index,
        }
    }

    pub fn indices(&self) -> Vec<usize> {
        match *self {
            Highlights::None => Vec::new(),
            Highlights::One(i) => vec![i],
            Highlights::Pair(a, b) => vec![a, b],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Highlights::None)
    }
}

/// Algorithm-specific marker of which indices are already in place.
///
/// The shapes differ per procedure and are kept apart on purpose; use
/// [`Progress::is_marked`] to get the rendering interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Progress {
    #[default]
    None,
    /// Insertion sort: indices `<= boundary` form the region being built.
    Prefix(usize),
    /// Selection sort: the running minimum of the current scan.
    MinIndex(usize),
    /// Merge sort: every index covered by a completed merge.
    Merged(BTreeSet<usize>),
    /// Quick sort: every index covered by a completed partition range.
    Sorted(BTreeSet<usize>),
    /// Heap sort: indices `>= boundary` are final.
    SortedFrom(usize),
    /// Counting sort: number of values placed into the output so far.
    ///
    /// Output slots fill in key order, not from one end, so no index is
    /// final until every value is placed. Nothing is marked before
    /// `count == len`; then the whole array is.
    Placed(usize),
}

impl Progress {
    /// Whether `index` should be drawn as sorted (or, for selection sort,
    /// as the current minimum) in an array of length `len`.
    pub fn is_marked(&self, index: usize, len: usize) -> bool {
        match self {
            Progress::None => false,
            Progress::Prefix(boundary) => index <= *boundary,
            Progress::MinIndex(min) => index == *min,
            Progress::Merged(set) | Progress::Sorted(set) => set.contains(&index),
            Progress::SortedFrom(boundary) => index >= *boundary,
            Progress::Placed(count) => *count >= len,
        }
    }

    /// The marker left visible once a run completes. Insertion and
    /// selection markers only make sense mid-run and are cleared.
    pub fn settled(self) -> Progress {
        match self {
            Progress::Prefix(_) | Progress::MinIndex(_) => Progress::None,
            other => other,
        }
    }
}

/// One reportable unit of algorithmic progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step<T = i32> {
    pub kind: StepKind,
    pub snapshot: Vec<T>,
    pub highlights: Highlights,
    pub progress: Progress,
    /// Whether the host should pause after rendering this step.
    pub paced: bool,
}

impl<T: Clone> Step<T> {
    pub fn new(
        kind: StepKind,
        snapshot: &[T],
        highlights: Highlights,
        progress: &Progress,
        paced: bool,
    ) -> Self {
        Step {
            kind,
            snapshot: snapshot.to_vec(),
            highlights,
            progress: progress.clone(),
            paced,
        }
    }
}

/// Receiver of the steps reported by an instrumented procedure.
pub trait StepSink<T = i32> {
    fn emit(&mut self, step: Step<T>);
}

impl<T> StepSink<T> for Vec<Step<T>> {
    fn emit(&mut self, step: Step<T>) {
        self.push(step);
    }
}

/// Sink that drops every step, for running a procedure purely for its result.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl<T> StepSink<T> for Discard {
    fn emit(&mut self, _step: Step<T>) {}
}

/// Lazy sequence of steps recorded from one run.
#[derive(Debug, Clone)]
pub struct Steps<T = i32> {
    inner: std::vec::IntoIter<Step<T>>,
}

impl<T> Steps<T> {
    pub fn new(steps: Vec<Step<T>>) -> Self {
        Steps {
            inner: steps.into_iter(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.inner.len()
    }
}

impl<T> Iterator for Steps<T> {
    type Item = Step<T>;

    fn next(&mut self) -> Option<Step<T>> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Steps<T> {}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlights_pair_collapses() {
        assert_eq!(Highlights::pair(3, 3), Highlights::One(3));
        assert_eq!(Highlights::pair(1, 2), Highlights::Pair(1, 2));
    }

    #[test]
    fn test_highlights_contains() {
        let h = Highlights::Pair(0, 4);
        assert!(h.contains(0));
        assert!(h.contains(4));
        assert!(!h.contains(2));
        assert!(!Highlights::None.contains(0));
        assert_eq!(h.indices(), vec![0, 4]);
    }

    #[test]
    fn test_progress_interpretation() {
        assert!(Progress::Prefix(2).is_marked(2, 8));
        assert!(!Progress::Prefix(2).is_marked(3, 8));
        assert!(Progress::SortedFrom(5).is_marked(7, 8));
        assert!(!Progress::SortedFrom(5).is_marked(4, 8));
        assert!(Progress::MinIndex(3).is_marked(3, 8));
        assert!(!Progress::MinIndex(3).is_marked(2, 8));
        assert!(!Progress::Placed(7).is_marked(0, 8));
        assert!(Progress::Placed(8).is_marked(0, 8));

        let set: BTreeSet<usize> = [1, 2].into_iter().collect();
        assert!(Progress::Merged(set.clone()).is_marked(1, 8));
        assert!(!Progress::Sorted(set).is_marked(0, 8));
    }

    #[test]
    fn test_progress_settled() {
        assert_eq!(Progress::Prefix(4).settled(), Progress::None);
        assert_eq!(Progress::MinIndex(4).settled(), Progress::None);
        assert_eq!(Progress::SortedFrom(0).settled(), Progress::SortedFrom(0));
        assert_eq!(Progress::Placed(8).settled(), Progress::Placed(8));
    }

    #[test]
    fn test_steps_iterator() {
        let progress = Progress::None;
        let recorded = vec![
            Step::new(StepKind::Compare, &[2, 1], Highlights::Pair(0, 1), &progress, false),
            Step::new(StepKind::Swap, &[1, 2], Highlights::Pair(0, 1), &progress, true),
        ];
        let mut steps = Steps::new(recorded);
        assert_eq!(steps.remaining(), 2);
        assert_eq!(steps.next().map(|s| s.kind), Some(StepKind::Compare));
        assert_eq!(steps.next().map(|s| s.snapshot), Some(vec![1, 2]));
        assert!(steps.next().is_none());
    }

    #[test]
    fn test_step_serializes_to_json() {
        let step = Step::new(
            StepKind::Swap,
            &[1, 2],
            Highlights::Pair(0, 1),
            &Progress::SortedFrom(1),
            true,
        );
        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"kind\":\"swap\""));
        assert!(json.contains("\"pair\":[0,1]"));
        assert!(json.contains("\"sorted_from\":1"));
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[1, 2, 3, 4, 5]));
        assert!(is_sorted(&[1, 1, 1, 1]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted::<i32>(&[]));
        assert!(!is_sorted(&[5, 4, 3, 2, 1]));
        assert!(!is_sorted(&[1, 3, 2]));
    }
}
