//! Catalog of the instrumented procedures.
//!
//! [`Algorithm`] tags one of the seven procedures and dispatches a dataset
//! to it, recording the run as a [`Steps`] sequence.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::step::{Step, StepSink, Steps};
use crate::{
    bubble_sort, counting_sort, heap_sort, insertion_sort, merge_sort, quick_sort,
    selection_sort,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Heap,
    Counting,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Counting,
    ];

    /// Short machine name, e.g. `"merge"`.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Counting => "counting",
        }
    }

    /// Display title, e.g. `"Merge Sort"`.
    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Counting => "Counting Sort",
        }
    }

    /// Worst-case time complexity.
    pub fn complexity(self) -> &'static str {
        match self {
            Algorithm::Bubble | Algorithm::Insertion | Algorithm::Selection | Algorithm::Quick => {
                "O(n²)"
            }
            Algorithm::Merge | Algorithm::Heap => "O(n log n)",
            Algorithm::Counting => "O(n + k)",
        }
    }

    /// One-line summary shown next to the animation.
    pub fn summary(self) -> &'static str {
        match self {
            Algorithm::Bubble => {
                "Compares adjacent pairs and swaps them, floating the largest value to the end of each pass."
            }
            Algorithm::Insertion => {
                "Takes each value in turn and shifts larger neighbours right until its slot opens."
            }
            Algorithm::Selection => {
                "Scans the unsorted tail for its minimum and swaps it to the front."
            }
            Algorithm::Merge => {
                "Splits the array in half, sorts each half and merges them back in order."
            }
            Algorithm::Quick => {
                "Partitions around the last element as pivot and sorts each side."
            }
            Algorithm::Heap => {
                "Builds a max-heap and repeatedly moves its root to the end of the array."
            }
            Algorithm::Counting => {
                "Counts each value, turns counts into positions and places values directly."
            }
        }
    }

    /// Whether equal values keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Merge | Algorithm::Counting)
    }

    /// Pause between paced steps used when no override is configured.
    pub fn default_delay(self) -> Duration {
        match self {
            Algorithm::Counting => Duration::from_millis(200),
            _ => Duration::from_millis(300),
        }
    }

    /// Run the procedure over a copy of `data` and record every step.
    pub fn trace(self, data: &[i32], config: &Config) -> Result<Steps> {
        let mut work = data.to_vec();
        let mut steps: Vec<Step> = Vec::new();
        self.run(&mut work, config, &mut steps)?;
        Ok(Steps::new(steps))
    }

    /// Sort `data` in place with this procedure, reporting into `sink`.
    pub fn run<S: StepSink<i32>>(self, data: &mut [i32], config: &Config, sink: &mut S) -> Result<()> {
        match self {
            Algorithm::Bubble => bubble_sort::sort(data, sink),
            Algorithm::Insertion => insertion_sort::sort(data, sink),
            Algorithm::Selection => selection_sort::sort(data, sink),
            Algorithm::Merge => merge_sort::sort(data, sink),
            Algorithm::Quick => quick_sort::sort(data, sink),
            Algorithm::Heap => heap_sort::sort(data, sink),
            Algorithm::Counting => counting_sort::sort(data, config.max_counting_range, sink)?,
        }
        Ok(())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Accepts `merge`, `merge-sort`, `merge_sort` and `mergeSort`, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        let base = lowered
            .strip_suffix("-sort")
            .or_else(|| lowered.strip_suffix("_sort"))
            .or_else(|| lowered.strip_suffix("sort"))
            .unwrap_or(&lowered);

        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == base)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}
