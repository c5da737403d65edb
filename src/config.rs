//! Configuration for the sort visualizer.
//!
//! Defaults reproduce the classic page setup: the canonical eight-element
//! dataset, per-algorithm pacing and a small counting-sort range limit.
//! Environment variables can override any of them:
//!
//! - `SORTVIS_DATASET` comma separated integers, e.g. `5,3,8,1`
//! - `SORTVIS_DELAY_MS` pause after each paced step, in milliseconds
//! - `SORTVIS_MAX_COUNTING_RANGE` widest `max - min + 1` counting sort accepts

use crate::counting_sort::DEFAULT_MAX_RANGE;
use crate::error::{Error, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Environment variable holding a comma separated dataset.
pub const ENV_DATASET: &str = "SORTVIS_DATASET";
/// Environment variable overriding the step delay.
pub const ENV_DELAY_MS: &str = "SORTVIS_DELAY_MS";
/// Environment variable overriding the counting sort range limit.
pub const ENV_MAX_COUNTING_RANGE: &str = "SORTVIS_MAX_COUNTING_RANGE";

/// The dataset every visualizer starts from.
pub const DEFAULT_DATASET: [i32; 8] = [45, 20, 35, 10, 60, 80, 55, 15];

/// Longest dataset accepted from user input.
pub const DEFAULT_MAX_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Initial dataset restored on every reset.
    pub dataset: Vec<i32>,
    /// Pause after each paced step. `None` uses the algorithm's own pacing.
    pub delay_ms: Option<u64>,
    /// Widest value range counting sort may allocate counts for.
    pub max_counting_range: u64,
    /// Longest dataset accepted by [`Config::validate`].
    pub max_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dataset: DEFAULT_DATASET.to_vec(),
            delay_ms: None,
            max_counting_range: DEFAULT_MAX_RANGE,
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

impl Config {
    /// Build a configuration from defaults plus environment overrides.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(raw) = env::var(ENV_DATASET) {
            match Config::parse_dataset(&raw) {
                Ok(dataset) => config.dataset = dataset,
                Err(e) => warn!("ignoring {}: {}", ENV_DATASET, e),
            }
        }

        if let Ok(raw) = env::var(ENV_DELAY_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.delay_ms = Some(ms),
                Err(e) => warn!("ignoring {}={:?}: {}", ENV_DELAY_MS, raw, e),
            }
        }

        if let Ok(raw) = env::var(ENV_MAX_COUNTING_RANGE) {
            match raw.trim().parse::<u64>() {
                Ok(limit) if limit > 0 => config.max_counting_range = limit,
                Ok(_) => warn!("ignoring {}: must be positive", ENV_MAX_COUNTING_RANGE),
                Err(e) => warn!("ignoring {}={:?}: {}", ENV_MAX_COUNTING_RANGE, raw, e),
            }
        }

        config
    }

    /// Parse a comma separated list of integers. Whitespace is ignored and an
    /// empty string yields an empty dataset.
    pub fn parse_dataset(raw: &str) -> Result<Vec<i32>> {
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        raw.split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<i32>()
                    .map_err(|e| Error::InvalidDataset(format!("{:?}: {}", part, e)))
            })
            .collect()
    }

    /// Check the dataset against the configured limits.
    pub fn validate(&self) -> Result<()> {
        if self.dataset.len() > self.max_len {
            return Err(Error::InvalidDataset(format!(
                "{} values given, at most {} allowed",
                self.dataset.len(),
                self.max_len
            )));
        }
        if self.max_counting_range == 0 {
            return Err(Error::InvalidDataset(
                "counting range limit must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Explicit delay override, if any.
    pub fn delay(&self) -> Option<Duration> {
        self.delay_ms.map(Duration::from_millis)
    }
}
