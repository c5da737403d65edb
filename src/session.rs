//! Session State
//!
//! A [`Session`] is one visualizer instance: the current array, whether a run
//! is in progress, the highlighted indices and the progress marker.
//!
//! ```text
//! Idle --start--> Running --(advance)*--> Idle
//!   ^                |
//!   +-----reset------+   (accepted in any state)
//! ```
//!
//! `start` while running is ignored. A reset drops the pending steps and
//! invalidates every [`RunTicket`] issued so far, so a host that resumes a
//! stale run after a reset gets nothing back instead of writing old data
//! over the fresh dataset.

use crate::algorithm::Algorithm;
use crate::config::Config;
use crate::error::Result;
use crate::step::{Highlights, Progress, Step, Steps};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    #[default]
    Idle,
    Running,
}

/// Handle identifying one run of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTicket(u64);

impl RunTicket {
    /// Numeric form of the ticket, for hosts that keep it outside Rust.
    pub fn id(self) -> u64 {
        self.0
    }

    pub fn from_id(id: u64) -> Self {
        RunTicket(id)
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    algorithm: Algorithm,
    config: Config,
    data: Vec<i32>,
    state: RunState,
    highlights: Highlights,
    progress: Progress,
    pending: Option<Steps>,
    generation: u64,
}

impl Session {
    /// Create an idle session over `config.dataset`.
    pub fn new(algorithm: Algorithm, config: Config) -> Self {
        Session {
            algorithm,
            data: config.dataset.clone(),
            config,
            state: RunState::Idle,
            highlights: Highlights::None,
            progress: Progress::None,
            pending: None,
            generation: 0,
        }
    }

    /// Begin a run over the current data.
    ///
    /// Returns `Ok(None)` without touching the in-flight run when one is
    /// already active. On error the session stays idle.
    pub fn start(&mut self) -> Result<Option<RunTicket>> {
        if self.state == RunState::Running {
            debug!("{}: start ignored, already running", self.algorithm);
            return Ok(None);
        }

        let steps = self.algorithm.trace(&self.data, &self.config)?;
        debug!(
            "{}: starting run over {} values ({} steps)",
            self.algorithm,
            self.data.len(),
            steps.remaining()
        );

        self.generation += 1;
        if steps.remaining() == 0 {
            // nothing to animate, the run is already complete
            self.finish();
        } else {
            self.state = RunState::Running;
            self.pending = Some(steps);
        }
        Ok(Some(RunTicket(self.generation)))
    }

    /// Apply the next step of the current run.
    ///
    /// Returns `None` when idle, or when the run just completed; in the
    /// latter case the session has moved back to `Idle`.
    pub fn advance(&mut self) -> Option<Step> {
        let pending = self.pending.as_mut()?;

        match pending.next() {
            Some(step) => {
                trace!(
                    "{}: {:?} {:?} {:?}",
                    self.algorithm,
                    step.kind,
                    step.highlights,
                    step.snapshot
                );
                self.data.clone_from(&step.snapshot);
                self.highlights = step.highlights;
                self.progress = step.progress.clone();
                Some(step)
            }
            None => {
                self.finish();
                None
            }
        }
    }

    /// Like [`Session::advance`], but a no-op for tickets from a run that
    /// has been reset or superseded.
    pub fn resume(&mut self, ticket: RunTicket) -> Option<Step> {
        if ticket.0 != self.generation || self.state != RunState::Running {
            debug!("{}: dropping stale resumption", self.algorithm);
            return None;
        }
        self.advance()
    }

    /// Restore the initial dataset and clear all run state.
    pub fn reset(&mut self) {
        debug!("{}: reset", self.algorithm);
        self.data.clone_from(&self.config.dataset);
        self.state = RunState::Idle;
        self.highlights = Highlights::None;
        self.progress = Progress::None;
        self.pending = None;
        self.generation += 1;
    }

    fn finish(&mut self) {
        debug!("{}: run complete", self.algorithm);
        self.pending = None;
        self.state = RunState::Idle;
        self.highlights = Highlights::None;
        self.progress = std::mem::take(&mut self.progress).settled();
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn data(&self) -> &[i32] {
        &self.data
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn highlights(&self) -> Highlights {
        self.highlights
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }
}
