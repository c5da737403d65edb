//! Step Reporter and pacing loop.
//!
//! The [`Player`] owns pacing: it pulls steps from a [`Session`], hands each
//! one to a [`StepReporter`] and sleeps after paced steps only. Algorithms
//! never see wall-clock time.

use crate::algorithm::Algorithm;
use crate::config::Config;
use crate::error::Result;
use crate::session::Session;
use crate::step::{Step, StepKind};
use log::debug;
use std::thread;
use std::time::Duration;

/// Host side of the step contract: renders what the procedure reports.
pub trait StepReporter {
    /// Render one step. Called before the pacing pause.
    fn report(&mut self, step: &Step) -> Result<()>;

    /// Called once the session is back to idle.
    fn finished(&mut self, _session: &Session) -> Result<()> {
        Ok(())
    }
}

/// Counters accumulated over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub steps: usize,
    pub paced_steps: usize,
    pub comparisons: usize,
    pub moves: usize,
}

impl RunStats {
    pub fn record(&mut self, step: &Step) {
        self.steps += 1;
        if step.paced {
            self.paced_steps += 1;
        }
        if step.kind == StepKind::Compare {
            self.comparisons += 1;
        }
        if step.kind.is_move() {
            self.moves += 1;
        }
    }

    pub fn from_steps<'a, I>(steps: I) -> Self
    where
        I: IntoIterator<Item = &'a Step>,
    {
        let mut stats = RunStats::default();
        for step in steps {
            stats.record(step);
        }
        stats
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Player {
    delay: Duration,
}

impl Player {
    pub fn new(delay: Duration) -> Self {
        Player { delay }
    }

    /// Use the configured delay override, or the algorithm's own pacing.
    pub fn from_config(config: &Config, algorithm: Algorithm) -> Self {
        Player::new(config.delay().unwrap_or_else(|| algorithm.default_delay()))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start `session` and play it to completion through `reporter`.
    ///
    /// If the session is already running, the in-flight run is played
    /// instead of starting a new one.
    pub fn run<R: StepReporter>(&self, session: &mut Session, reporter: &mut R) -> Result<RunStats> {
        if !session.is_running() {
            session.start()?;
        }

        let mut stats = RunStats::default();
        while let Some(step) = session.advance() {
            stats.record(&step);
            reporter.report(&step)?;
            if step.paced && !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }

        debug!(
            "{}: played {} steps ({} paced)",
            session.algorithm(),
            stats.steps,
            stats.paced_steps
        );
        reporter.finished(session)?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::RunState;
    use std::time::Instant;

    #[derive(Default)]
    struct Recorder {
        steps: Vec<Step>,
        finished_with: Option<Vec<i32>>,
    }

    impl StepReporter for Recorder {
        fn report(&mut self, step: &Step) -> Result<()> {
            self.steps.push(step.clone());
            Ok(())
        }

        fn finished(&mut self, session: &Session) -> Result<()> {
            assert_eq!(session.state(), RunState::Idle);
            self.finished_with = Some(session.data().to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_player_drains_without_delay() {
        let player = Player::new(Duration::ZERO);
        for algorithm in Algorithm::ALL {
            let mut session = Session::new(algorithm, Config::default());
            let mut recorder = Recorder::default();
            let stats = player.run(&mut session, &mut recorder).unwrap();

            assert_eq!(stats.steps, recorder.steps.len());
            assert_eq!(
                recorder.finished_with,
                Some(vec![10, 15, 20, 35, 45, 55, 60, 80])
            );
        }
    }

    #[test]
    fn test_player_sleeps_only_on_paced_steps() {
        // sorted input: bubble sort only compares, so nothing is paced
        let config = Config {
            dataset: vec![1, 2, 3, 4],
            ..Config::default()
        };
        let mut session = Session::new(Algorithm::Bubble, config);
        let player = Player::new(Duration::from_secs(5));
        let started = Instant::now();
        let stats = player.run(&mut session, &mut Recorder::default()).unwrap();

        assert_eq!(stats.paced_steps, 0);
        assert_eq!(stats.comparisons, 6);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_run_stats_counts_kinds() {
        let config = Config::default();
        let steps: Vec<Step> = Algorithm::Bubble
            .trace(&config.dataset, &config)
            .unwrap()
            .collect();
        let stats = RunStats::from_steps(&steps);
        assert_eq!(stats.comparisons, 28);
        assert_eq!(stats.moves, stats.paced_steps);
        assert_eq!(stats.steps, stats.comparisons + stats.moves);
    }

    #[test]
    fn test_from_config_delay() {
        let config = Config::default();
        assert_eq!(
            Player::from_config(&config, Algorithm::Counting).delay(),
            Duration::from_millis(200)
        );

        let config = Config {
            delay_ms: Some(0),
            ..Config::default()
        };
        assert_eq!(
            Player::from_config(&config, Algorithm::Merge).delay(),
            Duration::ZERO
        );
    }
}
