//! Auto-run driver.
//!
//! Calls [`Simulator::step`] at a fixed interval until the run finishes or a
//! [`CancelToken`] is cancelled. The pacing lives here, outside the state
//! transition: each step is still atomic and never blocks. The token can be
//! cloned into another thread (or a step callback) to stop the run.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use super::outcome::{Step, StepOutcome};
use super::simulator::Simulator;
use crate::common::SimError;
use crate::config::AutoRunConfig;

/// Shared cancellation flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates an uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that the run stop before its next step.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// True once `cancel` has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Why an auto-run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnd {
    /// The reference string was exhausted.
    Finished,
    /// The cancel token was triggered.
    Cancelled,
}

/// Result of an auto-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps performed by this run.
    pub steps: usize,
    /// Why the run stopped.
    pub end: RunEnd,
}

/// Timed step scheduler.
#[derive(Debug, Clone)]
pub struct AutoRunner {
    interval: Duration,
    token: CancelToken,
}

impl AutoRunner {
    /// Creates a runner pausing `interval` between steps.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            token: CancelToken::new(),
        }
    }

    /// Creates a runner from configuration.
    pub fn from_config(config: &AutoRunConfig) -> Self {
        Self::new(Duration::from_millis(config.interval_ms))
    }

    /// Handle that cancels this runner.
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Pause between steps.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Steps `sim` until it finishes or the token is cancelled.
    ///
    /// The token is checked before every step. `on_step` sees each outcome as
    /// soon as it is produced.
    ///
    /// # Errors
    ///
    /// The first error returned by `Simulator::step`.
    pub fn run<F>(&self, sim: &mut Simulator, mut on_step: F) -> Result<RunSummary, SimError>
    where
        F: FnMut(&StepOutcome),
    {
        let mut steps = 0;
        loop {
            if self.token.is_cancelled() {
                info!(steps, "auto-run cancelled");
                return Ok(RunSummary {
                    steps,
                    end: RunEnd::Cancelled,
                });
            }

            let step = sim.step()?;
            if let Step::Access(outcome) = &step {
                steps += 1;
                on_step(outcome);
            }
            if step.is_finished() {
                debug!(steps, "auto-run finished");
                return Ok(RunSummary {
                    steps,
                    end: RunEnd::Finished,
                });
            }

            if !self.interval.is_zero() {
                thread::sleep(self.interval);
            }
        }
    }
}
