//! Simulator: owns the simulation state and drives it one reference at a time.
//!
//! `reset` replaces the whole state atomically; `step` is the only mutator.
//! A consistency failure halts the simulator until the next `reset`.

use tracing::{debug, error, info, trace};

use super::outcome::{Step, StepOutcome};
use super::state::SimulationState;
use super::write_bias::WriteBias;
use crate::common::{ConsistencyFault, FrameIndex, PageNumber, SimError};
use crate::config::{ModifiedBitsConfig, PolicyKind, SimConfig};
use crate::policies::{ReplacementPolicy, VictimQuery};
use crate::stats::RunStats;

/// Top-level simulator: state, write-bias generator and halt flag.
#[derive(Debug)]
pub struct Simulator {
    state: SimulationState,
    write_bias: WriteBias,
    modified_bits: ModifiedBitsConfig,
    halted: Option<SimError>,
}

impl Simulator {
    /// Creates a simulator with the default (random) modified-bit model.
    ///
    /// # Errors
    ///
    /// `SimError::InvalidConfiguration` when `frames == 0`.
    pub fn new(
        frames: usize,
        reference: Vec<PageNumber>,
        policy: PolicyKind,
    ) -> Result<Self, SimError> {
        Self::with_modified_bits(frames, reference, policy, ModifiedBitsConfig::default())
    }

    /// Creates a simulator with an explicit modified-bit model.
    ///
    /// # Errors
    ///
    /// `SimError::InvalidConfiguration` for zero frames or bad probabilities.
    pub fn with_modified_bits(
        frames: usize,
        reference: Vec<PageNumber>,
        policy: PolicyKind,
        modified_bits: ModifiedBitsConfig,
    ) -> Result<Self, SimError> {
        let state = SimulationState::new(frames, reference, policy)?;
        Self::from_state(state, modified_bits)
    }

    /// Creates a simulator around a custom policy implementation.
    ///
    /// # Errors
    ///
    /// `SimError::InvalidConfiguration` for zero frames or bad probabilities.
    pub fn with_policy(
        frames: usize,
        reference: Vec<PageNumber>,
        policy: Box<dyn ReplacementPolicy>,
        modified_bits: ModifiedBitsConfig,
    ) -> Result<Self, SimError> {
        let state = SimulationState::with_policy(frames, reference, policy)?;
        Self::from_state(state, modified_bits)
    }

    /// Creates a simulator from a full configuration.
    ///
    /// # Errors
    ///
    /// Any validation failure of `config`.
    pub fn from_config(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Self::with_modified_bits(
            config.frames,
            config.reference.clone(),
            config.policy,
            config.modified_bits.clone(),
        )
    }

    fn from_state(
        state: SimulationState,
        modified_bits: ModifiedBitsConfig,
    ) -> Result<Self, SimError> {
        let write_bias = WriteBias::new(&modified_bits)?;
        info!(
            frames = state.frame_count(),
            references = state.reference().len(),
            policy = %state.policy(),
            "simulation initialized"
        );
        Ok(Self {
            state,
            write_bias,
            modified_bits,
            halted: None,
        })
    }

    /// Replaces the state with a fresh run.
    ///
    /// On error nothing changes, including a halted condition.
    ///
    /// # Errors
    ///
    /// `SimError::InvalidConfiguration` when `frames == 0`.
    pub fn reset(
        &mut self,
        frames: usize,
        reference: Vec<PageNumber>,
        policy: PolicyKind,
    ) -> Result<(), SimError> {
        let state = SimulationState::new(frames, reference, policy)?;
        let write_bias = WriteBias::new(&self.modified_bits)?;
        info!(
            frames,
            references = state.reference().len(),
            %policy,
            "simulation reset"
        );
        self.state = state;
        self.write_bias = write_bias;
        self.halted = None;
        Ok(())
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Counters of the current run.
    pub fn stats(&self) -> RunStats {
        self.state.stats()
    }

    /// True after a fatal error, until `reset`.
    pub fn is_halted(&self) -> bool {
        self.halted.is_some()
    }

    /// True when the reference string has been fully processed.
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Services the next reference.
    ///
    /// # Returns
    ///
    /// `Step::Access` with the outcome, or `Step::EndOfSequence` (no mutation)
    /// once the cursor has reached the end.
    ///
    /// # Errors
    ///
    /// `SimError::InternalConsistency` if victim selection breaks an
    /// invariant; the simulator then halts and every later call returns
    /// `SimError::Halted` until `reset`.
    pub fn step(&mut self) -> Result<Step, SimError> {
        if let Some(cause) = &self.halted {
            return Err(SimError::Halted(Box::new(cause.clone())));
        }
        let Some(page) = self.state.current_page() else {
            return Ok(Step::EndOfSequence {
                cursor: self.state.cursor,
            });
        };

        match self.access(page) {
            Ok(outcome) => {
                debug!(
                    step = outcome.cursor_after,
                    page = %outcome.page,
                    hit = outcome.was_hit,
                    frame = outcome.frame,
                    evicted = ?outcome.evicted,
                    "access"
                );
                Ok(Step::Access(outcome))
            }
            Err(err) => {
                error!(%page, cursor = self.state.cursor, "simulation halted: {err}");
                self.halted = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Steps until the end of the reference string.
    ///
    /// # Returns
    ///
    /// Every outcome produced, in order.
    ///
    /// # Errors
    ///
    /// The first error returned by `step`.
    pub fn run_to_end(&mut self) -> Result<Vec<StepOutcome>, SimError> {
        let mut outcomes = Vec::with_capacity(self.state.remaining().len());
        while let Step::Access(outcome) = self.step()? {
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    fn access(&mut self, page: PageNumber) -> Result<StepOutcome, SimError> {
        let resident = self.state.page_table.frame_of(page);
        let was_hit = resident.is_some();

        let (frame, evicted) = match resident {
            Some(frame) => {
                let write = self.write_bias.on_hit();
                self.state.page_table.entry_mut(page).touch(write);
                self.state.stats.hits += 1;
                (frame, None)
            }
            None => {
                let (frame, evicted) = match self.state.memory.first_free() {
                    Some(frame) => (frame, None),
                    None => {
                        let frame = self.select_victim(page)?;
                        (frame, Some(self.evict(page, frame)?))
                    }
                };
                let _ = self.state.memory.store(frame, page);
                let write = self.write_bias.on_load();
                self.state.page_table.entry_mut(page).load(frame, write);
                self.state.stats.page_faults += 1;
                (frame, evicted)
            }
        };

        self.state.policy.update(page, !was_hit);
        self.state.cursor += 1;

        Ok(StepOutcome {
            page,
            was_hit,
            evicted,
            frame,
            modified: self
                .state
                .page_table
                .get(page)
                .is_some_and(|entry| entry.modified),
            cursor_after: self.state.cursor,
            finished: self.state.is_finished(),
        })
    }

    /// Asks the policy for a victim frame and checks it lies within memory.
    fn select_victim(&mut self, page: PageNumber) -> Result<FrameIndex, SimError> {
        let state = &mut self.state;
        let frames = state.memory.len();
        let policy = state.policy.kind();
        let query = VictimQuery {
            memory: &state.memory,
            page_table: &state.page_table,
            upcoming: state.reference.get(state.cursor + 1..).unwrap_or_default(),
        };

        let frame = state
            .policy
            .get_victim(&query)
            .map_err(|fault| Self::inconsistency(page, policy, fault))?;
        if frame >= frames {
            return Err(Self::inconsistency(
                page,
                policy,
                ConsistencyFault::FrameOutOfRange { frame, frames },
            ));
        }
        trace!(%page, victim_frame = frame, "victim selected");
        Ok(frame)
    }

    /// Empties `frame` and clears its page's entry.
    ///
    /// # Returns
    ///
    /// The evicted page.
    fn evict(&mut self, page: PageNumber, frame: FrameIndex) -> Result<PageNumber, SimError> {
        let policy = self.state.policy.kind();
        let Some(victim) = self.state.memory.get(frame) else {
            return Err(Self::inconsistency(
                page,
                policy,
                ConsistencyFault::VacantVictimFrame { frame },
            ));
        };
        let mapped = self.state.page_table.frame_of(victim);
        if mapped != Some(frame) {
            return Err(Self::inconsistency(
                page,
                policy,
                ConsistencyFault::ResidencyMismatch {
                    page: victim,
                    frame: mapped,
                    found: mapped.and_then(|f| self.state.memory.get(f)),
                },
            ));
        }

        let _ = self.state.memory.clear(frame);
        if let Some(entry) = self.state.page_table.get_mut(victim) {
            entry.evict();
        }
        self.state.stats.evictions += 1;
        trace!(%victim, frame, "page evicted");
        Ok(victim)
    }

    fn inconsistency(page: PageNumber, policy: PolicyKind, fault: ConsistencyFault) -> SimError {
        SimError::InternalConsistency {
            page,
            policy,
            fault,
        }
    }
}
