//! Simulation state.
//!
//! [`SimulationState`] is the complete, self-contained snapshot of one run:
//! frame array, page table, the policy with its auxiliary structure, the
//! reference string, the cursor and the counters. It is built by a reset and
//! mutated only by [`Simulator::step`](super::Simulator::step). Everything
//! exposed here is read-only.

use crate::common::{ConfigError, ConsistencyFault, PageNumber, SimError};
use crate::config::PolicyKind;
use crate::memory::{PageTable, PageTableEntry, PhysicalMemory};
use crate::policies::{self, ReplacementPolicy};
use crate::stats::RunStats;

/// All mutable data of one simulation run.
#[derive(Debug)]
pub struct SimulationState {
    pub(crate) memory: PhysicalMemory,
    pub(crate) page_table: PageTable,
    pub(crate) policy: Box<dyn ReplacementPolicy>,
    pub(crate) reference: Vec<PageNumber>,
    pub(crate) cursor: usize,
    pub(crate) stats: RunStats,
}

impl SimulationState {
    /// Builds a fresh state: empty frames, empty page table, cursor 0, zero counters.
    ///
    /// # Arguments
    ///
    /// * `frames` - Number of physical frames; must be positive.
    /// * `reference` - Page reference string; may be empty.
    /// * `policy` - Replacement policy to use.
    ///
    /// # Errors
    ///
    /// `SimError::InvalidConfiguration` when `frames == 0`.
    pub fn new(
        frames: usize,
        reference: Vec<PageNumber>,
        policy: PolicyKind,
    ) -> Result<Self, SimError> {
        Self::with_policy(frames, reference, policies::build(policy, frames))
    }

    /// Builds a fresh state around a caller-supplied policy implementation.
    ///
    /// # Errors
    ///
    /// `SimError::InvalidConfiguration` when `frames == 0`.
    pub fn with_policy(
        frames: usize,
        reference: Vec<PageNumber>,
        policy: Box<dyn ReplacementPolicy>,
    ) -> Result<Self, SimError> {
        if frames == 0 {
            return Err(ConfigError::ZeroFrames(frames).into());
        }
        Ok(Self {
            memory: PhysicalMemory::new(frames),
            page_table: PageTable::new(),
            policy,
            reference,
            cursor: 0,
            stats: RunStats::default(),
        })
    }

    /// Number of physical frames.
    pub fn frame_count(&self) -> usize {
        self.memory.len()
    }

    /// Frame contents in frame order.
    pub fn frames(&self) -> &[Option<PageNumber>] {
        self.memory.slots()
    }

    /// The frame array.
    pub fn memory(&self) -> &PhysicalMemory {
        &self.memory
    }

    /// The page table.
    pub fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    /// Page table entry for `page`, if it has been referenced.
    pub fn entry(&self, page: PageNumber) -> Option<&PageTableEntry> {
        self.page_table.get(page)
    }

    /// Active replacement policy.
    pub fn policy(&self) -> PolicyKind {
        self.policy.kind()
    }

    /// FIFO queue, oldest first. `None` unless the policy is FIFO.
    pub fn fifo_queue(&self) -> Option<&[PageNumber]> {
        (self.policy.kind() == PolicyKind::Fifo).then(|| self.policy.order())
    }

    /// LRU stack, most recent first. `None` unless the policy is LRU.
    pub fn lru_stack(&self) -> Option<&[PageNumber]> {
        (self.policy.kind() == PolicyKind::Lru).then(|| self.policy.order())
    }

    /// The full reference string.
    pub fn reference(&self) -> &[PageNumber] {
        &self.reference
    }

    /// Index of the next reference to process.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Page the next step will access.
    pub fn current_page(&self) -> Option<PageNumber> {
        self.reference.get(self.cursor).copied()
    }

    /// References not yet processed.
    pub fn remaining(&self) -> &[PageNumber] {
        self.reference.get(self.cursor..).unwrap_or_default()
    }

    /// True once the cursor has reached the end of the reference string.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.reference.len()
    }

    /// Hit count.
    pub fn hits(&self) -> u64 {
        self.stats.hits
    }

    /// Page fault count.
    pub fn page_faults(&self) -> u64 {
        self.stats.page_faults
    }

    /// All counters.
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Checks the bookkeeping invariants.
    ///
    /// 1. Every present page table entry points at a frame holding that page.
    /// 2. Every occupied frame belongs to a present entry.
    /// 3. `hits + page_faults == cursor`.
    /// 4. The FIFO queue / LRU stack holds exactly the resident pages.
    ///
    /// # Returns
    ///
    /// The first violation found, if any.
    pub fn verify_invariants(&self) -> Result<(), ConsistencyFault> {
        for (page, entry) in self.page_table.iter() {
            if !entry.present {
                continue;
            }
            let found = entry.frame.and_then(|frame| self.memory.get(frame));
            if found != Some(page) {
                return Err(ConsistencyFault::ResidencyMismatch {
                    page,
                    frame: entry.frame,
                    found,
                });
            }
        }

        for (frame, page) in self.memory.resident() {
            if self.page_table.frame_of(page) != Some(frame) {
                return Err(ConsistencyFault::OrphanFrame { frame, page });
            }
        }

        if self.stats.accesses() != self.cursor as u64 {
            return Err(ConsistencyFault::CounterDrift {
                hits: self.stats.hits,
                faults: self.stats.page_faults,
                cursor: self.cursor,
            });
        }

        if self.policy.kind() != PolicyKind::Opt {
            let mut order = self.policy.order().to_vec();
            let mut resident: Vec<PageNumber> = self.memory.resident().map(|(_, p)| p).collect();
            order.sort_unstable();
            resident.sort_unstable();
            if order != resident {
                return Err(ConsistencyFault::AuxiliaryMismatch { order, resident });
            }
        }

        Ok(())
    }
}
