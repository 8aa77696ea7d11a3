//! Page Replacement Policies.
//!
//! Implements the algorithms that pick a victim frame when a page fault finds
//! every frame occupied.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out.
//! - `Lru`: Least Recently Used.
//! - `Opt`: Optimal (furthest next use).

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

/// Optimal (Belady) replacement policy.
pub mod opt;

use std::fmt;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use opt::OptPolicy;

use crate::common::{ConsistencyFault, FrameIndex, PageNumber};
use crate::config::PolicyKind;
use crate::memory::{PageTable, PhysicalMemory};

/// Read-only view of the simulation handed to a policy when it must choose a victim.
#[derive(Debug, Clone, Copy)]
pub struct VictimQuery<'a> {
    /// Frame array (full whenever a victim is requested).
    pub memory: &'a PhysicalMemory,
    /// Page table, used to map a victim page back to its frame.
    pub page_table: &'a PageTable,
    /// References after the one being serviced.
    pub upcoming: &'a [PageNumber],
}

impl VictimQuery<'_> {
    /// Resolves a victim page to the frame it occupies.
    pub fn frame_of(&self, page: PageNumber) -> Result<FrameIndex, ConsistencyFault> {
        self.page_table
            .frame_of(page)
            .ok_or(ConsistencyFault::VictimNotResident { page })
    }

    /// Fault reported when the policy has nothing to evict.
    pub fn empty(&self) -> ConsistencyFault {
        ConsistencyFault::EmptyVictimSet {
            frames: self.memory.len(),
        }
    }
}

/// Trait for page replacement policies.
///
/// Defines the interface for maintaining per-policy bookkeeping and selecting victim frames.
pub trait ReplacementPolicy: Send + Sync + fmt::Debug {
    /// Which policy this is.
    fn kind(&self) -> PolicyKind;

    /// Updates the policy state after an access has been classified.
    ///
    /// # Arguments
    ///
    /// * `page` - The page that was accessed.
    /// * `loaded` - `true` when the access faulted and loaded the page.
    fn update(&mut self, page: PageNumber, loaded: bool);

    /// Selects the frame to evict and drops its page from the policy's bookkeeping.
    ///
    /// # Arguments
    ///
    /// * `query` - Snapshot of memory, page table and remaining references.
    ///
    /// # Returns
    ///
    /// The frame index to evict, or the bookkeeping fault that prevented a choice.
    fn get_victim(&mut self, query: &VictimQuery<'_>) -> Result<FrameIndex, ConsistencyFault>;

    /// Resident pages in the policy's eviction order.
    ///
    /// Oldest first for FIFO, most recent first for LRU, empty for OPT.
    fn order(&self) -> &[PageNumber];
}

/// Builds the policy for `kind`, sized for `frames` frames.
pub fn build(kind: PolicyKind, frames: usize) -> Box<dyn ReplacementPolicy> {
    match kind {
        PolicyKind::Fifo => Box::new(FifoPolicy::new(frames)),
        PolicyKind::Lru => Box::new(LruPolicy::new(frames)),
        PolicyKind::Opt => Box::new(OptPolicy::new()),
    }
}
