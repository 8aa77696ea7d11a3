//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the page that was loaded earliest, regardless of how
//! recently it was accessed. Hits never reorder the queue.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `update()`: O(F) where F is the number of frames (membership check on load)
//!   - `get_victim()`: O(F)
//! - **Space Complexity:** O(F)
//! - **Worst Case:** Belady's anomaly; adding frames can increase faults.

use super::{ReplacementPolicy, VictimQuery};
use crate::common::{ConsistencyFault, FrameIndex, PageNumber};
use crate::config::PolicyKind;

/// FIFO Policy state.
#[derive(Debug, Clone, Default)]
pub struct FifoPolicy {
    /// Resident pages in load order. Index 0 is the oldest.
    queue: Vec<PageNumber>,
}

impl FifoPolicy {
    /// Creates a FIFO policy for `frames` frames.
    pub fn new(frames: usize) -> Self {
        Self {
            queue: Vec::with_capacity(frames),
        }
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    /// Appends a freshly loaded page to the tail. Hits leave the queue alone.
    fn update(&mut self, page: PageNumber, loaded: bool) {
        if loaded && !self.queue.contains(&page) {
            self.queue.push(page);
        }
    }

    /// Pops the oldest page and returns its frame.
    fn get_victim(&mut self, query: &VictimQuery<'_>) -> Result<FrameIndex, ConsistencyFault> {
        if self.queue.is_empty() {
            return Err(query.empty());
        }
        let victim = self.queue.remove(0);
        query.frame_of(victim)
    }

    fn order(&self) -> &[PageNumber] {
        &self.queue
    }
}
