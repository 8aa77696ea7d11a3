//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the page that has not been accessed for the longest time.
//! It maintains a recency stack: when a page is accessed, it is moved to the
//! top (Most Recently Used position). The bottom of the stack is the victim.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `update()`: O(F) where F is the number of frames
//!   - `get_victim()`: O(1)
//! - **Space Complexity:** O(F)
//! - **Worst Case:** Cyclic scans one page larger than memory (every access faults)

use super::{ReplacementPolicy, VictimQuery};
use crate::common::{ConsistencyFault, FrameIndex, PageNumber};
use crate::config::PolicyKind;

/// LRU Policy state.
#[derive(Debug, Clone, Default)]
pub struct LruPolicy {
    /// Index 0 is MRU, last index is LRU.
    stack: Vec<PageNumber>,
}

impl LruPolicy {
    /// Creates an LRU policy for `frames` frames.
    pub fn new(frames: usize) -> Self {
        Self {
            stack: Vec::with_capacity(frames),
        }
    }
}

impl ReplacementPolicy for LruPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    /// Moves the accessed page to the front of the stack (MRU position).
    ///
    /// The same rule promotes a hit and inserts a newly loaded page.
    fn update(&mut self, page: PageNumber, _loaded: bool) {
        if let Some(pos) = self.stack.iter().position(|&p| p == page) {
            self.stack.remove(pos);
        }
        self.stack.insert(0, page);
    }

    /// Pops the page at the bottom of the stack (LRU position) and returns its frame.
    fn get_victim(&mut self, query: &VictimQuery<'_>) -> Result<FrameIndex, ConsistencyFault> {
        let victim = self.stack.pop().ok_or_else(|| query.empty())?;
        query.frame_of(victim)
    }

    fn order(&self) -> &[PageNumber] {
        &self.stack
    }
}
