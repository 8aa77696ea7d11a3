//! Optimal (OPT / Belady MIN) Replacement Policy.
//!
//! Evicts the resident page whose next reference lies furthest in the future.
//! A page that is never referenced again has infinite distance. The policy
//! keeps no state of its own; it reads the remaining reference string.
//!
//! Ties go to the first page found scanning frames from index 0, so among
//! several never-reused pages the one in the lowest frame is evicted.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `update()`: O(1)
//!   - `get_victim()`: O(F × R) where R is the number of remaining references
//! - **Space Complexity:** O(1)

use super::{ReplacementPolicy, VictimQuery};
use crate::common::{ConsistencyFault, FrameIndex, PageNumber};
use crate::config::PolicyKind;

/// OPT Policy (stateless).
#[derive(Debug, Clone, Copy, Default)]
pub struct OptPolicy;

impl OptPolicy {
    /// Creates an OPT policy.
    pub const fn new() -> Self {
        Self
    }

    /// Offset of the next reference to `page` in `upcoming`, `None` if it never recurs.
    pub fn next_use(page: PageNumber, upcoming: &[PageNumber]) -> Option<usize> {
        upcoming.iter().position(|&p| p == page)
    }
}

impl ReplacementPolicy for OptPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Opt
    }

    fn update(&mut self, _page: PageNumber, _loaded: bool) {}

    /// Picks the resident page with the greatest future distance.
    fn get_victim(&mut self, query: &VictimQuery<'_>) -> Result<FrameIndex, ConsistencyFault> {
        let mut best: Option<(FrameIndex, usize)> = None;

        for (frame, page) in query.memory.resident() {
            let distance = Self::next_use(page, query.upcoming).unwrap_or(usize::MAX);
            // Strict comparison keeps the earliest frame on ties.
            if best.is_none_or(|(_, furthest)| distance > furthest) {
                best = Some((frame, distance));
            }
            if distance == usize::MAX {
                // Cannot be beaten; later ties would lose anyway.
                break;
            }
        }

        best.map(|(frame, _)| frame).ok_or_else(|| query.empty())
    }

    fn order(&self) -> &[PageNumber] {
        &[]
    }
}
