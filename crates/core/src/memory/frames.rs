//! Physical frame array.
//!
//! Frames are scanned left to right, so the lowest free index is always filled
//! first and the OPT tie-break (first resident page in frame order) is stable.

use serde::Serialize;

use crate::common::{FrameIndex, PageNumber};

/// Fixed-size array of physical frames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhysicalMemory {
    slots: Vec<Option<PageNumber>>,
}

impl PhysicalMemory {
    /// Creates `frames` empty frames.
    pub fn new(frames: usize) -> Self {
        Self {
            slots: vec![None; frames],
        }
    }

    /// Number of frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when memory has no frames at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Page held by `frame`, if any. Out-of-range frames read as empty.
    #[inline]
    pub fn get(&self, frame: FrameIndex) -> Option<PageNumber> {
        self.slots.get(frame).copied().flatten()
    }

    /// Lowest-index empty frame.
    pub fn first_free(&self) -> Option<FrameIndex> {
        self.slots.iter().position(Option::is_none)
    }

    /// True when every frame is occupied.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of occupied frames.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Places `page` in `frame`, returning the previous occupant.
    ///
    /// Callers check `frame < len()` first; an out-of-range store is ignored
    /// and returns `None`.
    pub fn store(&mut self, frame: FrameIndex, page: PageNumber) -> Option<PageNumber> {
        self.slots.get_mut(frame).and_then(|slot| slot.replace(page))
    }

    /// Empties `frame`, returning what it held.
    pub fn clear(&mut self, frame: FrameIndex) -> Option<PageNumber> {
        self.slots.get_mut(frame).and_then(Option::take)
    }

    /// Raw slot contents in frame order.
    pub fn slots(&self) -> &[Option<PageNumber>] {
        &self.slots
    }

    /// Occupied frames as `(frame, page)` pairs in frame order.
    pub fn resident(&self) -> impl Iterator<Item = (FrameIndex, PageNumber)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(frame, slot)| slot.map(|page| (frame, page)))
    }
}
