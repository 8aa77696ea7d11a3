//! Page table.
//!
//! One entry exists for every page referenced since the last reset. Entries are
//! never removed during a run; eviction only clears their bits.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::common::{FrameIndex, PageNumber};

/// Page table entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageTableEntry {
    /// Frame holding the page while resident.
    pub frame: Option<FrameIndex>,
    /// Page currently occupies `frame`.
    pub present: bool,
    /// Page was accessed since it was loaded.
    pub referenced: bool,
    /// Page was (notionally) written since it was loaded.
    pub modified: bool,
}

impl PageTableEntry {
    /// True when the entry maps a resident page.
    #[inline]
    pub fn is_resident(&self) -> bool {
        self.present && self.frame.is_some()
    }

    /// Marks the page as loaded into `frame`.
    pub fn load(&mut self, frame: FrameIndex, modified: bool) {
        self.frame = Some(frame);
        self.present = true;
        self.referenced = true;
        self.modified = modified;
    }

    /// Records a hit; `write` sets the modified bit, it never clears it.
    pub fn touch(&mut self, write: bool) {
        self.referenced = true;
        self.modified |= write;
    }

    /// Clears every field after eviction.
    pub fn evict(&mut self) {
        *self = Self::default();
    }
}

/// Page table keyed by page number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageTable {
    entries: BTreeMap<PageNumber, PageTableEntry>,
}

impl PageTable {
    /// Creates an empty page table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry for `page`, if it has ever been referenced.
    pub fn get(&self, page: PageNumber) -> Option<&PageTableEntry> {
        self.entries.get(&page)
    }

    /// Entry for `page`, created on first reference.
    pub fn entry_mut(&mut self, page: PageNumber) -> &mut PageTableEntry {
        self.entries.entry(page).or_default()
    }

    /// Mutable entry for `page` only if it exists.
    pub fn get_mut(&mut self, page: PageNumber) -> Option<&mut PageTableEntry> {
        self.entries.get_mut(&page)
    }

    /// True when `page` is present in memory.
    pub fn is_resident(&self, page: PageNumber) -> bool {
        self.get(page).is_some_and(|entry| entry.present)
    }

    /// Frame holding `page`, if resident.
    pub fn frame_of(&self, page: PageNumber) -> Option<FrameIndex> {
        self.get(page)
            .filter(|entry| entry.present)
            .and_then(|entry| entry.frame)
    }

    /// Number of pages referenced so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been referenced.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in page-number order.
    pub fn iter(&self) -> impl Iterator<Item = (PageNumber, &PageTableEntry)> + '_ {
        self.entries.iter().map(|(page, entry)| (*page, entry))
    }

    /// Pages with the present bit set, in page-number order.
    pub fn resident_pages(&self) -> impl Iterator<Item = PageNumber> + '_ {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.present)
            .map(|(page, _)| *page)
    }
}
