//! Page and frame identifiers.
//!
//! This module defines the strong types used to name simulated memory. It provides:
//! 1. **Type Safety:** Keeps page numbers and frame indices from being mixed up.
//! 2. **Conversions:** Cheap construction from raw integers and back.
//! 3. **Display:** Compact rendering for event logs and frame tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a physical frame, in `[0, frame_count)`.
pub type FrameIndex = usize;

/// A page number in the simulated address space.
///
/// Page numbers are non-negative; the reference string is a sequence of them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageNumber(pub u32);

impl PageNumber {
    /// Creates a page number from a raw value.
    #[inline(always)]
    pub const fn new(page: u32) -> Self {
        Self(page)
    }

    /// Returns the raw page number.
    #[inline(always)]
    pub const fn val(self) -> u32 {
        self.0
    }

    /// Builds a reference string from raw page numbers.
    ///
    /// # Arguments
    ///
    /// * `raw` - Page numbers in access order.
    ///
    /// # Returns
    ///
    /// The same sequence as `PageNumber`s.
    pub fn sequence(raw: &[u32]) -> Vec<Self> {
        raw.iter().copied().map(Self).collect()
    }
}

impl From<u32> for PageNumber {
    fn from(page: u32) -> Self {
        Self(page)
    }
}

impl From<PageNumber> for u32 {
    fn from(page: PageNumber) -> Self {
        page.0
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
