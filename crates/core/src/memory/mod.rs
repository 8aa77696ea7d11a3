//! Simulated physical memory and page table.
//!
//! 1. **Frames:** A fixed array of slots, each empty or holding one resident page.
//! 2. **Page Table:** Per-page present, referenced and modified bits plus the owning frame.

/// Physical frame array.
pub mod frames;

/// Page table and its entries.
pub mod page_table;

pub use frames::PhysicalMemory;
pub use page_table::{PageTable, PageTableEntry};
