//! Replacement Policy Tests.
//!
//! Exercises FIFO, LRU and OPT in isolation. Each test builds a frame array
//! and page table by hand, drives `update`, and asks for a victim through a
//! `VictimQuery`.

use pagesim_core::PageNumber;
use pagesim_core::common::ConsistencyFault;
use pagesim_core::config::PolicyKind;
use pagesim_core::memory::{PageTable, PhysicalMemory};
use pagesim_core::policies::{
    self, FifoPolicy, LruPolicy, OptPolicy, ReplacementPolicy, VictimQuery,
};

use crate::common::pages;

/// Loads `raw[i]` into frame `i`.
fn fill(raw: &[u32]) -> (PhysicalMemory, PageTable) {
    let mut memory = PhysicalMemory::new(raw.len());
    let mut table = PageTable::new();
    for (frame, page) in pages(raw).into_iter().enumerate() {
        let _ = memory.store(frame, page);
        table.entry_mut(page).load(frame, false);
    }
    (memory, table)
}

fn query<'a>(
    memory: &'a PhysicalMemory,
    page_table: &'a PageTable,
    upcoming: &'a [PageNumber],
) -> VictimQuery<'a> {
    VictimQuery {
        memory,
        page_table,
        upcoming,
    }
}

// ══════════════════════════════════════════════════════════
// 1. FIFO
// ══════════════════════════════════════════════════════════

#[test]
fn fifo_evicts_oldest_load() {
    let (memory, table) = fill(&[10, 20, 30]);
    let mut policy = FifoPolicy::new(3);
    for page in pages(&[10, 20, 30]) {
        policy.update(page, true);
    }

    assert_eq!(policy.get_victim(&query(&memory, &table, &[])), Ok(0));
    assert_eq!(policy.order(), pages(&[20, 30]).as_slice());
}

/// Hits do not move a page in the queue.
#[test]
fn fifo_ignores_hits() {
    let (memory, table) = fill(&[10, 20]);
    let mut policy = FifoPolicy::new(2);
    policy.update(PageNumber(10), true);
    policy.update(PageNumber(20), true);
    policy.update(PageNumber(10), false);
    policy.update(PageNumber(10), false);

    assert_eq!(policy.order(), pages(&[10, 20]).as_slice());
    assert_eq!(policy.get_victim(&query(&memory, &table, &[])), Ok(0));
}

#[test]
fn fifo_empty_queue_is_a_fault() {
    let (memory, table) = fill(&[1, 2]);
    let mut policy = FifoPolicy::new(2);

    assert_eq!(
        policy.get_victim(&query(&memory, &table, &[])),
        Err(ConsistencyFault::EmptyVictimSet { frames: 2 })
    );
}

#[test]
fn fifo_victim_missing_from_page_table() {
    let (memory, table) = fill(&[1, 2]);
    let mut policy = FifoPolicy::new(2);
    policy.update(PageNumber(99), true);

    assert_eq!(
        policy.get_victim(&query(&memory, &table, &[])),
        Err(ConsistencyFault::VictimNotResident {
            page: PageNumber(99)
        })
    );
}

// ══════════════════════════════════════════════════════════
// 2. LRU
// ══════════════════════════════════════════════════════════

#[test]
fn lru_evicts_least_recent() {
    let (memory, table) = fill(&[1, 2, 3]);
    let mut policy = LruPolicy::new(3);
    for page in pages(&[1, 2, 3]) {
        policy.update(page, true);
    }
    // Stack: [3, 2, 1]. LRU = 1 in frame 0.
    assert_eq!(policy.order(), pages(&[3, 2, 1]).as_slice());
    assert_eq!(policy.get_victim(&query(&memory, &table, &[])), Ok(0));
}

/// A hit promotes the page to the most-recent end.
#[test]
fn lru_hit_promotes_page() {
    let (memory, table) = fill(&[1, 2, 3]);
    let mut policy = LruPolicy::new(3);
    for page in pages(&[1, 2, 3]) {
        policy.update(page, true);
    }
    policy.update(PageNumber(1), false);
    // Stack: [1, 3, 2]. LRU = 2 in frame 1.
    assert_eq!(policy.order(), pages(&[1, 3, 2]).as_slice());
    assert_eq!(policy.get_victim(&query(&memory, &table, &[])), Ok(1));
    assert_eq!(policy.order(), pages(&[1, 3]).as_slice());
}

#[test]
fn lru_repeated_hit_keeps_single_entry() {
    let mut policy = LruPolicy::new(2);
    policy.update(PageNumber(4), true);
    policy.update(PageNumber(4), false);
    policy.update(PageNumber(4), false);

    assert_eq!(policy.order(), &[PageNumber(4)]);
}

#[test]
fn lru_empty_stack_is_a_fault() {
    let (memory, table) = fill(&[1]);
    let mut policy = LruPolicy::new(1);

    assert_eq!(
        policy.get_victim(&query(&memory, &table, &[])),
        Err(ConsistencyFault::EmptyVictimSet { frames: 1 })
    );
}

// ══════════════════════════════════════════════════════════
// 3. OPT
// ══════════════════════════════════════════════════════════

#[test]
fn opt_next_use_distance() {
    let upcoming = pages(&[5, 6, 5, 7]);

    assert_eq!(OptPolicy::next_use(PageNumber(5), &upcoming), Some(0));
    assert_eq!(OptPolicy::next_use(PageNumber(7), &upcoming), Some(3));
    assert_eq!(OptPolicy::next_use(PageNumber(8), &upcoming), None);
}

#[test]
fn opt_evicts_furthest_next_use() {
    let (memory, table) = fill(&[1, 2, 3]);
    let upcoming = pages(&[2, 1, 2, 3]);
    let mut policy = OptPolicy::new();

    assert_eq!(policy.get_victim(&query(&memory, &table, &upcoming)), Ok(2));
}

/// A page never used again beats any page used later.
#[test]
fn opt_prefers_never_used_page() {
    let (memory, table) = fill(&[1, 2, 3]);
    let upcoming = pages(&[1, 3, 3, 3, 1]);
    let mut policy = OptPolicy::new();

    assert_eq!(policy.get_victim(&query(&memory, &table, &upcoming)), Ok(1));
}

/// Among pages never used again the lowest frame wins.
#[test]
fn opt_tie_breaks_on_lowest_frame() {
    let (memory, table) = fill(&[7, 8, 9]);
    let upcoming = pages(&[8]);
    let mut policy = OptPolicy::new();

    assert_eq!(policy.get_victim(&query(&memory, &table, &upcoming)), Ok(0));
    assert_eq!(policy.get_victim(&query(&memory, &table, &[])), Ok(0));
}

#[test]
fn opt_has_no_auxiliary_structure() {
    let mut policy = OptPolicy::new();
    policy.update(PageNumber(1), true);

    assert!(policy.order().is_empty());
    assert_eq!(policy.kind(), PolicyKind::Opt);
}

#[test]
fn opt_empty_memory_is_a_fault() {
    let memory = PhysicalMemory::new(2);
    let table = PageTable::new();
    let mut policy = OptPolicy::new();

    assert_eq!(
        policy.get_victim(&query(&memory, &table, &[])),
        Err(ConsistencyFault::EmptyVictimSet { frames: 2 })
    );
}

// ══════════════════════════════════════════════════════════
// 4. Construction
// ══════════════════════════════════════════════════════════

#[test]
fn build_returns_requested_kind() {
    for kind in PolicyKind::ALL {
        let policy = policies::build(kind, 4);
        assert_eq!(policy.kind(), kind);
        assert!(policy.order().is_empty());
    }
}
