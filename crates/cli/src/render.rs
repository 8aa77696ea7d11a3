//! Plain-text rendering of simulator state for the terminal.

use std::fmt::Write as _;

use pagesim_core::SimulationState;
use pagesim_core::sim::PolicyReport;

/// One line per frame: `Frame 0: Page 3` or `Frame 1: Empty`.
pub fn frame_table(state: &SimulationState) -> String {
    let mut out = String::new();
    for (frame, slot) in state.frames().iter().enumerate() {
        let _ = match slot {
            Some(page) => writeln!(out, "  Frame {frame}: Page {page}"),
            None => writeln!(out, "  Frame {frame}: Empty"),
        };
    }
    out
}

/// Compact single-line frame view, e.g. `[1] [3] [ ]`.
pub fn frame_strip(state: &SimulationState) -> String {
    state
        .frames()
        .iter()
        .map(|slot| slot.map_or_else(|| "[ ]".to_string(), |page| format!("[{page}]")))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Page table with present, referenced and modified bits.
pub fn page_table(state: &SimulationState) -> String {
    let mut out = String::from("  page  frame  P R M\n");
    for (page, entry) in state.page_table().iter() {
        let frame = entry
            .frame
            .map_or_else(|| "-".to_string(), |frame| frame.to_string());
        let _ = writeln!(
            out,
            "  {:<5} {:<6} {} {} {}",
            page.to_string(),
            frame,
            u8::from(entry.present),
            u8::from(entry.referenced),
            u8::from(entry.modified)
        );
    }
    out
}

/// The policy's auxiliary structure, if it keeps one.
pub fn auxiliary(state: &SimulationState) -> Option<String> {
    let join = |pages: &[pagesim_core::PageNumber]| {
        pages
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    if let Some(queue) = state.fifo_queue() {
        return Some(format!("FIFO queue (oldest -> newest): [{}]", join(queue)));
    }
    state
        .lru_stack()
        .map(|stack| format!("LRU stack (most -> least recent): [{}]", join(stack)))
}

/// Comparison table: one row per policy.
pub fn comparison(reports: &[PolicyReport]) -> String {
    let mut out = String::from("  policy  faults  hits  evictions  hit_rate\n");
    for report in reports {
        let _ = writeln!(
            out,
            "  {:<7} {:<7} {:<5} {:<10} {:.2}%",
            report.policy.name(),
            report.stats.page_faults,
            report.stats.hits,
            report.stats.evictions,
            report.stats.hit_ratio() * 100.0
        );
    }
    out
}
