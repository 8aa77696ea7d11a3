//! Simulation statistics collection and reporting.
//!
//! This module tracks the counters of a page replacement run. It provides:
//! 1. **Counters:** Hits, page faults and evictions.
//! 2. **Derived metrics:** Accesses, hit ratio, fault ratio and cold (compulsory) faults.
//! 3. **Reporting:** A sectioned plain-text report in the style of a simulator dump.

use std::fmt::Write as _;

use serde::Serialize;

/// Counters for one simulation run.
///
/// All counters are monotonically non-decreasing within a run and reset to
/// zero by `Simulator::reset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Accesses that found the page resident.
    pub hits: u64,
    /// Accesses that had to load the page.
    pub page_faults: u64,
    /// Faults that displaced a resident page.
    pub evictions: u64,
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"paging"`.
/// Pass an empty slice to `render_sections` to include all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "paging"];

impl RunStats {
    /// Total accesses processed (`hits + page_faults`).
    pub const fn accesses(&self) -> u64 {
        self.hits + self.page_faults
    }

    /// Faults that filled an empty frame rather than evicting.
    pub const fn cold_faults(&self) -> u64 {
        self.page_faults.saturating_sub(self.evictions)
    }

    /// Fraction of accesses that hit, `0.0` before the first access.
    pub fn hit_ratio(&self) -> f64 {
        match self.accesses() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }

    /// Fraction of accesses that faulted, `0.0` before the first access.
    pub fn fault_ratio(&self) -> f64 {
        match self.accesses() {
            0 => 0.0,
            total => self.page_faults as f64 / total as f64,
        }
    }

    /// Renders the requested statistics sections.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an
    /// empty slice to render everything. Ratios are reported as `0.00%` when
    /// no access has been made, so nothing divides by zero.
    pub fn render_sections(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "PAGE REPLACEMENT STATISTICS");
        let _ = writeln!(out, "==========================================================");
        if want("summary") {
            let _ = writeln!(out, "accesses                 {}", self.accesses());
            let _ = writeln!(
                out,
                "hits                     {} ({:.2}%)",
                self.hits,
                self.hit_ratio() * 100.0
            );
            let _ = writeln!(
                out,
                "page_faults              {} ({:.2}%)",
                self.page_faults,
                self.fault_ratio() * 100.0
            );
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("paging") {
            let _ = writeln!(out, "FAULT BREAKDOWN");
            let _ = writeln!(out, "  faults.cold            {}", self.cold_faults());
            let _ = writeln!(out, "  faults.evicting        {}", self.evictions);
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        out
    }

    /// Prints only the requested statistics sections to stdout.
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.render_sections(sections));
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
