//! Run Statistics Tests.

use pagesim_core::PolicyKind;
use pagesim_core::stats::{RunStats, STATS_SECTIONS};

use crate::common::{BELADY, run};

#[test]
fn ratios_are_zero_before_any_access() {
    let stats = RunStats::default();

    assert_eq!(stats.accesses(), 0);
    assert!(stats.hit_ratio().abs() < f64::EPSILON);
    assert!(stats.fault_ratio().abs() < f64::EPSILON);
}

#[test]
fn ratios_sum_to_one() {
    let stats = RunStats {
        hits: 3,
        page_faults: 9,
        evictions: 6,
    };

    assert_eq!(stats.accesses(), 12);
    assert_eq!(stats.cold_faults(), 3);
    assert!((stats.hit_ratio() - 0.25).abs() < 1e-12);
    assert!((stats.hit_ratio() + stats.fault_ratio() - 1.0).abs() < 1e-12);
}

/// Cold faults equal the frame count once memory has filled.
#[test]
fn run_counts_cold_and_evicting_faults() {
    let stats = run(3, BELADY, PolicyKind::Fifo).stats();

    assert_eq!(stats.cold_faults(), 3);
    assert_eq!(stats.evictions, stats.page_faults - 3);
}

#[test]
fn render_includes_requested_sections_only() {
    let stats = RunStats {
        hits: 1,
        page_faults: 3,
        evictions: 1,
    };

    let all = stats.render_sections(&[]);
    assert!(all.contains("PAGE REPLACEMENT STATISTICS"));
    assert!(all.contains("hits                     1 (25.00%)"));
    assert!(all.contains("faults.evicting        1"));

    let summary = stats.render_sections(&["summary".to_string()]);
    assert!(summary.contains("page_faults              3 (75.00%)"));
    assert!(!summary.contains("FAULT BREAKDOWN"));

    assert_eq!(STATS_SECTIONS, &["summary", "paging"]);
}

#[test]
fn empty_run_renders_zero_percent() {
    let text = RunStats::default().render_sections(&[]);

    assert!(text.contains("hits                     0 (0.00%)"));
}
