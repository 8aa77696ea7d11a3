//! Side-by-side policy comparison.
//!
//! Runs FIFO, LRU and OPT over the same frames and reference string. By
//! Belady's result OPT never faults more than either of the others.

use serde::Serialize;

use super::simulator::Simulator;
use crate::common::{PageNumber, SimError};
use crate::config::{ModifiedBitsConfig, PolicyKind};
use crate::stats::RunStats;

/// Result of running one policy to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyReport {
    /// Policy that was run.
    pub policy: PolicyKind,
    /// Final counters.
    pub stats: RunStats,
    /// Frame contents at the end of the run.
    pub final_frames: Vec<Option<PageNumber>>,
}

/// Runs every policy over `reference` with `frames` frames.
///
/// The modified bit is disabled so the runs are deterministic.
///
/// # Errors
///
/// `SimError::InvalidConfiguration` when `frames == 0`.
pub fn compare_policies(
    frames: usize,
    reference: &[PageNumber],
) -> Result<Vec<PolicyReport>, SimError> {
    PolicyKind::ALL
        .iter()
        .map(|&policy| -> Result<PolicyReport, SimError> {
            let mut sim = Simulator::with_modified_bits(
                frames,
                reference.to_vec(),
                policy,
                ModifiedBitsConfig::never(),
            )?;
            let _ = sim.run_to_end()?;
            Ok(PolicyReport {
                policy,
                stats: sim.stats(),
                final_frames: sim.state().frames().to_vec(),
            })
        })
        .collect()
}

/// Report with the fewest page faults; the earliest wins a tie.
pub fn fewest_faults(reports: &[PolicyReport]) -> Option<&PolicyReport> {
    reports.iter().reduce(|best, report| {
        if report.stats.page_faults < best.stats.page_faults {
            report
        } else {
            best
        }
    })
}
