//! Simulator error definitions.
//!
//! This module defines the error taxonomy of the page replacement engine. It provides:
//! 1. **Configuration Errors:** Rejected inputs detected before any state is built.
//! 2. **Consistency Faults:** Bookkeeping invariant violations found while stepping.
//! 3. **Engine Errors:** The top-level [`SimError`] returned by `reset` and `step`.
//!
//! Reaching the end of the reference string is not an error; see
//! [`Step::EndOfSequence`](crate::sim::Step::EndOfSequence).

use thiserror::Error;

use super::page::{FrameIndex, PageNumber};
use crate::config::PolicyKind;

/// Invalid simulator configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The frame count must be positive.
    #[error("frame count must be positive (got {0})")]
    ZeroFrames(usize),

    /// A write-bias probability lies outside `[0, 1]`.
    #[error("{name} must be within [0, 1] (got {value})")]
    ProbabilityOutOfRange {
        /// Name of the offending setting.
        name: &'static str,
        /// Value supplied.
        value: f64,
    },

    /// A policy name did not match FIFO, LRU or OPT.
    #[error("unknown replacement policy '{0}' (expected FIFO, LRU or OPT)")]
    UnknownPolicy(String),

    /// The JSON configuration could not be parsed.
    #[error("malformed configuration: {0}")]
    Parse(String),
}

/// A violated bookkeeping invariant.
///
/// These never occur during a correct run. Each one names the structure that
/// disagreed with the frame array so the run can be diagnosed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyFault {
    /// Memory is full but the policy had nothing to evict.
    #[error("victim structure is empty while all {frames} frames are occupied")]
    EmptyVictimSet {
        /// Number of frames in memory.
        frames: usize,
    },

    /// The policy picked a page the page table does not place in any frame.
    #[error("victim page {page} is not resident")]
    VictimNotResident {
        /// The chosen victim page.
        page: PageNumber,
    },

    /// The policy picked a frame index outside physical memory.
    #[error("victim frame {frame} is outside [0, {frames})")]
    FrameOutOfRange {
        /// The chosen frame index.
        frame: FrameIndex,
        /// Number of frames in memory.
        frames: usize,
    },

    /// The policy picked a frame that holds no page.
    #[error("victim frame {frame} is empty")]
    VacantVictimFrame {
        /// The chosen frame index.
        frame: FrameIndex,
    },

    /// A present page table entry does not point at a frame holding that page.
    #[error("page {page} is mapped to frame {frame:?}, which holds {found:?}")]
    ResidencyMismatch {
        /// Page whose entry is inconsistent.
        page: PageNumber,
        /// Frame recorded in the page table entry.
        frame: Option<FrameIndex>,
        /// Actual content of that frame.
        found: Option<PageNumber>,
    },

    /// A frame holds a page whose page table entry is not present.
    #[error("frame {frame} holds page {page}, whose page table entry is not present")]
    OrphanFrame {
        /// Occupied frame.
        frame: FrameIndex,
        /// Page found in it.
        page: PageNumber,
    },

    /// Hit and fault counters do not add up to the cursor.
    #[error("{hits} hits + {faults} faults != cursor {cursor}")]
    CounterDrift {
        /// Recorded hits.
        hits: u64,
        /// Recorded page faults.
        faults: u64,
        /// Current cursor.
        cursor: usize,
    },

    /// The FIFO queue or LRU stack does not match the resident set.
    #[error("auxiliary structure {order:?} does not match resident pages {resident:?}")]
    AuxiliaryMismatch {
        /// Pages held by the policy structure.
        order: Vec<PageNumber>,
        /// Pages held by the frame array, sorted.
        resident: Vec<PageNumber>,
    },
}

/// Errors returned by the simulation engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// `reset` was given a configuration the engine cannot run.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// A fatal bookkeeping failure while handling a fault.
    #[error("internal consistency failure at page {page} under {policy}: {fault}")]
    InternalConsistency {
        /// Page being accessed when the failure was detected.
        page: PageNumber,
        /// Active replacement policy.
        policy: PolicyKind,
        /// What went wrong.
        fault: ConsistencyFault,
    },

    /// `step` was called after a fatal error without an intervening `reset`.
    #[error("simulation halted after an earlier failure; reset required ({0})")]
    Halted(Box<SimError>),
}
