//! Virtual memory page replacement simulator library.
//!
//! This crate implements an educational, step-by-step page replacement engine with the following:
//! 1. **Memory:** A fixed frame array and a page table with present, referenced and modified bits.
//! 2. **Policies:** FIFO, LRU and OPT victim selection behind one trait.
//! 3. **Engine:** `reset` and `step`, each an atomic transition of the simulation state.
//! 4. **Drivers:** Timed auto-run with cancellation, random reference strings, policy comparison.
//! 5. **Support:** Configuration, statistics and a typed error taxonomy.
//!
//! ```
//! use pagesim_core::{PageNumber, PolicyKind, Simulator};
//!
//! let reference = PageNumber::sequence(&[1, 2, 1, 3]);
//! let mut sim = Simulator::new(2, reference, PolicyKind::Lru).unwrap();
//! sim.run_to_end().unwrap();
//! assert_eq!(sim.stats().hits, 1);
//! assert_eq!(sim.stats().page_faults, 3);
//! ```

/// Common types (page numbers, frame indices, errors).
pub mod common;
/// Simulator configuration (defaults, enums, run configuration).
pub mod config;
/// Frame array and page table.
pub mod memory;
/// Replacement policies (FIFO, LRU, OPT).
pub mod policies;
/// Simulation state, engine and drivers.
pub mod sim;
/// Run statistics and reporting.
pub mod stats;

/// Page identifier and engine error.
pub use crate::common::{PageNumber, SimError};
/// Root configuration and policy selector.
pub use crate::config::{PolicyKind, SimConfig};
/// Engine and state types.
pub use crate::sim::{SimulationState, Simulator, Step, StepOutcome};
/// Run counters.
pub use crate::stats::RunStats;
