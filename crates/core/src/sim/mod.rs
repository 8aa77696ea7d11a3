//! Simulation engine and drivers.
//!
//! 1. **State:** [`SimulationState`], the complete data of one run.
//! 2. **Engine:** [`Simulator`], with `reset` and `step`.
//! 3. **Drivers:** timed auto-run with cancellation, random reference strings,
//!    and a three-policy comparison.

/// Policy comparison over one input.
pub mod compare;
/// Timed auto-run with cancellation.
pub mod driver;
/// Random reference string generation.
pub mod generator;
/// Step outcome types.
pub mod outcome;
/// The simulation engine.
pub mod simulator;
/// Simulation state and its accessors.
pub mod state;
/// Modified-bit generator.
pub mod write_bias;

pub use compare::{PolicyReport, compare_policies};
pub use driver::{AutoRunner, CancelToken, RunEnd, RunSummary};
pub use generator::generate_reference;
pub use outcome::{Step, StepOutcome};
pub use simulator::Simulator;
pub use state::SimulationState;
pub use write_bias::WriteBias;
