//! Engine Error Tests.
//!
//! Invalid configurations are rejected without touching state. Broken
//! policies surface as `InternalConsistency` and halt the simulator until the
//! next `reset`.

use pagesim_core::common::{ConfigError, ConsistencyFault, FrameIndex};
use pagesim_core::config::{ModifiedBitsConfig, PolicyKind};
use pagesim_core::policies::{ReplacementPolicy, VictimQuery};
use pagesim_core::sim::SimulationState;
use pagesim_core::{PageNumber, SimError, Simulator, Step};

use crate::common::{deterministic, frames, pages};

/// Always names a frame past the end of memory.
#[derive(Debug)]
struct OutOfRange;

impl ReplacementPolicy for OutOfRange {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn update(&mut self, _page: PageNumber, _loaded: bool) {}

    fn get_victim(&mut self, _query: &VictimQuery<'_>) -> Result<FrameIndex, ConsistencyFault> {
        Ok(99)
    }

    fn order(&self) -> &[PageNumber] {
        &[]
    }
}

/// Never has anything to evict.
#[derive(Debug)]
struct Forgetful;

impl ReplacementPolicy for Forgetful {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn update(&mut self, _page: PageNumber, _loaded: bool) {}

    fn get_victim(&mut self, query: &VictimQuery<'_>) -> Result<FrameIndex, ConsistencyFault> {
        Err(query.empty())
    }

    fn order(&self) -> &[PageNumber] {
        &[]
    }
}

fn broken(policy: Box<dyn ReplacementPolicy>, raw: &[u32]) -> Simulator {
    Simulator::with_policy(1, pages(raw), policy, ModifiedBitsConfig::never()).unwrap()
}

// ══════════════════════════════════════════════════════════
// 1. Invalid configuration
// ══════════════════════════════════════════════════════════

#[test]
fn zero_frames_is_rejected() {
    let err = Simulator::new(0, pages(&[1]), PolicyKind::Fifo).unwrap_err();

    assert_eq!(
        err,
        SimError::InvalidConfiguration(ConfigError::ZeroFrames(0))
    );
}

#[test]
fn state_rejects_zero_frames() {
    assert!(SimulationState::new(0, Vec::new(), PolicyKind::Opt).is_err());
}

#[test]
fn bad_probability_is_rejected() {
    let bits = ModifiedBitsConfig {
        load_probability: 1.5,
        ..ModifiedBitsConfig::default()
    };
    let err = Simulator::with_modified_bits(2, Vec::new(), PolicyKind::Lru, bits).unwrap_err();

    assert_eq!(
        err,
        SimError::InvalidConfiguration(ConfigError::ProbabilityOutOfRange {
            name: "load_probability",
            value: 1.5,
        })
    );
}

/// A failed reset leaves the previous run exactly as it was.
#[test]
fn failed_reset_keeps_previous_state() {
    let mut sim = deterministic(2, &[1, 2, 3], PolicyKind::Fifo);
    let _ = sim.step().unwrap();
    let before = frames(&sim);

    assert!(sim.reset(0, pages(&[7]), PolicyKind::Lru).is_err());

    assert_eq!(frames(&sim), before);
    assert_eq!(sim.state().cursor(), 1);
    assert_eq!(sim.state().policy(), PolicyKind::Fifo);
    assert!(matches!(sim.step(), Ok(Step::Access(_))));
}

// ══════════════════════════════════════════════════════════
// 2. Consistency failures
// ══════════════════════════════════════════════════════════

#[test]
fn out_of_range_victim_is_internal_consistency() {
    let mut sim = broken(Box::new(OutOfRange), &[1, 2]);
    let _ = sim.step().unwrap();

    assert_eq!(
        sim.step(),
        Err(SimError::InternalConsistency {
            page: PageNumber(2),
            policy: PolicyKind::Fifo,
            fault: ConsistencyFault::FrameOutOfRange {
                frame: 99,
                frames: 1,
            },
        })
    );
    assert!(sim.is_halted());
}

#[test]
fn empty_victim_set_is_internal_consistency() {
    let mut sim = broken(Box::new(Forgetful), &[1, 2]);
    let _ = sim.step().unwrap();

    let err = sim.step().unwrap_err();
    assert!(matches!(
        err,
        SimError::InternalConsistency {
            fault: ConsistencyFault::EmptyVictimSet { frames: 1 },
            ..
        }
    ));
}

/// After a fatal error every step reports the halt and changes nothing.
#[test]
fn halted_simulator_refuses_to_step() {
    let mut sim = broken(Box::new(OutOfRange), &[1, 2, 3]);
    let _ = sim.step().unwrap();
    let cause = sim.step().unwrap_err();
    let cursor = sim.state().cursor();

    for _ in 0..2 {
        assert_eq!(sim.step(), Err(SimError::Halted(Box::new(cause.clone()))));
    }
    assert_eq!(sim.state().cursor(), cursor);
}

#[test]
fn reset_clears_halt() {
    let mut sim = broken(Box::new(OutOfRange), &[1, 2]);
    let _ = sim.step().unwrap();
    assert!(sim.step().is_err());

    sim.reset(2, pages(&[1, 2, 1]), PolicyKind::Lru).unwrap();

    assert!(!sim.is_halted());
    let outcomes = sim.run_to_end().unwrap();
    assert_eq!(outcomes.len(), 3);
    assert_eq!(sim.stats().hits, 1);
}

// ══════════════════════════════════════════════════════════
// 3. Invariant checker
// ══════════════════════════════════════════════════════════

#[test]
fn healthy_run_passes_invariants() {
    let mut sim = deterministic(3, &[1, 2, 3, 4, 1, 2, 5], PolicyKind::Fifo);
    while let Step::Access(_) = sim.step().unwrap() {
        assert_eq!(sim.state().verify_invariants(), Ok(()));
    }
}

/// A policy that tracks nothing disagrees with the resident set.
#[test]
fn verifier_flags_auxiliary_mismatch() {
    let mut sim = broken(Box::new(OutOfRange), &[4]);
    let _ = sim.step().unwrap();

    assert_eq!(
        sim.state().verify_invariants(),
        Err(ConsistencyFault::AuxiliaryMismatch {
            order: Vec::new(),
            resident: vec![PageNumber(4)],
        })
    );
}

#[test]
fn error_messages_name_the_failure() {
    let err = SimError::InternalConsistency {
        page: PageNumber(3),
        policy: PolicyKind::Opt,
        fault: ConsistencyFault::VacantVictimFrame { frame: 1 },
    };

    assert_eq!(
        err.to_string(),
        "internal consistency failure at page 3 under OPT: victim frame 1 is empty"
    );
    assert_eq!(
        ConfigError::ZeroFrames(0).to_string(),
        "frame count must be positive (got 0)"
    );
}
