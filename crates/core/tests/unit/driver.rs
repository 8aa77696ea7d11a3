//! Auto-Run Driver Tests.
//!
//! The runner checks its cancel token before every step, so cancellation is
//! observed between steps and never mid-step.

use std::thread;
use std::time::Duration;

use pagesim_core::PolicyKind;
use pagesim_core::config::AutoRunConfig;
use pagesim_core::sim::{AutoRunner, CancelToken, RunEnd, RunSummary};

use crate::common::{BELADY, deterministic};

#[test]
fn runs_to_completion_without_delay() {
    let mut sim = deterministic(3, BELADY, PolicyKind::Lru);
    let runner = AutoRunner::new(Duration::ZERO);
    let mut seen = Vec::new();

    let summary = runner.run(&mut sim, |o| seen.push(o.cursor_after)).unwrap();

    assert_eq!(
        summary,
        RunSummary {
            steps: BELADY.len(),
            end: RunEnd::Finished,
        }
    );
    assert_eq!(seen, (1..=BELADY.len()).collect::<Vec<_>>());
    assert!(sim.is_finished());
}

#[test]
fn cancel_from_callback_stops_after_current_step() {
    let mut sim = deterministic(3, BELADY, PolicyKind::Fifo);
    let runner = AutoRunner::new(Duration::ZERO);
    let token = runner.token();

    let summary = runner
        .run(&mut sim, |o| {
            if o.cursor_after == 2 {
                token.cancel();
            }
        })
        .unwrap();

    assert_eq!(summary.end, RunEnd::Cancelled);
    assert_eq!(summary.steps, 2);
    assert_eq!(sim.state().cursor(), 2);
}

#[test]
fn cancelled_token_runs_nothing() {
    let mut sim = deterministic(2, &[1, 2, 3], PolicyKind::Opt);
    let runner = AutoRunner::new(Duration::ZERO);
    runner.token().cancel();

    let summary = runner.run(&mut sim, |_| {}).unwrap();

    assert_eq!(summary.steps, 0);
    assert_eq!(summary.end, RunEnd::Cancelled);
    assert_eq!(sim.state().cursor(), 0);
}

#[test]
fn finished_simulator_ends_immediately() {
    let mut sim = deterministic(2, &[], PolicyKind::Fifo);
    let runner = AutoRunner::new(Duration::from_millis(50));

    let summary = runner.run(&mut sim, |_| {}).unwrap();

    assert_eq!(summary.steps, 0);
    assert_eq!(summary.end, RunEnd::Finished);
}

/// Cancelling from another thread interrupts a paced run.
#[test]
fn cancel_from_another_thread() {
    let reference: Vec<u32> = (0..100).map(|i| i % 7).collect();
    let mut sim = deterministic(3, &reference, PolicyKind::Lru);
    let runner = AutoRunner::new(Duration::from_millis(5));
    let token = runner.token();

    let canceller = thread::spawn(move || {
        thread::sleep(Duration::from_millis(20));
        token.cancel();
    });
    let summary = runner.run(&mut sim, |_| {}).unwrap();
    canceller.join().unwrap();

    assert_eq!(summary.end, RunEnd::Cancelled);
    assert!(summary.steps < reference.len());
    assert_eq!(sim.state().cursor(), summary.steps);
}

#[test]
fn from_config_uses_interval() {
    let runner = AutoRunner::from_config(&AutoRunConfig { interval_ms: 150 });

    assert_eq!(runner.interval(), Duration::from_millis(150));
}

#[test]
fn token_clones_share_state() {
    let token = CancelToken::new();
    let clone = token.clone();
    assert!(!token.is_cancelled());

    clone.cancel();
    assert!(token.is_cancelled());
}
