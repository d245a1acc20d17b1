// Host-side tests for scene lifecycle accounting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/core/lifecycle.rs");
}

use lifecycle::*;

// Mirrors what a full mount acquires: two geometry/material pairs (outer
// wireframe, inner edge overlay) and the window resize listener.
fn acquire_scene(ledger: &mut ResourceLedger) {
    ledger.acquire_geometry();
    ledger.acquire_material();
    ledger.acquire_geometry();
    ledger.acquire_material();
    ledger.add_listener();
}

fn release_scene(ledger: &mut ResourceLedger) {
    ledger.remove_listener();
    ledger.release_geometry();
    ledger.release_material();
    ledger.release_geometry();
    ledger.release_material();
}

#[test]
fn mount_unmount_releases_everything_exactly_once() {
    let mut phase = ScenePhase::Running;
    let mut ledger = ResourceLedger::default();
    acquire_scene(&mut ledger);
    assert!(!ledger.balanced());
    assert_eq!(ledger.outstanding(), 5);

    assert!(phase.take_teardown());
    release_scene(&mut ledger);

    assert!(ledger.balanced());
    assert_eq!(ledger.outstanding(), 0);
    assert_eq!(ledger.geometries_released, 2);
    assert_eq!(ledger.materials_released, 2);
    assert_eq!(ledger.listeners_removed, 1);
}

#[test]
fn second_teardown_is_refused() {
    let mut phase = ScenePhase::Running;
    assert!(phase.take_teardown());
    assert!(!phase.take_teardown());
    assert!(!phase.take_teardown());
    assert_eq!(phase, ScenePhase::TornDown);
}

#[test]
fn degraded_mount_still_gets_one_teardown() {
    // partial acquisition: no renderer ever came up, nothing was counted,
    // but the release path must still run exactly once
    let mut phase = ScenePhase::Degraded;
    let ledger = ResourceLedger::default();
    assert!(phase.take_teardown());
    assert!(ledger.balanced());
    assert!(!phase.take_teardown());
}

#[test]
fn over_release_shows_up_as_unbalanced() {
    let mut ledger = ResourceLedger::default();
    ledger.acquire_geometry();
    ledger.release_geometry();
    ledger.release_geometry();
    assert!(!ledger.balanced());
    assert_eq!(ledger.outstanding(), 1);
}

#[test]
fn fresh_ledger_is_balanced() {
    assert!(ResourceLedger::default().balanced());
    assert_eq!(ResourceLedger::default().outstanding(), 0);
}
