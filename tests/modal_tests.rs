// Host-side tests for the modal state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod modal {
    include!("../src/core/modal.rs");
}

use modal::*;

#[test]
fn starts_closed() {
    let m = ModalMachine::new();
    assert_eq!(m.state(), ModalState::Closed);
    assert!(!m.is_open());
}

#[test]
fn open_locks_and_records_the_state() {
    let mut m = ModalMachine::new();
    let effect = m.open(ModalKind::About, "");
    assert_eq!(effect, PageEffect::Lock);
    assert_eq!(m.state(), ModalState::About);
}

#[test]
fn close_restores_the_exact_preopen_overflow() {
    for kind in ModalKind::ALL {
        let mut m = ModalMachine::new();
        let _ = m.open(kind, "scroll");
        assert_eq!(
            m.close(),
            PageEffect::Unlock {
                overflow: "scroll".to_string()
            }
        );
        assert_eq!(m.state(), ModalState::Closed);
    }
}

#[test]
fn empty_snapshot_round_trips() {
    let mut m = ModalMachine::new();
    let _ = m.open(ModalKind::Contact, "");
    assert_eq!(
        m.close(),
        PageEffect::Unlock {
            overflow: String::new()
        }
    );
}

#[test]
fn switching_panels_keeps_the_first_snapshot() {
    let mut m = ModalMachine::new();
    assert_eq!(m.open(ModalKind::About, "auto"), PageEffect::Lock);
    // page is locked now; a re-snapshot here would capture "hidden"
    assert_eq!(m.open(ModalKind::Projects, "hidden"), PageEffect::None);
    assert_eq!(m.state(), ModalState::Projects);
    assert_eq!(
        m.close(),
        PageEffect::Unlock {
            overflow: "auto".to_string()
        }
    );
}

#[test]
fn escape_is_inert_while_closed() {
    let mut m = ModalMachine::new();
    assert_eq!(m.on_escape(), PageEffect::None);
    assert_eq!(m.state(), ModalState::Closed);
}

#[test]
fn escape_closes_any_open_state() {
    for kind in ModalKind::ALL {
        let mut m = ModalMachine::new();
        let _ = m.open(kind, "visible");
        assert_eq!(
            m.on_escape(),
            PageEffect::Unlock {
                overflow: "visible".to_string()
            }
        );
        assert_eq!(m.state(), ModalState::Closed);
    }
}

#[test]
fn close_while_closed_is_a_no_op() {
    let mut m = ModalMachine::new();
    assert_eq!(m.close(), PageEffect::None);
    let _ = m.open(ModalKind::Links, "x");
    let _ = m.close();
    // second close must not emit another unlock
    assert_eq!(m.close(), PageEffect::None);
}

#[test]
fn lock_and_unlock_pair_exactly_once_per_cycle() {
    let mut m = ModalMachine::new();
    let mut locks = 0;
    let mut unlocks = 0;
    for _ in 0..5 {
        if m.open(ModalKind::About, "auto") == PageEffect::Lock {
            locks += 1;
        }
        if matches!(m.close(), PageEffect::Unlock { .. }) {
            unlocks += 1;
        }
    }
    assert_eq!(locks, 5);
    assert_eq!(unlocks, 5);
}

#[test]
fn backdrop_click_closes_only_on_the_backdrop() {
    let mut m = ModalMachine::new();
    let _ = m.open(ModalKind::Projects, "");
    assert_eq!(m.on_backdrop_click(false), PageEffect::None);
    assert!(m.is_open());
    assert!(matches!(
        m.on_backdrop_click(true),
        PageEffect::Unlock { .. }
    ));
    assert!(!m.is_open());
}

#[test]
fn trigger_names_round_trip() {
    for kind in ModalKind::ALL {
        assert_eq!(ModalKind::from_trigger(kind.trigger()), Some(kind));
    }
    assert_eq!(ModalKind::from_trigger("mailto"), None);
    assert_eq!(ModalKind::from_trigger(""), None);
}

#[test]
fn state_kind_matches_the_open_call() {
    let mut m = ModalMachine::new();
    for kind in ModalKind::ALL {
        let _ = m.open(kind, "");
        assert_eq!(m.state().kind(), Some(kind));
    }
    let _ = m.close();
    assert_eq!(m.state().kind(), None);
}
