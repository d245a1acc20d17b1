// Host-side tests for page-level constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn damping_factors_attenuate() {
    // damping must attenuate, never amplify
    assert!(TITLE_DAMP.0 > 0.0 && TITLE_DAMP.0 < 1.0);
    assert!(TITLE_DAMP.1 > 0.0 && TITLE_DAMP.1 < 1.0);
    assert!(SUBTITLE_DAMP.0 > 0.0 && SUBTITLE_DAMP.0 < 1.0);
    assert!(SUBTITLE_DAMP.1 > 0.0 && SUBTITLE_DAMP.1 < 1.0);
}

#[test]
fn caption_drifts_less_than_the_heading() {
    assert!(SUBTITLE_DAMP.0 < TITLE_DAMP.0);
    assert!(SUBTITLE_DAMP.1 < TITLE_DAMP.1);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        SCENE_MOUNT_ID,
        HERO_TITLE_ID,
        HERO_SUBTITLE_ID,
        MODAL_OVERLAY_ID,
        MODAL_DIALOG_ID,
        MODAL_CLOSE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in ids.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}
