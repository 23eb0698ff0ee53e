// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_constants_match_page_behavior() {
    assert_eq!(SNAP_THRESHOLD, 50.0);
    assert_eq!(ADVISORY_VISIBLE_MS, 2000);
    assert_eq!(DRAG_SCALE, 0.93);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scales_are_ordered() {
    // Grabbed portrait shrinks, hovered links grow
    assert!(DRAG_SCALE > 0.0);
    assert!(DRAG_SCALE < REST_SCALE);
    assert!(REST_SCALE < HOVER_SCALE);
}

#[test]
fn selectors_and_attributes_are_distinct() {
    assert_ne!(TARGET_A_SELECTOR, TARGET_B_SELECTOR);
    assert_ne!(ENTITY_ID, ADVISORY_ID);

    let attrs = [SRC_DEFAULT_ATTR, SRC_A_ATTR, SRC_B_ATTR];
    for (i, a) in attrs.iter().enumerate() {
        assert!(a.starts_with("data-"), "{} should be a data attribute", a);
        for b in &attrs[i + 1..] {
            assert_ne!(a, b);
        }
    }

    let classes = [GRABBING_CLASS, ARMED_CLASS, HIDDEN_CLASS];
    assert!(classes.iter().all(|c| !c.is_empty() && !c.contains(' ')));
    assert!(VH_PROPERTY.starts_with("--"));
}
