// Host-side checks on the page wiring constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn selector_matches_attribute() {
    assert_eq!(PARALLAX_SELECTOR, format!("[{PARALLAX_ATTR}]"));
    assert!(VARIANT_ATTR.starts_with("data-"));
    assert!(!CANVAS_ID.is_empty() && !CANVAS_ID.starts_with('#'));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn parallax_tuning_is_sane() {
    assert!(PARALLAX_EASE > 0.0 && PARALLAX_EASE <= 1.0);
    assert!(PARALLAX_DEFAULT_DEPTH_PX.abs() <= PARALLAX_MAX_DEPTH_PX);
    assert!(FRAME_STATS_INTERVAL > 0);
}
