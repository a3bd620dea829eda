// Host-side tests for constants and their relationships.
// The front-end crate is wasm-only, so its constants are included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use backdrop_core::constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn overlay_is_centred_on_the_container() {
    assert_eq!(OVERLAY_SIZE_PX, OVERLAY_SIZE);
    assert_eq!(CONTAINER_SIZE_PX, LOCAL_REFERENCE_SIZE);
    assert_eq!(OVERLAY_OFFSET_PX, (CONTAINER_SIZE_PX - OVERLAY_SIZE_PX) / 2.0);
    assert_eq!(LOCAL_CENTER * 2.0, OVERLAY_SIZE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ring_fits_inside_the_overlay() {
    assert!(OUTER_RADIUS_MIN + OUTER_RADIUS_SPAN <= LOCAL_CENTER);
    assert!(ACCENT_RADIUS_MIN + ACCENT_RADIUS_SPAN <= LOCAL_CENTER);
    assert!(OUTLINE_GLOW_OUTER <= LOCAL_CENTER);
    assert!(OUTLINE_RADIUS == FRAME_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn bands_are_ordered() {
    assert!(BACKGROUND_ALPHA_FLOOR < BACKGROUND_ALPHA_CEILING);
    assert!(SPECIAL_ALPHA_FLOOR < SPECIAL_ALPHA_CEILING);
    assert!(TECH_ALPHA_FLOOR < TECH_ALPHA_CEILING);
    assert!(BACKGROUND_MIN_COUNT <= BACKGROUND_MAX_COUNT);
    assert!(TECH_SPAWN_INSET > TECH_MARGIN);
}

#[test]
fn bursts_fade_before_their_lifetime() {
    let steps = (1.0 / BURST_ALPHA_STEP).round() as u32;
    assert_eq!(BURST_DECAY_INTERVAL * steps, BURST_LIFETIME);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn resume_gap_exceeds_a_frame() {
    assert!(MAX_FRAME_DT_MS > 17);
    assert!(!BACKGROUND_CANVAS_ID.is_empty());
    assert!(PROFILE_CONTAINER_SELECTOR.starts_with('.'));
    assert!(PROFILE_IMAGE_SELECTOR.starts_with('.'));
}
