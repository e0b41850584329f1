// Host-side tests for pure input functions.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn css_offsets_scale_to_backing_pixels() {
    let px = css_to_backing(
        Vec2::new(100.0, 50.0),
        Vec2::new(400.0, 200.0),
        Vec2::new(800.0, 400.0),
    );
    assert_eq!(px, Vec2::new(200.0, 100.0));
}

#[test]
fn collapsed_element_maps_to_origin() {
    let px = css_to_backing(Vec2::new(10.0, 10.0), Vec2::ZERO, Vec2::new(800.0, 400.0));
    assert_eq!(px, Vec2::ZERO);
}

#[test]
fn captured_drags_end_only_on_cancel_or_lost_capture() {
    assert!(DRAG_CANCEL_EVENTS.contains(&"pointercancel"));
    assert!(DRAG_CANCEL_EVENTS.contains(&"lostpointercapture"));
    assert!(!DRAG_CANCEL_EVENTS.contains(&"pointerleave"));
}
