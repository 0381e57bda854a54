// Host-side tests for pointer coordinate mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

fn rect() -> CanvasRect {
    CanvasRect {
        left: 100.0,
        top: 50.0,
        width: 800.0,
        height: 400.0,
    }
}

#[test]
fn corners_and_centre_map_to_ndc() {
    let r = rect();
    assert_eq!(client_to_ndc(100.0, 50.0, r), Some(Vec2::new(-1.0, 1.0)));
    assert_eq!(client_to_ndc(900.0, 450.0, r), Some(Vec2::new(1.0, -1.0)));
    assert_eq!(client_to_ndc(500.0, 250.0, r), Some(Vec2::ZERO));
}

#[test]
fn points_outside_extend_past_unit_range() {
    let ndc = client_to_ndc(0.0, 0.0, rect()).unwrap();
    assert!(ndc.x < -1.0 && ndc.y > 1.0);
}

#[test]
fn collapsed_canvas_has_no_mapping() {
    let mut r = rect();
    r.width = 0.0;
    assert_eq!(client_to_ndc(10.0, 10.0, r), None);
    let mut r = rect();
    r.height = -1.0;
    assert_eq!(client_to_ndc(10.0, 10.0, r), None);
}

#[test]
fn aspect_falls_back_to_square() {
    assert_eq!(aspect(1920, 1080), 1920.0 / 1080.0);
    assert_eq!(aspect(0, 1080), 1.0);
    assert_eq!(aspect(1920, 0), 1.0);
}
