use std::f64::consts::{FRAC_PI_2, PI};

use super::*;

fn assert_near(p: Point, x: f64, y: f64) {
    assert!((p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9, "expected ({x}, {y}), got {p:?}");
}

#[test]
fn identity_leaves_points_alone() {
    assert_near(Affine::IDENTITY.apply(Point::new(3.0, -4.0)), 3.0, -4.0);
    assert_eq!(Affine::default(), Affine::IDENTITY);
}

#[test]
fn translation_offsets() {
    assert_near(Affine::translation(10.0, 5.0).apply(Point::new(1.0, 1.0)), 11.0, 6.0);
}

#[test]
fn quarter_turn_maps_x_axis_onto_y_axis() {
    assert_near(Affine::rotation(FRAC_PI_2).apply(Point::new(1.0, 0.0)), 0.0, 1.0);
}

#[test]
fn calls_compose_in_the_local_frame() {
    // Rotating after translating turns the new frame, not the old origin.
    let t = Affine::IDENTITY.translate(10.0, 0.0).rotate(FRAC_PI_2);
    assert_near(t.apply(Point::new(1.0, 0.0)), 10.0, 1.0);

    let t = Affine::IDENTITY.rotate(FRAC_PI_2).translate(10.0, 0.0);
    assert_near(t.apply(Point::ORIGIN), 0.0, 10.0);
}

#[test]
fn rotation_angle_accumulates() {
    let t = Affine::IDENTITY.rotate(FRAC_PI_2).translate(3.0, 3.0).rotate(FRAC_PI_2);
    assert!((t.rotation_angle().abs() - PI).abs() < 1e-9);

    let back = t.rotate(-PI);
    assert!(back.rotation_angle().abs() < 1e-9);
}
