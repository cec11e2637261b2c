use super::*;
use crate::foundation::core::{Point, Vec2};

#[test]
fn zero_duration_jumps_to_target() {
    let t = Tween::new(0.0, Ease::Linear);
    assert_eq!(t.sample_scalar(1.0, 0.0, 0.0), 0.0);
}

#[test]
fn linear_scalar_midpoint() {
    let t = Tween::new(0.8, Ease::Linear);
    assert!((t.sample_scalar(1.0, 0.0, 0.4) - 0.5).abs() < 1e-12);
    assert_eq!(t.sample_scalar(1.0, 0.0, 5.0), 0.0);
}

#[test]
fn affine_endpoints_match_inputs() {
    let c = Vec2::new(50.0, 40.0);
    let zoom = Affine::translate(c) * Affine::scale(50.0) * Affine::translate(-c);
    let t = Tween::new(1.0, Ease::OutQuad);
    assert_eq!(t.sample_affine(Affine::IDENTITY, zoom, 0.0), Affine::IDENTITY);
    assert_eq!(t.sample_affine(Affine::IDENTITY, zoom, 1.0), zoom);

    // The zoom pivot stays fixed along the way.
    let mid = t.sample_affine(Affine::IDENTITY, zoom, 0.5);
    let p = mid * Point::new(50.0, 40.0);
    assert!((p.x - 50.0).abs() < 1e-9);
    assert!((p.y - 40.0).abs() < 1e-9);
}
