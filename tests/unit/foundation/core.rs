use super::*;

#[test]
fn viewport_center_and_emptiness() {
    let v = Viewport::new(800, 600);
    assert!(!v.is_empty());
    assert_eq!(v.center(), Point::new(400.0, 300.0));
    assert!(Viewport::new(0, 600).is_empty());
    assert!(Viewport::new(800, 0).is_empty());
}

#[test]
fn viewport_to_u16_rejects_degenerate_sizes() {
    assert_eq!(Viewport::new(64, 32).to_u16().unwrap(), (64, 32));
    assert!(matches!(
        Viewport::new(0, 32).to_u16(),
        Err(GargantaError::Surface(_))
    ));
    assert!(matches!(
        Viewport::new(70_000, 32).to_u16(),
        Err(GargantaError::Surface(_))
    ));
}

#[test]
fn premultiply_scales_channels_by_alpha() {
    assert_eq!(Rgba8::rgb(255, 10, 0).premultiplied(), [255, 10, 0, 255]);
    assert_eq!(Rgba8::rgba(255, 255, 255, 0).premultiplied(), [0, 0, 0, 0]);
    assert_eq!(Rgba8::rgba(200, 100, 0, 128).premultiplied(), [100, 50, 0, 128]);
}

#[test]
fn alpha_scaling_clamps_and_ignores_nan() {
    let c = Rgba8::rgba(0, 255, 255, 200);
    assert_eq!(c.with_alpha_scaled(0.5).a, 100);
    assert_eq!(c.with_alpha_scaled(2.0).a, 200);
    assert_eq!(c.with_alpha_scaled(f32::NAN).a, 0);
}
