use super::*;
use crate::portal::shape::{boundary_path, boundary_to_path};

fn style(glow_blur: f64) -> VoidStyle {
    VoidStyle {
        fill: Rgba8::BLACK,
        glow: Rgba8::rgba(0, 255, 255, 153),
        glow_blur,
    }
}

fn square(half: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((-half, -half));
    p.line_to((half, -half));
    p.line_to((half, half));
    p.line_to((-half, half));
    p.close_path();
    p
}

#[test]
fn empty_viewport_is_rejected() {
    assert!(CpuCanvas::new(Viewport::new(0, 10)).is_err());
    assert!(CpuCanvas::new(Viewport::new(70_000, 10)).is_err());
    let mut c = CpuCanvas::new(Viewport::new(4, 4)).unwrap();
    assert!(c.resize(Viewport::new(4, 0)).is_err());
}

#[test]
fn void_body_is_opaque_black() {
    let mut c = CpuCanvas::new(Viewport::new(64, 48)).unwrap();
    c.fill_void(&square(10.0), Affine::translate((32.0, 24.0)), &style(0.0));
    c.present().unwrap();

    let f = c.frame();
    assert_eq!(f.pixel(32, 24), Some([0, 0, 0, 255]));
    assert_eq!(f.pixel(2, 2), Some([0, 0, 0, 0]));
    assert_eq!(c.presented(), 1);
}

#[test]
fn glow_lights_pixels_outside_the_shape() {
    let mut c = CpuCanvas::new(Viewport::new(64, 48)).unwrap();
    c.fill_void(&square(10.0), Affine::translate((32.0, 24.0)), &style(8.0));
    c.present().unwrap();

    let f = c.frame();
    let halo = f.pixel(45, 24).unwrap();
    assert!(halo[3] > 0);
    assert!(halo[1] > 0 && halo[2] > 0);
    assert_eq!(f.pixel(32, 24), Some([0, 0, 0, 255]));
}

#[test]
fn sparks_add_colour() {
    let mut c = CpuCanvas::new(Viewport::new(32, 32)).unwrap();
    c.fill_spark(Rect::new(4.0, 4.0, 8.0, 8.0), Rgba8::rgb(0, 255, 255), 1.0);
    c.fill_spark(Rect::new(20.0, 20.0, 24.0, 24.0), Rgba8::rgb(0, 255, 255), 0.0);
    c.present().unwrap();

    let f = c.frame();
    assert_eq!(f.pixel(6, 6), Some([0, 255, 255, 255]));
    assert_eq!(f.pixel(22, 22), Some([0, 0, 0, 0]));
}

#[test]
fn clear_drops_pending_draws_and_blanks_frame() {
    let mut c = CpuCanvas::new(Viewport::new(32, 32)).unwrap();
    c.fill_spark(Rect::new(0.0, 0.0, 32.0, 32.0), Rgba8::rgb(255, 0, 0), 1.0);
    c.present().unwrap();
    c.fill_spark(Rect::new(0.0, 0.0, 32.0, 32.0), Rgba8::rgb(255, 0, 0), 1.0);
    c.clear();
    assert!(c.frame().data.iter().all(|&b| b == 0));
    c.present().unwrap();
    assert!(c.frame().data.iter().all(|&b| b == 0));
}

#[test]
fn portal_boundary_rasterizes() {
    let pts = boundary_path(1.0, 0.0, 20.0, 120.0, 80.0);
    let path = boundary_to_path(&pts);
    let mut c = CpuCanvas::new(Viewport::new(160, 120)).unwrap();
    let handle = c.clone();
    c.fill_void(&path, Affine::translate((80.0, 60.0)), &style(4.0));
    c.set_interactive(true);
    c.present().unwrap();
    assert_eq!(handle.frame().pixel(80, 60), Some([0, 0, 0, 255]));
    assert!(handle.is_interactive());
}
