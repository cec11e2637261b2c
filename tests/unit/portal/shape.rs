use super::*;

fn max_edge_deviation(points: &[Point], half_h: f64, width: f64) -> f64 {
    let steps = points.len() / 2 - 1;
    let mut worst = 0.0f64;
    for (i, p) in points.iter().enumerate() {
        let k = if i <= steps { i } else { 2 * steps + 1 - i };
        let pct = k as f64 / steps as f64;
        let arch = (pct * PI).sin();
        let base = if i <= steps { -half_h * arch } else { half_h * arch };
        assert!((p.x - (-width / 2.0 + width * pct)).abs() < 1e-9);
        worst = worst.max((p.y - base).abs());
    }
    worst
}

#[test]
fn boundary_has_two_edges_of_steps_plus_one_points() {
    let pts = boundary_path(0.5, 1.0, 20.0, 400.0, 200.0);
    assert_eq!(pts.len(), 102);
    // Top edge runs left to right, bottom edge returns right to left.
    assert!((pts[0].x + 200.0).abs() < 1e-9);
    assert!((pts[50].x - 200.0).abs() < 1e-9);
    assert!((pts[51].x - 200.0).abs() < 1e-9);
    assert!((pts[101].x + 200.0).abs() < 1e-9);
}

#[test]
fn closed_slit_has_no_noise() {
    let pts = boundary_path(0.0, 3.7, 20.0, 400.0, 0.0);
    for p in &pts {
        assert!(p.y.abs() < 1e-12);
    }
}

#[test]
fn noise_shrinks_as_portal_finishes_opening() {
    assert_eq!(noise_envelope(0.0), 0.0);
    let mid = noise_envelope(0.4);
    let late = noise_envelope(0.8);
    let open = noise_envelope(1.0);
    assert!(mid > late);
    assert!(late > open);
    assert!(open > 0.0);

    let half_h = 100.0;
    let wide = max_edge_deviation(&boundary_path(0.4, 2.0, 20.0, 400.0, 200.0), half_h, 400.0);
    let settled = max_edge_deviation(&boundary_path(1.0, 2.0, 20.0, 400.0, 200.0), half_h, 400.0);
    assert!(wide <= 20.0 * mid + 1e-9);
    assert!(settled <= 20.0 * open + 1e-9);
}

#[test]
fn endpoints_stay_pinned_to_the_axis() {
    let pts = boundary_path(0.6, 9.0, 50.0, 300.0, 120.0);
    assert!(pts[0].y.abs() < 1e-9);
    assert!(pts[50].y.abs() < 1e-9);
}

#[test]
fn fill_boundary_reuses_the_buffer_and_matches_boundary_path() {
    let params = ShapeParams::new(0.7, 0.35, 20.0, 640.0, 240.0);
    let mut buf = Vec::new();
    fill_boundary(&mut buf, &params);
    let cap = buf.capacity();
    fill_boundary(&mut buf, &params);
    assert_eq!(buf.capacity(), cap);
    assert_eq!(buf, boundary_path(0.7, 0.35, 20.0, 640.0, 240.0));
}

#[test]
fn phase_offset_changes_the_edge() {
    let a = ShapeParams::new(0.5, 1.0, 20.0, 400.0, 200.0);
    let b = ShapeParams { phase: 333.0, ..a };
    let (mut pa, mut pb) = (Vec::new(), Vec::new());
    fill_boundary(&mut pa, &a);
    fill_boundary(&mut pb, &b);
    assert_ne!(pa, pb);
}

#[test]
fn path_is_closed() {
    let path = boundary_to_path(&boundary_path(0.5, 0.0, 20.0, 100.0, 50.0));
    let els = path.elements();
    assert!(matches!(els.first(), Some(kurbo::PathEl::MoveTo(_))));
    assert!(matches!(els.last(), Some(kurbo::PathEl::ClosePath)));
    assert!(boundary_to_path(&[]).elements().is_empty());
}

#[test]
fn finite_check_flags_nan() {
    assert!(is_finite(&boundary_path(0.5, 0.0, 20.0, 100.0, 50.0)));
    assert!(!is_finite(&boundary_path(0.5, f64::NAN, 20.0, 100.0, 50.0)));
}
