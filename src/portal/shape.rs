//! Torn-edge boundary of the portal.
//!
//! The outline is two sinusoidal arches (top traced left to right, bottom traced right to
//! left) perturbed by a product of sines. Everything here is pure: the same inputs always
//! produce the same points, and nothing is cached between frames.

use std::f64::consts::PI;

use crate::foundation::core::{BezPath, Point};

/// Horizontal offset between the noise sampled on the top and the bottom edge.
const BOTTOM_EDGE_NOISE_OFFSET: f64 = 100.0;

/// Inputs of one boundary evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeParams {
    pub open_ratio: f64,
    pub time: f64,
    /// Peak edge displacement in pixels.
    pub amplitude: f64,
    /// Current opening width in pixels.
    pub width: f64,
    /// Current opening height in pixels.
    pub height: f64,
    /// Samples per edge.
    pub steps: usize,
    /// Noise-space offset, fixed for the lifetime of one transition.
    pub phase: f64,
}

impl ShapeParams {
    pub fn new(open_ratio: f64, time: f64, amplitude: f64, width: f64, height: f64) -> Self {
        Self {
            open_ratio,
            time,
            amplitude,
            width,
            height,
            steps: 50,
            phase: 0.0,
        }
    }

    pub fn point_count(&self) -> usize {
        self.steps.max(1).saturating_add(1).saturating_mul(2)
    }
}

/// Organic interference noise in roughly `[-1, 1]`.
pub fn edge_noise(x: f64, t: f64) -> f64 {
    (x * 0.01 + t).sin() * (x * 0.03 + t * 2.0).sin() * (x * 0.1 + t * 0.5).sin()
}

/// Noise magnitude multiplier: zero for a closed slit, peaking mid-opening, and settling
/// to a cleaner edge once fully open.
pub fn noise_envelope(open_ratio: f64) -> f64 {
    let r = open_ratio.clamp(0.0, 1.0);
    r.sqrt() * (1.0 - 0.8 * r)
}

/// Closed boundary centred on the origin.
pub fn boundary_path(
    open_ratio: f64,
    time: f64,
    amplitude: f64,
    width: f64,
    height: f64,
) -> Vec<Point> {
    let params = ShapeParams::new(open_ratio, time, amplitude, width, height);
    let mut out = Vec::with_capacity(params.point_count());
    fill_boundary(&mut out, &params);
    out
}

/// Like [`boundary_path`] but writes into `out`, reusing its allocation.
pub fn fill_boundary(out: &mut Vec<Point>, params: &ShapeParams) {
    out.clear();
    out.reserve(params.point_count());

    let steps = params.steps.max(1);
    let half_w = params.width / 2.0;
    let half_h = params.height / 2.0;
    let magnitude = params.amplitude * noise_envelope(params.open_ratio);

    for i in 0..=steps {
        let pct = i as f64 / steps as f64;
        let x = -half_w + params.width * pct;
        let arch = (pct * PI).sin();
        let noise = edge_noise(x + params.phase, params.time) * magnitude * arch;
        out.push(Point::new(x, -half_h * arch + noise));
    }
    for i in (0..=steps).rev() {
        let pct = i as f64 / steps as f64;
        let x = -half_w + params.width * pct;
        let arch = (pct * PI).sin();
        let noise = edge_noise(x + params.phase + BOTTOM_EDGE_NOISE_OFFSET, params.time)
            * magnitude
            * arch;
        out.push(Point::new(x, half_h * arch + noise));
    }
}

/// `true` when every coordinate is finite.
pub fn is_finite(points: &[Point]) -> bool {
    points.iter().all(|p| p.x.is_finite() && p.y.is_finite())
}

pub fn boundary_to_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(&first) = iter.next() {
        path.move_to(first);
        for &p in iter {
            path.line_to(p);
        }
        path.close_path();
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/portal/shape.rs"]
mod tests;
