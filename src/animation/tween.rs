use crate::animation::ease::Ease;
use crate::foundation::core::Affine;

/// Timed interpolation handed to host layers alongside a target value
/// (the equivalent of a CSS `transition: <prop> <duration> <timing>`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    /// Seconds.
    pub duration: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(duration: f64, ease: Ease) -> Self {
        Self { duration, ease }
    }

    /// Eased progress in `[0, 1]` after `elapsed` seconds.
    pub fn progress(self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 || !self.duration.is_finite() {
            return 1.0;
        }
        self.ease.apply(elapsed / self.duration)
    }

    pub fn sample_scalar(self, from: f64, to: f64, elapsed: f64) -> f64 {
        from + (to - from) * self.progress(elapsed)
    }

    /// Coefficient-wise interpolation; exact for the uniform scale-about-point transforms
    /// the portal uses.
    pub fn sample_affine(self, from: Affine, to: Affine, elapsed: f64) -> Affine {
        let t = self.progress(elapsed);
        let a = from.as_coeffs();
        let b = to.as_coeffs();
        let mut out = [0.0; 6];
        for (i, c) in out.iter_mut().enumerate() {
            *c = a[i] + (b[i] - a[i]) * t;
        }
        Affine::new(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
