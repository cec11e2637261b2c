use std::path::Path;

use crate::{
    animation::ease::{CubicBezier, Ease},
    foundation::error::{GargantaError, GargantaResult},
    portal::direction::Palettes,
};

/// Largest accepted `particle_cap`.
pub const MAX_PARTICLE_CAP: usize = 10_000;
/// Largest accepted `shape_steps`.
pub const MAX_SHAPE_STEPS: usize = 4_096;
/// Largest accepted `glow_blur`, in pixels.
pub const MAX_GLOW_BLUR: f64 = 256.0;

/// Durations (seconds) and zoom factor of the enter/complete timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Length of the zoom-to-cover transform.
    pub zoom_duration: f64,
    /// Scale reached by the zoom; large enough to exceed any viewport.
    pub zoom_scale: f64,
    pub zoom_ease: Ease,
    /// Delay between `enter_gate` and the host callback; the zoom covers the screen by then.
    pub cover_delay: f64,
    /// Stabilization delay after the host swap settles, before fading out.
    pub settle_delay: f64,
    pub fade_duration: f64,
    pub fade_ease: Ease,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            zoom_duration: 1.0,
            zoom_scale: 50.0,
            zoom_ease: Ease::CubicBezier(CubicBezier::new(0.7, 0.0, 0.2, 1.0)),
            cover_delay: 0.8,
            settle_delay: 0.2,
            fade_duration: 0.8,
            fade_ease: Ease::OutQuad,
        }
    }
}

/// Tunables of the portal transition.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Fraction of the remaining distance covered per frame while opening.
    pub opening_speed: f64,
    /// Open ratio above which the portal snaps to 1 and freezes.
    pub freeze_threshold: f64,
    /// Noise time advanced per frame.
    pub time_step: f64,
    pub max_width_ratio: f64,
    pub max_height_ratio: f64,
    pub width_curve: Ease,
    pub height_curve: Ease,
    /// Peak displacement of the torn edge, in pixels.
    pub teeth_amplitude: f64,
    /// Samples per edge; the boundary has `2 * (shape_steps + 1)` points.
    pub shape_steps: usize,
    /// Camera shake in pixels at `open_ratio = 0`.
    pub shake_amplitude: f64,
    pub particle_cap: usize,
    /// Spawn probability per frame at `open_ratio = 1`.
    pub spawn_rate: f64,
    /// Life lost per frame.
    pub particle_decay: f64,
    /// Glow halo radius in pixels.
    pub glow_blur: f64,
    pub timings: Timings,
    /// Enter automatically this many seconds after the portal is fully open.
    pub auto_enter_after: Option<f64>,
    pub seed: u64,
    pub palettes: Palettes,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            opening_speed: 0.02,
            freeze_threshold: 0.99,
            time_step: 0.05,
            max_width_ratio: 0.9,
            max_height_ratio: 0.6,
            width_curve: Ease::Linear,
            height_curve: Ease::Sqrt,
            teeth_amplitude: 20.0,
            shape_steps: 50,
            shake_amplitude: 2.0,
            particle_cap: 50,
            spawn_rate: 0.3,
            particle_decay: 0.02,
            glow_blur: 20.0,
            timings: Timings::default(),
            auto_enter_after: None,
            seed: 0x6761_7267_616e_7461,
            palettes: Palettes::default(),
        }
    }
}

impl PortalConfig {
    pub fn from_json_str(s: &str) -> GargantaResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| GargantaError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_path(path: &Path) -> GargantaResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            GargantaError::Other(
                anyhow::Error::new(e).context(format!("read config '{}'", path.display())),
            )
        })?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> GargantaResult<()> {
        fn finite(name: &str, v: f64) -> GargantaResult<()> {
            if !v.is_finite() {
                return Err(GargantaError::validation(format!("{name} must be finite")));
            }
            Ok(())
        }
        fn non_negative(name: &str, v: f64) -> GargantaResult<()> {
            finite(name, v)?;
            if v < 0.0 {
                return Err(GargantaError::validation(format!("{name} must be >= 0")));
            }
            Ok(())
        }

        finite("opening_speed", self.opening_speed)?;
        if self.opening_speed <= 0.0 || self.opening_speed > 1.0 {
            return Err(GargantaError::validation(
                "opening_speed must be in (0, 1]",
            ));
        }
        finite("freeze_threshold", self.freeze_threshold)?;
        if self.freeze_threshold <= 0.0 || self.freeze_threshold >= 1.0 {
            return Err(GargantaError::validation(
                "freeze_threshold must be in (0, 1)",
            ));
        }
        non_negative("time_step", self.time_step)?;
        for (name, v) in [
            ("max_width_ratio", self.max_width_ratio),
            ("max_height_ratio", self.max_height_ratio),
        ] {
            finite(name, v)?;
            if v <= 0.0 {
                return Err(GargantaError::validation(format!("{name} must be > 0")));
            }
        }
        non_negative("teeth_amplitude", self.teeth_amplitude)?;
        if !(2..=MAX_SHAPE_STEPS).contains(&self.shape_steps) {
            return Err(GargantaError::validation(format!(
                "shape_steps must be in [2, {MAX_SHAPE_STEPS}]"
            )));
        }
        if self.particle_cap > MAX_PARTICLE_CAP {
            return Err(GargantaError::validation(format!(
                "particle_cap must be <= {MAX_PARTICLE_CAP}"
            )));
        }
        non_negative("shake_amplitude", self.shake_amplitude)?;
        non_negative("spawn_rate", self.spawn_rate)?;
        finite("particle_decay", self.particle_decay)?;
        if self.particle_decay <= 0.0 {
            return Err(GargantaError::validation("particle_decay must be > 0"));
        }
        non_negative("glow_blur", self.glow_blur)?;
        if self.glow_blur > MAX_GLOW_BLUR {
            return Err(GargantaError::validation(format!(
                "glow_blur must be <= {MAX_GLOW_BLUR}"
            )));
        }

        let t = &self.timings;
        non_negative("timings.zoom_duration", t.zoom_duration)?;
        finite("timings.zoom_scale", t.zoom_scale)?;
        if t.zoom_scale < 1.0 {
            return Err(GargantaError::validation("timings.zoom_scale must be >= 1"));
        }
        non_negative("timings.cover_delay", t.cover_delay)?;
        non_negative("timings.settle_delay", t.settle_delay)?;
        non_negative("timings.fade_duration", t.fade_duration)?;
        if let Some(after) = self.auto_enter_after {
            non_negative("auto_enter_after", after)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/portal/config.rs"]
mod tests;
