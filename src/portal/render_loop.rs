use crate::{
    animation::ease::approach,
    foundation::core::{Affine, Point, Vec2, Viewport},
    foundation::math::Rng64,
    host::{PortalCanvas, VoidStyle},
    portal::{
        config::{MAX_SHAPE_STEPS, PortalConfig},
        direction::Palette,
        particles::Emitter,
        shape::{ShapeParams, boundary_to_path, fill_boundary, is_finite},
        state::TransitionState,
    },
};

/// Viewport-derived constants, recomputed together on resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub viewport: Viewport,
    pub center: Point,
    pub max_width: f64,
    pub max_height: f64,
}

impl Geometry {
    pub fn new(viewport: Viewport, cfg: &PortalConfig) -> Self {
        Self {
            viewport,
            center: viewport.center(),
            max_width: f64::from(viewport.width) * cfg.max_width_ratio,
            max_height: f64::from(viewport.height) * cfg.max_height_ratio,
        }
    }

    /// Opening width and height at `open_ratio`, each through its own curve.
    pub fn opening_extent(&self, open_ratio: f64, cfg: &PortalConfig) -> (f64, f64) {
        (
            self.max_width * cfg.width_curve.apply(open_ratio),
            self.max_height * cfg.height_curve.apply(open_ratio),
        )
    }
}

/// Counters exposed for diagnostics and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct EngineStats {
    pub frames_drawn: u64,
    pub shape_generations: u64,
    pub frames_skipped: u64,
    pub particles_spawned: u64,
}

/// Result of one opening frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    /// The portal reached full opening; geometry is frozen from now on.
    Frozen,
}

/// Per-frame driver: owns the reusable point buffer and the cached geometry.
#[derive(Clone, Debug)]
pub struct RenderLoop {
    geometry: Geometry,
    points: Vec<Point>,
    stats: EngineStats,
    fault_logged: bool,
}

impl RenderLoop {
    pub fn new(viewport: Viewport, cfg: &PortalConfig) -> Self {
        Self {
            geometry: Geometry::new(viewport, cfg),
            points: Vec::with_capacity(2 * (cfg.shape_steps.min(MAX_SHAPE_STEPS) + 1)),
            stats: EngineStats::default(),
            fault_logged: false,
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    pub fn set_viewport(&mut self, viewport: Viewport, cfg: &PortalConfig) {
        self.geometry = Geometry::new(viewport, cfg);
    }

    /// Re-arm the once-per-transition fault log.
    pub fn rearm(&mut self) {
        self.fault_logged = false;
    }

    /// Advance one opening frame: time, eased open ratio, sparks, then draw.
    pub fn step_opening(
        &mut self,
        state: &mut TransitionState,
        cfg: &PortalConfig,
        palette: &Palette,
        rng: &mut Rng64,
        canvas: &mut dyn PortalCanvas,
    ) -> FrameOutcome {
        state.time += cfg.time_step;
        state.open_ratio = approach(state.open_ratio, 1.0, cfg.opening_speed).min(1.0);

        if state.open_ratio > cfg.freeze_threshold {
            state.open_ratio = 1.0;
            state.frozen = true;
            self.draw_static(state, cfg, palette, canvas);
            return FrameOutcome::Frozen;
        }

        let (width, height) = self.geometry.opening_extent(state.open_ratio, cfg);
        let emitter = Emitter {
            center: self.geometry.center,
            width,
            height,
        };
        if state
            .particles
            .maybe_spawn(&emitter, cfg.spawn_rate * state.open_ratio, rng)
        {
            self.stats.particles_spawned += 1;
        }
        state.particles.advance(1.0);

        let calm = 1.0 - state.open_ratio;
        let shake = Vec2::new(
            rng.range(-1.0, 1.0) * cfg.shake_amplitude * calm,
            rng.range(-1.0, 1.0) * cfg.shake_amplitude * 0.5 * calm,
        );
        self.draw(state, cfg, palette, canvas, shake, true);
        FrameOutcome::Continue
    }

    /// Draw the current shape without shake or sparks (frozen or on-demand redraw).
    pub fn draw_static(
        &mut self,
        state: &TransitionState,
        cfg: &PortalConfig,
        palette: &Palette,
        canvas: &mut dyn PortalCanvas,
    ) {
        self.draw(state, cfg, palette, canvas, Vec2::ZERO, false);
    }

    fn draw(
        &mut self,
        state: &TransitionState,
        cfg: &PortalConfig,
        palette: &Palette,
        canvas: &mut dyn PortalCanvas,
        shake: Vec2,
        with_particles: bool,
    ) {
        if self.geometry.viewport.is_empty() {
            self.fault("viewport has no area");
            return;
        }

        let (width, height) = self.geometry.opening_extent(state.open_ratio, cfg);
        let params = ShapeParams {
            open_ratio: state.open_ratio,
            time: state.time,
            amplitude: cfg.teeth_amplitude,
            width,
            height,
            steps: cfg.shape_steps,
            phase: state.noise_phase,
        };
        fill_boundary(&mut self.points, &params);
        self.stats.shape_generations += 1;
        if !is_finite(&self.points) || !shake.is_finite() {
            self.fault("non-finite portal geometry");
            return;
        }

        let style = VoidStyle {
            fill: palette.void_color,
            glow: palette.glow_color,
            glow_blur: cfg.glow_blur,
        };
        let transform = Affine::translate(self.geometry.center.to_vec2() + shake);

        canvas.clear();
        canvas.fill_void(&boundary_to_path(&self.points), transform, &style);
        if with_particles {
            state.particles.draw(canvas, palette.spark_color);
        }
        match canvas.present() {
            Ok(()) => self.stats.frames_drawn += 1,
            Err(err) => self.fault(&err.to_string()),
        }
    }

    fn fault(&mut self, what: &str) {
        self.stats.frames_skipped += 1;
        if !self.fault_logged {
            self.fault_logged = true;
            tracing::warn!(reason = what, "skipping portal frame");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/portal/render_loop.rs"]
mod tests;
