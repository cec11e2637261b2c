use std::task::{Context, Poll, Waker};

use crate::{
    animation::tween::Tween,
    foundation::core::{Affine, Viewport},
    foundation::error::{GargantaError, GargantaResult},
    foundation::math::Rng64,
    host::{CompletionFuture, HostLayers, OnComplete, PointerTarget},
    portal::{
        config::PortalConfig,
        direction::Direction,
        particles::Particle,
        render_loop::{EngineStats, FrameOutcome, RenderLoop},
        state::{Phase, TransitionState},
        timeline::{TimerAction, Timeline},
    },
};

/// What the host should schedule after an engine call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum FrameRequest {
    /// Call [`PortalEngine::on_frame`] on the next animation frame.
    AnimationFrame,
    /// Nothing to draw; call [`PortalEngine::on_frame`] at this clock time.
    At(f64),
    /// Nothing pending.
    Idle,
}

/// The portal transition engine.
///
/// Constructed once by the host and reused for every transition. The host forwards its
/// animation frames to [`on_frame`](Self::on_frame), pointer activations to
/// [`on_pointer`](Self::on_pointer) and viewport changes to [`resize`](Self::resize).
pub struct PortalEngine {
    config: PortalConfig,
    layers: HostLayers,
    on_complete: OnComplete,
    state: TransitionState,
    render: RenderLoop,
    timeline: Timeline,
    rng: Rng64,
    epoch: u64,
    active: bool,
    label_interactive: bool,
    callback_fired: bool,
    /// Clock time the overlay zoom began; set from `Entering` until reset.
    zoom_started: Option<f64>,
    pending_swap: Option<CompletionFuture>,
    host_error: Option<GargantaError>,
}

impl PortalEngine {
    /// Validate `config`, size the canvas and park every layer in its hidden state.
    pub fn new(
        config: PortalConfig,
        mut layers: HostLayers,
        viewport: Viewport,
        on_complete: OnComplete,
    ) -> GargantaResult<Self> {
        config.validate()?;
        layers.canvas.resize(viewport)?;

        layers.overlay.hide();
        layers.overlay.set_opacity(1.0, None);
        layers.overlay.set_transform(Affine::IDENTITY, None);
        layers.label.set_opacity(0.0);
        layers.label.set_interactive(false);
        layers.canvas.set_interactive(false);

        Ok(Self {
            state: TransitionState::new(config.particle_cap, config.particle_decay),
            render: RenderLoop::new(viewport, &config),
            timeline: Timeline::new(),
            rng: Rng64::new(config.seed),
            epoch: 0,
            active: false,
            label_interactive: false,
            callback_fired: false,
            zoom_started: None,
            pending_swap: None,
            host_error: None,
            config,
            layers,
            on_complete,
        })
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Direction of the current (or most recent) transition.
    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn open_ratio(&self) -> f64 {
        self.state.open_ratio
    }

    pub fn particles(&self) -> &[Particle] {
        self.state.particles.particles()
    }

    pub fn label_interactive(&self) -> bool {
        self.label_interactive
    }

    pub fn stats(&self) -> EngineStats {
        self.render.stats()
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.render.geometry().viewport
    }

    /// Error returned by the last failed host completion callback, if not yet taken.
    pub fn take_host_error(&mut self) -> Option<GargantaError> {
        self.host_error.take()
    }

    /// Begin a transition towards `direction`. Ignored while a transition is active.
    #[tracing::instrument(skip(self))]
    pub fn start(&mut self, direction: Direction) {
        if self.active {
            tracing::debug!(
                current = %self.state.direction,
                phase = ?self.state.phase,
                "start ignored: transition already active"
            );
            return;
        }

        self.arm_new_epoch(direction);
        self.state.phase = Phase::Opening;

        let palette = self.config.palettes.for_direction(direction);
        self.layers.overlay.set_transform(Affine::IDENTITY, None);
        self.layers.overlay.set_opacity(1.0, None);
        self.layers.overlay.show();
        self.layers.label.set_text(&palette.label_text);
        self.layers.label.set_color(palette.label_color);
        self.layers.label.set_opacity(0.0);
        self.layers.label.set_interactive(false);
        self.layers.canvas.set_interactive(false);
        self.layers.canvas.clear();

        if let Err(err) = self.layers.audio.play() {
            tracing::warn!(error = %err, "transition audio cue failed; continuing silently");
        }

        tracing::info!(%direction, epoch = self.epoch, "portal transition started");
    }

    /// Arrival variant: show the fully open portal for one static frame, then fade it out.
    #[tracing::instrument(skip(self))]
    pub fn play_entrance(&mut self, direction: Direction) {
        if self.active {
            tracing::debug!("play_entrance ignored: transition already active");
            return;
        }

        let now = self.layers.clock.now();
        self.arm_new_epoch(direction);
        self.state.open_ratio = 1.0;
        self.state.frozen = true;

        self.layers.overlay.set_transform(Affine::IDENTITY, None);
        self.layers.overlay.set_opacity(1.0, None);
        self.layers.overlay.show();
        self.layers.label.set_opacity(0.0);
        self.layers.label.set_interactive(false);
        self.layers.canvas.set_interactive(false);
        self.draw_static();

        self.begin_fade(now);
        tracing::info!(%direction, epoch = self.epoch, "portal entrance started");
    }

    /// Plunge through the open portal. Ignored unless the portal is [`Phase::Open`].
    #[tracing::instrument(skip(self))]
    pub fn enter_gate(&mut self) {
        if self.state.phase != Phase::Open {
            tracing::debug!(phase = ?self.state.phase, "enter_gate ignored: portal not open");
            return;
        }

        let now = self.layers.clock.now();
        self.state.phase = Phase::Entering;
        self.set_affordance(false);
        self.layers.label.set_opacity(0.0);

        let timings = &self.config.timings;
        let tween = Tween::new(timings.zoom_duration, timings.zoom_ease);
        let cover_at = now + timings.cover_delay;
        self.zoom_started = Some(now);
        self.apply_zoom(Some(tween));
        self.timeline.arm(cover_at, self.epoch, TimerAction::Covered);

        tracing::info!(direction = %self.state.direction, "entering portal");
    }

    /// Pointer activation on the canvas or the label.
    pub fn on_pointer(&mut self, target: PointerTarget) {
        if self.label_interactive {
            self.enter_gate();
        } else {
            tracing::debug!(?target, "pointer ignored: portal not interactive");
        }
    }

    /// Update cached geometry and the canvas for a new viewport size.
    pub fn resize(&mut self, viewport: Viewport) {
        self.render.set_viewport(viewport, &self.config);
        if let Err(err) = self.layers.canvas.resize(viewport) {
            tracing::warn!(error = %err, ?viewport, "canvas resize failed");
            return;
        }
        if self.active && self.state.frozen {
            self.draw_static();
        }
        if let Some(started) = self.zoom_started {
            // Re-pivot about the new centre, finishing whatever is left of the tween.
            let timings = &self.config.timings;
            let remaining = started + timings.zoom_duration - self.layers.clock.now();
            let tween = (remaining > 0.0).then(|| Tween::new(remaining, timings.zoom_ease));
            self.apply_zoom(tween);
        }
    }

    /// Scale the overlay by `zoom_scale` about the current viewport centre.
    fn apply_zoom(&mut self, tween: Option<Tween>) {
        let c = self.render.geometry().center.to_vec2();
        let zoom = Affine::translate(c)
            * Affine::scale(self.config.timings.zoom_scale)
            * Affine::translate(-c);
        self.layers.overlay.set_transform(zoom, tween);
    }

    /// Drive one animation frame: fire due timers, advance the opening or poll the host
    /// swap, and report what to schedule next.
    pub fn on_frame(&mut self) -> FrameRequest {
        let now = self.layers.clock.now();
        for action in self.timeline.take_due(now, self.epoch) {
            self.run_timer(action, now);
        }

        match self.state.phase {
            Phase::Opening => self.step_opening(now),
            Phase::Entering => self.poll_swap(now),
            Phase::Closed | Phase::Open | Phase::Completing => {}
        }
        self.schedule()
    }

    pub fn schedule(&self) -> FrameRequest {
        let next_timer = || {
            self.timeline
                .next_due()
                .map(FrameRequest::At)
                .unwrap_or(FrameRequest::Idle)
        };
        match self.state.phase {
            Phase::Closed => FrameRequest::Idle,
            Phase::Opening => FrameRequest::AnimationFrame,
            Phase::Entering if self.pending_swap.is_some() => FrameRequest::AnimationFrame,
            Phase::Open | Phase::Entering | Phase::Completing => next_timer(),
        }
    }

    /// Forced cleanup from any phase. A pending host swap is dropped, never re-invoked.
    #[tracing::instrument(skip(self))]
    pub fn teardown(&mut self) {
        if !self.active {
            return;
        }
        self.epoch += 1;
        self.reset_to_closed();
        tracing::info!("portal transition torn down");
    }

    fn arm_new_epoch(&mut self, direction: Direction) {
        self.epoch += 1;
        self.timeline.cancel_all();
        self.pending_swap = None;
        self.callback_fired = false;
        if let Some(stale) = self.host_error.take() {
            tracing::debug!(error = %stale, "discarding unread host error");
        }

        let noise_phase = self.rng.range(0.0, 1_000.0);
        self.state.reset(direction, noise_phase);
        self.render.rearm();
        self.active = true;
    }

    fn step_opening(&mut self, now: f64) {
        let palette = self.config.palettes.for_direction(self.state.direction);
        let outcome = self.render.step_opening(
            &mut self.state,
            &self.config,
            palette,
            &mut self.rng,
            self.layers.canvas.as_mut(),
        );
        if outcome == FrameOutcome::Frozen {
            self.state.phase = Phase::Open;
            self.set_affordance(true);
            self.layers.label.set_opacity(1.0);
            if let Some(after) = self.config.auto_enter_after {
                self.timeline
                    .arm(now + after, self.epoch, TimerAction::AutoEnter);
            }
            tracing::info!("portal fully open; geometry frozen");
        }
    }

    fn run_timer(&mut self, action: TimerAction, now: f64) {
        match action {
            TimerAction::AutoEnter => self.enter_gate(),
            TimerAction::Covered => self.invoke_host(now),
            TimerAction::Settled => {
                if self.state.phase == Phase::Entering {
                    self.begin_fade(now);
                }
            }
            TimerAction::Faded => self.finish(),
        }
    }

    fn invoke_host(&mut self, now: f64) {
        if self.callback_fired {
            return;
        }
        self.callback_fired = true;
        tracing::info!(direction = %self.state.direction, "screen covered; invoking host swap");
        self.pending_swap = Some((self.on_complete)(self.state.direction));
        self.poll_swap(now);
    }

    fn poll_swap(&mut self, now: f64) {
        let Some(fut) = self.pending_swap.as_mut() else {
            return;
        };
        let mut cx = Context::from_waker(Waker::noop());
        let Poll::Ready(result) = fut.as_mut().poll(&mut cx) else {
            return;
        };

        self.pending_swap = None;
        if let Err(err) = result {
            self.host_error = Some(GargantaError::host(format!("{err:#}")));
        }
        self.timeline.arm(
            now + self.config.timings.settle_delay,
            self.epoch,
            TimerAction::Settled,
        );
    }

    fn begin_fade(&mut self, now: f64) {
        let timings = &self.config.timings;
        self.state.phase = Phase::Completing;
        self.layers.overlay.set_opacity(
            0.0,
            Some(Tween::new(timings.fade_duration, timings.fade_ease)),
        );
        self.timeline
            .arm(now + timings.fade_duration, self.epoch, TimerAction::Faded);
    }

    fn finish(&mut self) {
        self.reset_to_closed();
        tracing::info!(direction = %self.state.direction, "portal transition complete");
        if let Some(err) = &self.host_error {
            tracing::error!(
                error = %err,
                direction = %self.state.direction,
                "host completion callback failed; portal was still torn down"
            );
        }
    }

    fn reset_to_closed(&mut self) {
        self.timeline.cancel_all();
        self.pending_swap = None;
        self.zoom_started = None;

        self.layers.overlay.hide();
        self.layers.overlay.set_opacity(1.0, None);
        self.layers.overlay.set_transform(Affine::IDENTITY, None);
        self.set_affordance(false);
        self.layers.label.set_opacity(0.0);
        self.layers.canvas.clear();

        self.state.particles.clear();
        self.state.frozen = false;
        self.state.phase = Phase::Closed;
        self.active = false;
    }

    fn set_affordance(&mut self, interactive: bool) {
        self.label_interactive = interactive;
        self.layers.label.set_interactive(interactive);
        self.layers.canvas.set_interactive(interactive);
    }

    fn draw_static(&mut self) {
        let palette = self.config.palettes.for_direction(self.state.direction);
        self.render.draw_static(
            &self.state,
            &self.config,
            palette,
            self.layers.canvas.as_mut(),
        );
    }
}

impl std::fmt::Debug for PortalEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalEngine")
            .field("phase", &self.state.phase)
            .field("direction", &self.state.direction)
            .field("open_ratio", &self.state.open_ratio)
            .field("active", &self.active)
            .field("epoch", &self.epoch)
            .field("pending_timers", &self.timeline.len())
            .finish_non_exhaustive()
    }
}
