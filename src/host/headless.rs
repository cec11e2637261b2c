//! In-memory host layers that record what the engine asks of them.
//!
//! Used by the CLI simulation and by tests; every layer handed out by a
//! [`HeadlessStage`] writes into the same shared [`StageState`].

use std::{cell::RefCell, rc::Rc};

use crate::{
    animation::tween::Tween,
    foundation::core::{Affine, BezPath, Rect, Rgba8, Viewport},
    foundation::error::{GargantaError, GargantaResult},
    host::{AudioCue, Clock, HostLayers, Label, Overlay, PortalCanvas, VoidStyle},
};

/// Everything the headless layers have been told so far.
#[derive(Clone, Debug, PartialEq)]
pub struct StageState {
    pub overlay_visible: bool,
    pub overlay_opacity: f64,
    pub overlay_opacity_tween: Option<Tween>,
    pub overlay_transform: Affine,
    pub overlay_transform_tween: Option<Tween>,
    pub label_text: String,
    pub label_color: Rgba8,
    pub label_opacity: f64,
    pub label_interactive: bool,
    pub canvas_interactive: bool,
    pub canvas_viewport: Option<Viewport>,
    pub void_draws: usize,
    pub spark_draws: usize,
    pub presents: usize,
    pub clears: usize,
    pub last_void: Option<(BezPath, Affine)>,
    pub audio_plays: usize,
    /// Make [`AudioCue::play`] fail, as a browser autoplay policy would.
    pub fail_audio: bool,
    /// Make [`PortalCanvas::present`] fail.
    pub fail_present: bool,
}

impl Default for StageState {
    fn default() -> Self {
        Self {
            overlay_visible: false,
            overlay_opacity: 1.0,
            overlay_opacity_tween: None,
            overlay_transform: Affine::IDENTITY,
            overlay_transform_tween: None,
            label_text: String::new(),
            label_color: Rgba8::BLACK,
            label_opacity: 0.0,
            label_interactive: false,
            canvas_interactive: false,
            canvas_viewport: None,
            void_draws: 0,
            spark_draws: 0,
            presents: 0,
            clears: 0,
            last_void: None,
            audio_plays: 0,
            fail_audio: false,
            fail_present: false,
        }
    }
}

/// Factory for headless layers sharing one [`StageState`].
#[derive(Clone, Debug, Default)]
pub struct HeadlessStage {
    state: Rc<RefCell<StageState>>,
}

impl HeadlessStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Headless overlay, label, audio and canvas.
    pub fn layers(&self, clock: Box<dyn Clock>) -> HostLayers {
        self.layers_with_canvas(Box::new(HeadlessCanvas::new(self.state.clone())), clock)
    }

    /// Headless overlay, label and audio around a caller-provided canvas.
    pub fn layers_with_canvas(
        &self,
        canvas: Box<dyn PortalCanvas>,
        clock: Box<dyn Clock>,
    ) -> HostLayers {
        HostLayers {
            canvas,
            overlay: Box::new(HeadlessOverlay {
                state: self.state.clone(),
            }),
            label: Box::new(HeadlessLabel {
                state: self.state.clone(),
            }),
            audio: Box::new(HeadlessAudio {
                state: self.state.clone(),
            }),
            clock,
        }
    }

    pub fn snapshot(&self) -> StageState {
        self.state.borrow().clone()
    }

    pub fn update(&self, f: impl FnOnce(&mut StageState)) {
        f(&mut self.state.borrow_mut());
    }
}

/// Canvas that only counts draws.
pub struct HeadlessCanvas {
    state: Rc<RefCell<StageState>>,
}

impl HeadlessCanvas {
    fn new(state: Rc<RefCell<StageState>>) -> Self {
        Self { state }
    }
}

impl PortalCanvas for HeadlessCanvas {
    fn resize(&mut self, viewport: Viewport) -> GargantaResult<()> {
        self.state.borrow_mut().canvas_viewport = Some(viewport);
        Ok(())
    }

    fn clear(&mut self) {
        self.state.borrow_mut().clears += 1;
    }

    fn fill_void(&mut self, path: &BezPath, transform: Affine, _style: &VoidStyle) {
        let mut s = self.state.borrow_mut();
        s.void_draws += 1;
        s.last_void = Some((path.clone(), transform));
    }

    fn fill_spark(&mut self, _rect: Rect, _color: Rgba8, _alpha: f32) {
        self.state.borrow_mut().spark_draws += 1;
    }

    fn present(&mut self) -> GargantaResult<()> {
        let mut s = self.state.borrow_mut();
        if s.fail_present {
            return Err(GargantaError::render("headless present failure"));
        }
        s.presents += 1;
        Ok(())
    }

    fn set_interactive(&mut self, interactive: bool) {
        self.state.borrow_mut().canvas_interactive = interactive;
    }
}

struct HeadlessOverlay {
    state: Rc<RefCell<StageState>>,
}

impl Overlay for HeadlessOverlay {
    fn show(&mut self) {
        self.state.borrow_mut().overlay_visible = true;
    }

    fn hide(&mut self) {
        self.state.borrow_mut().overlay_visible = false;
    }

    fn set_opacity(&mut self, opacity: f64, tween: Option<Tween>) {
        let mut s = self.state.borrow_mut();
        s.overlay_opacity = opacity;
        s.overlay_opacity_tween = tween;
    }

    fn set_transform(&mut self, transform: Affine, tween: Option<Tween>) {
        let mut s = self.state.borrow_mut();
        s.overlay_transform = transform;
        s.overlay_transform_tween = tween;
    }
}

struct HeadlessLabel {
    state: Rc<RefCell<StageState>>,
}

impl Label for HeadlessLabel {
    fn set_text(&mut self, text: &str) {
        self.state.borrow_mut().label_text = text.to_string();
    }

    fn set_color(&mut self, color: Rgba8) {
        self.state.borrow_mut().label_color = color;
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.state.borrow_mut().label_opacity = opacity;
    }

    fn set_interactive(&mut self, interactive: bool) {
        self.state.borrow_mut().label_interactive = interactive;
    }
}

struct HeadlessAudio {
    state: Rc<RefCell<StageState>>,
}

impl AudioCue for HeadlessAudio {
    fn play(&mut self) -> anyhow::Result<()> {
        let mut s = self.state.borrow_mut();
        if s.fail_audio {
            anyhow::bail!("playback blocked by autoplay policy");
        }
        s.audio_plays += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/headless.rs"]
mod tests;
